use super::poll_reminders::{PollRemindersUseCase, PolledReminders};
use crate::shared::usecase::Subscriber;
use gpa_reminders_domain::{compose_reminder_email, AlertKind, Reminder, SentEmail};
use gpa_reminders_infra::{EmailDelivery, GpaContext, Notification, OutgoingEmail};
use tracing::{error, info, warn};

/// Presents the alerts of a poll run to the agents. Each transitioned
/// reminder gets a system notification and a follow-up email, and every
/// composed email ends up in the send log whether the relay accepted it
/// or not.
pub struct SendAlertsOnPoll {}

#[async_trait::async_trait(?Send)]
impl Subscriber<PollRemindersUseCase> for SendAlertsOnPoll {
    async fn notify(&self, polled: &PolledReminders, ctx: &GpaContext) {
        for alert in &polled.alerts {
            send_reminder_alert(&alert.reminder, alert.kind, ctx).await;
        }
    }
}

async fn send_reminder_alert(reminder: &Reminder, kind: AlertKind, ctx: &GpaContext) {
    let notification = build_notification(reminder, kind);
    if let Err(e) = ctx.notifier.show(&notification).await {
        warn!(
            "Skipping the system notification for reminder: {}. Error message: {}",
            reminder.id, e
        );
    }

    let quote = ctx.repos.quote_repo.find(&reminder.quote_id).await;
    let email = compose_reminder_email(reminder, quote.as_ref(), kind);
    let outgoing = OutgoingEmail {
        to: ctx.config.email_to.clone(),
        subject: email.subject.clone(),
        text: email.body.clone(),
        from: ctx.config.email_from.clone(),
    };

    match ctx.mailer.send(&outgoing).await {
        Ok(EmailDelivery::Sent) => {
            info!("Delivered follow-up email for reminder: {}", reminder.id)
        }
        Ok(EmailDelivery::Simulated) => {
            info!("Simulated follow-up email for reminder: {}", reminder.id)
        }
        Err(e) => {
            error!(
                "Follow-up email for reminder: {} was not delivered. Error message: {}",
                reminder.id, e
            );
            let failure = Notification {
                title: "Erreur d'envoi d'email".into(),
                body: format!("Erreur lors de l'envoi de l'email: {}", e),
                tag: format!("email-erreur-{}", reminder.id),
            };
            if let Err(e) = ctx.notifier.show(&failure).await {
                warn!(
                    "Unable to surface the email failure. Error message: {}",
                    e
                );
            }
        }
    }

    let sent_email = SentEmail::new(
        email.subject,
        email.body,
        reminder.id.clone(),
        kind,
        ctx.sys.get_timestamp_millis(),
    );
    if let Err(e) = ctx.repos.sent_email_repo.insert(&sent_email).await {
        error!(
            "Unable to record the follow-up email for reminder: {}. Error message: {}",
            reminder.id, e
        );
    }
}

fn build_notification(reminder: &Reminder, kind: AlertKind) -> Notification {
    match kind {
        AlertKind::DueSoon => Notification {
            title: "Rappel imminent".into(),
            body: format!(
                "Devis #{}: {}",
                reminder.quote_id,
                reminder
                    .notes
                    .as_deref()
                    .unwrap_or("Rappel prévu dans 15 minutes")
            ),
            tag: format!("avant-rappel-{}", reminder.id),
        },
        AlertKind::Due => Notification {
            title: format!("Rappel Devis #{}", reminder.quote_id),
            body: reminder
                .notes
                .clone()
                .unwrap_or_else(|| "Rappel de suivi".into()),
            tag: format!("rappel-{}", reminder.id),
        },
    }
}
