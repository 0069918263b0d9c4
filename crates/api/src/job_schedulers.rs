use crate::reminder::poll_reminders::PollRemindersUseCase;
use crate::shared::usecase::execute;
use actix_web::rt::time::interval;
use gpa_reminders_infra::{GpaContext, Permission};
use std::time::Duration;
use tracing::{info, warn};

pub struct PollJobHandle {
    handle: actix_web::rt::task::JoinHandle<()>,
}

impl PollJobHandle {
    /// Stops future poll runs. A poll that is already in flight finishes
    /// on its own.
    pub fn stop(&self) {
        self.handle.abort();
    }
}

pub fn start_reminder_poll_job(ctx: GpaContext) -> PollJobHandle {
    let handle = actix_web::rt::spawn(async move {
        match ctx.notifier.request_permission().await {
            Permission::Granted => info!("Notification permission granted"),
            Permission::Denied => {
                warn!("Notification permission denied, reminder alerts will only reach the email relay")
            }
        }

        let mut poll_interval = interval(Duration::from_secs(ctx.config.poll_interval_secs));
        loop {
            // The first tick resolves right away, which covers the reminders
            // that came due while the service was down
            poll_interval.tick().await;
            let context = ctx.clone();
            actix_web::rt::spawn(poll_reminders(context));
        }
    });
    PollJobHandle { handle }
}

async fn poll_reminders(context: GpaContext) {
    let _ = execute(PollRemindersUseCase {}, &context).await;
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::rt::time::sleep;
    use gpa_reminders_domain::{Reminder, ReminderStatus};

    #[actix_web::main]
    #[test]
    async fn polls_once_at_startup() {
        let ctx = GpaContext::create_inmemory();
        let now = ctx.sys.get_timestamp_millis();
        let reminder = Reminder::new(
            now - 1000 * 60,
            "DEVIS-2024-001".parse().unwrap(),
            None,
            now,
        );
        ctx.repos.reminder_repo.insert(&reminder).await.unwrap();

        let job = start_reminder_poll_job(ctx.clone());
        sleep(Duration::from_millis(500)).await;
        job.stop();

        let stored = ctx.repos.reminder_repo.find(&reminder.id).await.unwrap();
        assert_eq!(stored.status, ReminderStatus::Triggered);
        assert_eq!(ctx.repos.sent_email_repo.find_all().await.len(), 1);
    }
}
