use super::subscribers::SendAlertsOnPoll;
use crate::shared::usecase::{Subscriber, UseCase};
use gpa_reminders_domain::{AlertKind, Reminder};
use gpa_reminders_infra::GpaContext;

/// One evaluation pass over the reminder collection. Reminders entering
/// the due soon window and reminders past their due date transition here,
/// and the new state is persisted before any alert goes out. The alerts
/// themselves are dispatched by a `Subscriber` so a failing email or
/// notification can never roll back a transition.
#[derive(Debug)]
pub struct PollRemindersUseCase {}

#[derive(Debug)]
pub struct ReminderAlert {
    pub reminder: Reminder,
    pub kind: AlertKind,
}

#[derive(Debug)]
pub struct PolledReminders {
    pub alerts: Vec<ReminderAlert>,
}

#[derive(Debug)]
pub enum UseCaseErrors {
    StorageError,
}

#[async_trait::async_trait(?Send)]
impl UseCase for PollRemindersUseCase {
    type Response = PolledReminders;
    type Errors = UseCaseErrors;

    const NAME: &'static str = "PollReminders";

    async fn execute(&mut self, ctx: &GpaContext) -> Result<Self::Response, Self::Errors> {
        let now = ctx.sys.get_timestamp_millis();
        let reminders = ctx.repos.reminder_repo.find_all().await;

        let mut alerts = Vec::new();

        // Pre-notifications before the due reminders, in insertion order
        for reminder in &reminders {
            if reminder.is_due_soon(now) {
                let mut reminder = reminder.clone();
                reminder.mark_notified_early();
                alerts.push(ReminderAlert {
                    reminder,
                    kind: AlertKind::DueSoon,
                });
            }
        }
        for reminder in &reminders {
            if reminder.is_due(now) {
                let mut reminder = reminder.clone();
                reminder.trigger(now);
                alerts.push(ReminderAlert {
                    reminder,
                    kind: AlertKind::Due,
                });
            }
        }

        if !alerts.is_empty() {
            let changed = alerts
                .iter()
                .map(|alert| alert.reminder.clone())
                .collect::<Vec<_>>();
            ctx.repos
                .reminder_repo
                .save_all(&changed)
                .await
                .map_err(|_| UseCaseErrors::StorageError)?;
        }

        Ok(PolledReminders { alerts })
    }

    fn subscribers() -> Vec<Box<dyn Subscriber<Self>>> {
        vec![Box::new(SendAlertsOnPoll {})]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gpa_reminders_domain::{ReminderStatus, ID};
    use gpa_reminders_infra::ISys;
    use std::sync::Arc;

    const NOW: i64 = 1613862000000;

    pub struct StaticTimeSys1 {}
    impl ISys for StaticTimeSys1 {
        fn get_timestamp_millis(&self) -> i64 {
            NOW
        }
    }

    pub struct StaticTimeSys2 {}
    impl ISys for StaticTimeSys2 {
        fn get_timestamp_millis(&self) -> i64 {
            NOW + 1000 * 60 * 11
        }
    }

    fn setup_ctx() -> GpaContext {
        let mut ctx = GpaContext::create_inmemory();
        ctx.sys = Arc::new(StaticTimeSys1 {});
        ctx
    }

    async fn insert_reminder(ctx: &GpaContext, due_at: i64, created_at: i64) -> Reminder {
        let quote_id: ID = "DEVIS-2024-001".parse().unwrap();
        let reminder = Reminder::new(due_at, quote_id, None, created_at);
        ctx.repos.reminder_repo.insert(&reminder).await.unwrap();
        reminder
    }

    async fn poll(ctx: &GpaContext) -> PolledReminders {
        PollRemindersUseCase {}
            .execute(ctx)
            .await
            .expect("Poll to succeed")
    }

    #[actix_web::main]
    #[test]
    async fn triggers_due_reminders_and_leaves_the_rest_alone() {
        let ctx = setup_ctx();
        let due = insert_reminder(&ctx, NOW - 1000, NOW - 10000).await;
        let far_away = insert_reminder(&ctx, NOW + 1000 * 60 * 60, NOW - 9000).await;

        let polled = poll(&ctx).await;

        assert_eq!(polled.alerts.len(), 1);
        assert_eq!(polled.alerts[0].kind, AlertKind::Due);
        assert_eq!(polled.alerts[0].reminder.id, due.id);

        let stored = ctx.repos.reminder_repo.find(&due.id).await.unwrap();
        assert_eq!(stored.status, ReminderStatus::Triggered);
        assert_eq!(stored.last_triggered_at, Some(NOW));

        let untouched = ctx.repos.reminder_repo.find(&far_away.id).await.unwrap();
        assert_eq!(untouched.status, ReminderStatus::Scheduled);
        assert!(!untouched.notified_early);

        // A due reminder fires exactly once
        assert!(poll(&ctx).await.alerts.is_empty());
    }

    #[actix_web::main]
    #[test]
    async fn pre_notifies_inside_the_window_exactly_once() {
        let ctx = setup_ctx();
        let upcoming = insert_reminder(&ctx, NOW + 1000 * 60 * 10, NOW - 10000).await;

        let polled = poll(&ctx).await;

        assert_eq!(polled.alerts.len(), 1);
        assert_eq!(polled.alerts[0].kind, AlertKind::DueSoon);
        assert_eq!(polled.alerts[0].reminder.id, upcoming.id);

        let stored = ctx.repos.reminder_repo.find(&upcoming.id).await.unwrap();
        assert_eq!(stored.status, ReminderStatus::Scheduled);
        assert!(stored.notified_early);

        assert!(poll(&ctx).await.alerts.is_empty());
    }

    #[actix_web::main]
    #[test]
    async fn skips_the_pre_notification_for_an_already_due_reminder() {
        let ctx = setup_ctx();
        insert_reminder(&ctx, NOW, NOW - 10000).await;

        let polled = poll(&ctx).await;

        assert_eq!(polled.alerts.len(), 1);
        assert_eq!(polled.alerts[0].kind, AlertKind::Due);
    }

    #[actix_web::main]
    #[test]
    async fn pre_notified_reminder_fires_when_its_due_date_passes() {
        let mut ctx = setup_ctx();
        let reminder = insert_reminder(&ctx, NOW + 1000 * 60 * 10, NOW - 10000).await;

        assert_eq!(poll(&ctx).await.alerts[0].kind, AlertKind::DueSoon);

        ctx.sys = Arc::new(StaticTimeSys2 {});
        let polled = poll(&ctx).await;
        assert_eq!(polled.alerts.len(), 1);
        assert_eq!(polled.alerts[0].kind, AlertKind::Due);

        let stored = ctx.repos.reminder_repo.find(&reminder.id).await.unwrap();
        assert_eq!(stored.status, ReminderStatus::Triggered);
        assert_eq!(stored.last_triggered_at, Some(NOW + 1000 * 60 * 11));
        assert!(stored.notified_early);

        assert!(poll(&ctx).await.alerts.is_empty());
    }

    #[actix_web::main]
    #[test]
    async fn due_soon_alerts_are_dispatched_before_due_alerts() {
        let ctx = setup_ctx();
        let due = insert_reminder(&ctx, NOW, NOW - 10000).await;
        let upcoming = insert_reminder(&ctx, NOW + 1000 * 60 * 5, NOW - 9000).await;

        let polled = poll(&ctx).await;

        assert_eq!(polled.alerts.len(), 2);
        assert_eq!(polled.alerts[0].kind, AlertKind::DueSoon);
        assert_eq!(polled.alerts[0].reminder.id, upcoming.id);
        assert_eq!(polled.alerts[1].kind, AlertKind::Due);
        assert_eq!(polled.alerts[1].reminder.id, due.id);
    }

    #[actix_web::main]
    #[test]
    async fn empty_collection_polls_to_nothing() {
        let ctx = setup_ctx();
        assert!(poll(&ctx).await.alerts.is_empty());
    }
}
