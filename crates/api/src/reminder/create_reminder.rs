use crate::error::GpaError;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpResponse};
use gpa_reminders_api_structs::create_reminder::*;
use gpa_reminders_domain::{Reminder, ID};
use gpa_reminders_infra::GpaContext;

pub async fn create_reminder_controller(
    body: web::Json<RequestBody>,
    ctx: web::Data<GpaContext>,
) -> Result<HttpResponse, GpaError> {
    let body = body.0;
    let usecase = CreateReminderUseCase {
        due_at: body.due_at,
        quote_id: body.quote_id,
        notes: body.notes,
    };

    execute(usecase, &ctx)
        .await
        .map(|reminder| HttpResponse::Created().json(APIResponse::new(reminder)))
        .map_err(GpaError::from)
}

#[derive(Debug)]
pub struct CreateReminderUseCase {
    pub due_at: i64,
    pub quote_id: ID,
    pub notes: Option<String>,
}

#[derive(Debug)]
pub enum UseCaseErrors {
    StorageError,
}

impl From<UseCaseErrors> for GpaError {
    fn from(e: UseCaseErrors) -> Self {
        match e {
            UseCaseErrors::StorageError => Self::InternalError,
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for CreateReminderUseCase {
    type Response = Reminder;
    type Errors = UseCaseErrors;

    const NAME: &'static str = "CreateReminder";

    async fn execute(&mut self, ctx: &GpaContext) -> Result<Self::Response, Self::Errors> {
        let now = ctx.sys.get_timestamp_millis();
        // A due date in the past is accepted, the reminder then fires on
        // the next poll run
        let reminder = Reminder::new(self.due_at, self.quote_id.clone(), self.notes.clone(), now);

        ctx.repos
            .reminder_repo
            .insert(&reminder)
            .await
            .map(|_| reminder)
            .map_err(|_| UseCaseErrors::StorageError)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gpa_reminders_domain::ReminderStatus;
    use gpa_reminders_infra::ISys;
    use std::sync::Arc;

    struct StaticTimeSys {}
    impl ISys for StaticTimeSys {
        fn get_timestamp_millis(&self) -> i64 {
            1613862000000
        }
    }

    #[actix_web::main]
    #[test]
    async fn creates_reminder_with_a_time_based_id() {
        let mut ctx = GpaContext::create_inmemory();
        ctx.sys = Arc::new(StaticTimeSys {});

        let mut usecase = CreateReminderUseCase {
            due_at: 1613862000000 + 1000 * 60,
            quote_id: "DEVIS-2024-001".parse().unwrap(),
            notes: Some("Relancer le client".into()),
        };
        let reminder = usecase.execute(&ctx).await.expect("To create reminder");

        assert_eq!(reminder.id.to_string(), "rappel-1613862000000");
        assert_eq!(reminder.created_at, 1613862000000);
        assert_eq!(reminder.status, ReminderStatus::Scheduled);
        assert!(!reminder.notified_early);
        assert_eq!(reminder.last_triggered_at, None);

        let stored = ctx.repos.reminder_repo.find_all().await;
        assert_eq!(stored.len(), 1);
        assert_eq!(stored[0].id, reminder.id);
    }

    #[actix_web::main]
    #[test]
    async fn accepts_a_due_date_in_the_past() {
        let mut ctx = GpaContext::create_inmemory();
        ctx.sys = Arc::new(StaticTimeSys {});

        let mut usecase = CreateReminderUseCase {
            due_at: 1613862000000 - 1000 * 60,
            quote_id: "DEVIS-2024-001".parse().unwrap(),
            notes: None,
        };
        let reminder = usecase.execute(&ctx).await.expect("To create reminder");

        assert!(reminder.is_due(ctx.sys.get_timestamp_millis()));
    }
}
