use crate::error::GpaError;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpResponse};
use gpa_reminders_api_structs::update_reminder::*;
use gpa_reminders_domain::{Reminder, ID};
use gpa_reminders_infra::GpaContext;

fn handle_error(e: UseCaseErrors) -> GpaError {
    match e {
        UseCaseErrors::ReminderNotFound(reminder_id) => GpaError::NotFound(format!(
            "The reminder with id: {}, was not found.",
            reminder_id
        )),
        UseCaseErrors::StorageError => GpaError::InternalError,
    }
}

pub async fn update_reminder_controller(
    path: web::Path<PathParams>,
    body: web::Json<RequestBody>,
    ctx: web::Data<GpaContext>,
) -> Result<HttpResponse, GpaError> {
    let body = body.0;
    let usecase = UpdateReminderUseCase {
        reminder_id: path.into_inner().reminder_id,
        due_at: body.due_at,
        notes: body.notes,
    };

    execute(usecase, &ctx)
        .await
        .map(|reminder| HttpResponse::Ok().json(APIResponse::new(reminder)))
        .map_err(handle_error)
}

/// Reschedules a reminder. A `Triggered` reminder becomes `Scheduled`
/// again and a pending pre-notification is rearmed, while the id and the
/// creation timestamp stay untouched.
#[derive(Debug)]
pub struct UpdateReminderUseCase {
    pub reminder_id: ID,
    pub due_at: i64,
    pub notes: Option<String>,
}

#[derive(Debug)]
pub enum UseCaseErrors {
    ReminderNotFound(ID),
    StorageError,
}

#[async_trait::async_trait(?Send)]
impl UseCase for UpdateReminderUseCase {
    type Response = Reminder;
    type Errors = UseCaseErrors;

    const NAME: &'static str = "UpdateReminder";

    async fn execute(&mut self, ctx: &GpaContext) -> Result<Self::Response, Self::Errors> {
        let mut reminder = match ctx.repos.reminder_repo.find(&self.reminder_id).await {
            Some(reminder) => reminder,
            None => return Err(UseCaseErrors::ReminderNotFound(self.reminder_id.clone())),
        };

        reminder.reschedule(self.due_at, self.notes.clone());

        ctx.repos
            .reminder_repo
            .save(&reminder)
            .await
            .map(|_| reminder)
            .map_err(|_| UseCaseErrors::StorageError)
    }
}
