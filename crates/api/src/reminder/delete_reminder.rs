use crate::error::GpaError;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpResponse};
use gpa_reminders_api_structs::delete_reminder::*;
use gpa_reminders_domain::{Reminder, ID};
use gpa_reminders_infra::GpaContext;

fn handle_error(e: UseCaseErrors) -> GpaError {
    match e {
        UseCaseErrors::ReminderNotFound(reminder_id) => GpaError::NotFound(format!(
            "The reminder with id: {}, was not found.",
            reminder_id
        )),
    }
}

pub async fn delete_reminder_controller(
    path: web::Path<PathParams>,
    ctx: web::Data<GpaContext>,
) -> Result<HttpResponse, GpaError> {
    let usecase = DeleteReminderUseCase {
        reminder_id: path.into_inner().reminder_id,
    };

    execute(usecase, &ctx)
        .await
        .map(|reminder| HttpResponse::Ok().json(APIResponse::new(reminder)))
        .map_err(handle_error)
}

#[derive(Debug)]
pub struct DeleteReminderUseCase {
    pub reminder_id: ID,
}

#[derive(Debug)]
pub enum UseCaseErrors {
    ReminderNotFound(ID),
}

#[async_trait::async_trait(?Send)]
impl UseCase for DeleteReminderUseCase {
    type Response = Reminder;
    type Errors = UseCaseErrors;

    const NAME: &'static str = "DeleteReminder";

    async fn execute(&mut self, ctx: &GpaContext) -> Result<Self::Response, Self::Errors> {
        ctx.repos
            .reminder_repo
            .delete(&self.reminder_id)
            .await
            .ok_or_else(|| UseCaseErrors::ReminderNotFound(self.reminder_id.clone()))
    }
}
