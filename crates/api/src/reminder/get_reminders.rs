use crate::error::GpaError;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpResponse};
use gpa_reminders_api_structs::get_reminders::*;
use gpa_reminders_domain::Reminder;
use gpa_reminders_infra::GpaContext;

pub async fn get_reminders_controller(
    ctx: web::Data<GpaContext>,
) -> Result<HttpResponse, GpaError> {
    let usecase = GetRemindersUseCase {};

    execute(usecase, &ctx)
        .await
        .map(|reminders| HttpResponse::Ok().json(APIResponse::new(reminders)))
        .map_err(|_| GpaError::InternalError)
}

#[derive(Debug)]
pub struct GetRemindersUseCase {}

#[derive(Debug)]
pub enum UseCaseErrors {}

#[async_trait::async_trait(?Send)]
impl UseCase for GetRemindersUseCase {
    type Response = Vec<Reminder>;
    type Errors = UseCaseErrors;

    const NAME: &'static str = "GetReminders";

    async fn execute(&mut self, ctx: &GpaContext) -> Result<Self::Response, Self::Errors> {
        Ok(ctx.repos.reminder_repo.find_all().await)
    }
}
