use crate::error::GpaError;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpResponse};
use gpa_reminders_api_structs::get_sent_emails::*;
use gpa_reminders_domain::SentEmail;
use gpa_reminders_infra::GpaContext;

pub async fn get_sent_emails_controller(
    ctx: web::Data<GpaContext>,
) -> Result<HttpResponse, GpaError> {
    let usecase = GetSentEmailsUseCase {};

    execute(usecase, &ctx)
        .await
        .map(|sent_emails| HttpResponse::Ok().json(APIResponse::new(sent_emails)))
        .map_err(|_| GpaError::InternalError)
}

/// Lists the send log in hand-off order, the simulated sends included.
#[derive(Debug)]
pub struct GetSentEmailsUseCase {}

#[derive(Debug)]
pub enum UseCaseErrors {}

#[async_trait::async_trait(?Send)]
impl UseCase for GetSentEmailsUseCase {
    type Response = Vec<SentEmail>;
    type Errors = UseCaseErrors;

    const NAME: &'static str = "GetSentEmails";

    async fn execute(&mut self, ctx: &GpaContext) -> Result<Self::Response, Self::Errors> {
        Ok(ctx.repos.sent_email_repo.find_all().await)
    }
}
