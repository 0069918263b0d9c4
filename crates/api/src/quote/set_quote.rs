use crate::error::GpaError;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpResponse};
use gpa_reminders_api_structs::set_quote::*;
use gpa_reminders_domain::{Quote, ID};
use gpa_reminders_infra::GpaContext;

pub async fn set_quote_controller(
    body: web::Json<RequestBody>,
    ctx: web::Data<GpaContext>,
) -> Result<HttpResponse, GpaError> {
    let body = body.0;
    let usecase = SetQuoteUseCase {
        id: body.id,
        client_name: body.client_name,
        vehicle_description: body.vehicle_description,
        amount: body.amount,
    };

    execute(usecase, &ctx)
        .await
        .map(|quote| HttpResponse::Created().json(APIResponse::new(quote)))
        .map_err(GpaError::from)
}

/// Registers the quote details used to enrich the follow-up emails.
/// Posting the same quote id again replaces the earlier details.
#[derive(Debug)]
pub struct SetQuoteUseCase {
    pub id: ID,
    pub client_name: String,
    pub vehicle_description: String,
    pub amount: f64,
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
impl UseCase for SetQuoteUseCase {
    type Response = Quote;
    type Errors = UseCaseErrors;

    const NAME: &'static str = "SetQuote";

    async fn execute(&mut self, ctx: &GpaContext) -> Result<Self::Response, Self::Errors> {
        let quote = Quote::new(
            self.id.clone(),
            self.client_name.clone(),
            self.vehicle_description.clone(),
            self.amount,
        );

        ctx.repos
            .quote_repo
            .upsert(&quote)
            .await
            .map(|_| quote)
            .map_err(|_| UseCaseErrors::StorageError)
    }
}
