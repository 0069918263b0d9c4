use crate::error::GpaError;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpResponse};
use gpa_reminders_api_structs::get_quote::*;
use gpa_reminders_domain::{Quote, ID};
use gpa_reminders_infra::GpaContext;

fn handle_error(e: UseCaseErrors) -> GpaError {
    match e {
        UseCaseErrors::QuoteNotFound(quote_id) => {
            GpaError::NotFound(format!("The quote with id: {}, was not found.", quote_id))
        }
    }
}

pub async fn get_quote_controller(
    path: web::Path<PathParams>,
    ctx: web::Data<GpaContext>,
) -> Result<HttpResponse, GpaError> {
    let usecase = GetQuoteUseCase {
        quote_id: path.into_inner().quote_id,
    };

    execute(usecase, &ctx)
        .await
        .map(|quote| HttpResponse::Ok().json(APIResponse::new(quote)))
        .map_err(handle_error)
}

#[derive(Debug)]
pub struct GetQuoteUseCase {
    pub quote_id: ID,
}

#[derive(Debug)]
pub enum UseCaseErrors {
    QuoteNotFound(ID),
}

#[async_trait::async_trait(?Send)]
impl UseCase for GetQuoteUseCase {
    type Response = Quote;
    type Errors = UseCaseErrors;

    const NAME: &'static str = "GetQuote";

    async fn execute(&mut self, ctx: &GpaContext) -> Result<Self::Response, Self::Errors> {
        ctx.repos
            .quote_repo
            .find(&self.quote_id)
            .await
            .ok_or_else(|| UseCaseErrors::QuoteNotFound(self.quote_id.clone()))
    }
}
