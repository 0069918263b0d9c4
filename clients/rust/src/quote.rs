use crate::{APIResponse, BaseClient, ID};
use gpa_reminders_api_structs::*;
use reqwest::StatusCode;
use std::sync::Arc;

#[derive(Clone)]
pub struct QuoteClient {
    base: Arc<BaseClient>,
}

pub struct SetQuoteInput {
    pub id: ID,
    pub client_name: String,
    pub vehicle_description: String,
    pub amount: f64,
}

impl QuoteClient {
    pub(crate) fn new(base: Arc<BaseClient>) -> Self {
        Self { base }
    }

    pub async fn set(&self, input: SetQuoteInput) -> APIResponse<set_quote::APIResponse> {
        let body = set_quote::RequestBody {
            id: input.id,
            client_name: input.client_name,
            vehicle_description: input.vehicle_description,
            amount: input.amount,
        };

        self.base
            .post(body, "quotes".into(), StatusCode::CREATED)
            .await
    }

    pub async fn get(&self, quote_id: ID) -> APIResponse<get_quote::APIResponse> {
        self.base
            .get(format!("quotes/{}", quote_id), StatusCode::OK)
            .await
    }
}
