use crate::dtos::QuoteDTO;
use gpa_reminders_domain::{Quote, ID};
use serde::{Deserialize, Serialize};

#[derive(Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteResponse {
    pub quote: QuoteDTO,
}

impl QuoteResponse {
    pub fn new(quote: Quote) -> Self {
        Self {
            quote: QuoteDTO::new(quote),
        }
    }
}

pub mod set_quote {
    use super::*;

    #[derive(Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct RequestBody {
        pub id: ID,
        pub client_name: String,
        pub vehicle_description: String,
        pub amount: f64,
    }

    pub type APIResponse = QuoteResponse;
}

pub mod get_quote {
    use super::*;

    #[derive(Deserialize)]
    pub struct PathParams {
        pub quote_id: ID,
    }

    pub type APIResponse = QuoteResponse;
}
