use gpa_reminders_domain::{Quote, ID};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct QuoteDTO {
    pub id: ID,
    pub client_name: String,
    pub vehicle_description: String,
    pub amount: f64,
}

impl QuoteDTO {
    pub fn new(quote: Quote) -> Self {
        Self {
            id: quote.id.clone(),
            client_name: quote.client_name,
            vehicle_description: quote.vehicle_description,
            amount: quote.amount,
        }
    }
}
