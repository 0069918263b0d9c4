use crate::shared::entity::{Entity, ID};

/// An auto insurance `Quote` that `Reminder`s can follow up on. Quotes are
/// registered by the quoting system and only looked up here to enrich
/// reminder emails.
#[derive(Debug, Clone)]
pub struct Quote {
    pub id: ID,
    pub client_name: String,
    pub vehicle_description: String,
    /// Yearly premium in euros
    pub amount: f64,
}

impl Quote {
    pub fn new(id: ID, client_name: String, vehicle_description: String, amount: f64) -> Self {
        Self {
            id,
            client_name,
            vehicle_description,
            amount,
        }
    }
}

impl Entity for Quote {
    fn id(&self) -> &ID {
        &self.id
    }
}
