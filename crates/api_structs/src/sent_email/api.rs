use crate::dtos::SentEmailDTO;
use gpa_reminders_domain::SentEmail;
use serde::{Deserialize, Serialize};

pub mod get_sent_emails {
    use super::*;

    #[derive(Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct APIResponse {
        pub sent_emails: Vec<SentEmailDTO>,
    }

    impl APIResponse {
        pub fn new(sent_emails: Vec<SentEmail>) -> Self {
            Self {
                sent_emails: sent_emails.into_iter().map(SentEmailDTO::new).collect(),
            }
        }
    }
}
