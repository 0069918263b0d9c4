use crate::{APIResponse, BaseClient};
use gpa_reminders_api_structs::*;
use reqwest::StatusCode;
use std::sync::Arc;

#[derive(Clone)]
pub struct SentEmailClient {
    base: Arc<BaseClient>,
}

impl SentEmailClient {
    pub(crate) fn new(base: Arc<BaseClient>) -> Self {
        Self { base }
    }

    pub async fn list(&self) -> APIResponse<get_sent_emails::APIResponse> {
        self.base.get("sent-emails".into(), StatusCode::OK).await
    }
}
