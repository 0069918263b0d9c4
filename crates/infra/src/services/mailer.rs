use serde::Serialize;
use std::time::Duration;
use thiserror::Error;
use tracing::info;

/// Payload understood by the http email relay
#[derive(Debug, Clone, Serialize)]
pub struct OutgoingEmail {
    pub to: String,
    pub subject: String,
    pub text: String,
    pub from: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmailDelivery {
    /// The relay accepted the email
    Sent,
    /// No relay is configured, the email was only logged
    Simulated,
}

#[derive(Debug, Error)]
pub enum EmailRelayError {
    #[error("Email relay could not be reached. Error message: {0}")]
    Unreachable(String),
    #[error("Email relay rejected the email with status code: {0}")]
    Rejected(u16),
}

/// Hands follow-up emails to the http relay configured through
/// `EMAIL_RELAY_URL`. Without a relay this runs in simulated mode where
/// every email is accepted locally, which mirrors how the agency works
/// before the relay credentials are set up.
pub struct Mailer {
    relay_url: Option<String>,
    client: reqwest::Client,
}

impl Mailer {
    pub fn new(relay_url: Option<String>) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(10))
            .build()
            .expect("To build email relay http client");
        Self { relay_url, client }
    }

    pub async fn send(&self, email: &OutgoingEmail) -> Result<EmailDelivery, EmailRelayError> {
        let relay_url = match &self.relay_url {
            Some(url) => url,
            None => {
                info!(
                    "No email relay configured. Simulated email to: {} with subject: {}",
                    email.to, email.subject
                );
                return Ok(EmailDelivery::Simulated);
            }
        };

        let res = self
            .client
            .post(relay_url)
            .json(email)
            .send()
            .await
            .map_err(|e| EmailRelayError::Unreachable(e.to_string()))?;

        let status = res.status();
        if status.is_success() {
            Ok(EmailDelivery::Sent)
        } else {
            Err(EmailRelayError::Rejected(status.as_u16()))
        }
    }
}
