use std::path::PathBuf;
use tracing::{info, warn};
use url::Url;

#[derive(Debug, Clone)]
pub struct Config {
    /// Port for the application to run on
    pub port: usize,
    /// Directory in which the reminder, quote and send log collections are
    /// stored. When not set everything is kept in memory and lost on
    /// shutdown.
    pub data_dir: Option<PathBuf>,
    /// Endpoint of the http relay that delivers the follow-up emails.
    /// When not set emails are simulated: composed and recorded in the
    /// send log but never handed to a relay.
    pub email_relay_url: Option<String>,
    /// Sender address put on outgoing follow-up emails
    pub email_from: String,
    /// Agency inbox that receives the follow-up emails
    pub email_to: String,
    /// Seconds between two reminder poll runs. Not read from the
    /// environment, but kept as a field so that tests can shorten it.
    pub poll_interval_secs: u64,
}

const DEFAULT_EMAIL_FROM: &str = "noreply@partenaireassurances.com";
const DEFAULT_EMAIL_TO: &str = "contact@partenaireassurances.com";

impl Config {
    pub fn new() -> Self {
        let default_port = "3002";
        let port = std::env::var("PORT").unwrap_or(default_port.into());
        let port = match port.parse::<usize>() {
            Ok(port) => port,
            Err(_) => {
                warn!(
                    "The given PORT: {} is not valid, falling back to the default port: {}.",
                    port, default_port
                );
                default_port.parse::<usize>().unwrap()
            }
        };

        let data_dir = match std::env::var("DATA_DIR") {
            Ok(dir) => Some(PathBuf::from(dir)),
            Err(_) => {
                info!("Did not find DATA_DIR environment variable. Collections will only be kept in memory.");
                None
            }
        };

        let email_relay_url = match std::env::var("EMAIL_RELAY_URL") {
            Ok(url) => match Url::parse(&url) {
                Ok(_) => Some(url),
                Err(_) => {
                    warn!(
                        "The given EMAIL_RELAY_URL: {} is not a valid url, emails will be simulated.",
                        url
                    );
                    None
                }
            },
            Err(_) => {
                info!("Did not find EMAIL_RELAY_URL environment variable. Emails will be simulated.");
                None
            }
        };

        let email_from =
            std::env::var("EMAIL_FROM").unwrap_or_else(|_| DEFAULT_EMAIL_FROM.into());
        let email_to = std::env::var("EMAIL_TO").unwrap_or_else(|_| DEFAULT_EMAIL_TO.into());

        Self {
            port,
            data_dir,
            email_relay_url,
            email_from,
            email_to,
            poll_interval_secs: 60,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}
