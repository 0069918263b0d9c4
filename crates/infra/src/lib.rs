mod config;
mod repos;
mod services;
mod system;

pub use config::Config;
pub use repos::{IQuoteRepo, IReminderRepo, ISentEmailRepo, Repos};
pub use services::*;
use std::sync::Arc;
pub use system::ISys;
use system::RealSys;

#[derive(Clone)]
pub struct GpaContext {
    pub repos: Repos,
    pub config: Config,
    pub sys: Arc<dyn ISys>,
    pub notifier: Arc<dyn INotifier>,
    pub mailer: Arc<Mailer>,
}

impl GpaContext {
    fn create(config: Config) -> Self {
        let repos = match &config.data_dir {
            Some(dir) => {
                Repos::create_file(dir).expect("DATA_DIR to point to a writable directory")
            }
            None => Repos::create_inmemory(),
        };
        let mailer = Arc::new(Mailer::new(config.email_relay_url.clone()));
        Self {
            repos,
            config,
            sys: Arc::new(RealSys {}),
            notifier: Arc::new(LogNotifier {}),
            mailer,
        }
    }

    /// Context backed entirely by in-memory collaborators. Used by tests,
    /// which swap in their own clock and notifier as needed.
    pub fn create_inmemory() -> Self {
        let mut config = Config::new();
        config.data_dir = None;
        config.email_relay_url = None;
        Self {
            repos: Repos::create_inmemory(),
            mailer: Arc::new(Mailer::new(None)),
            config,
            sys: Arc::new(RealSys {}),
            notifier: Arc::new(LogNotifier {}),
        }
    }
}

/// Will setup the infrastructure context given the environment
pub fn setup_context() -> GpaContext {
    GpaContext::create(Config::new())
}
