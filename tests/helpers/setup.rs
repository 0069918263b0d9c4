use gpa_reminders_api::Application;
use gpa_reminders_infra::{Config, GpaContext};
use gpa_reminders_sdk::GpaSDK;

pub struct TestApp {
    pub config: Config,
}

// Launch the application as a background task
pub async fn spawn_app() -> (TestApp, GpaSDK, String) {
    let mut ctx = GpaContext::create_inmemory();
    ctx.config.port = 0; // Random port
    ctx.config.poll_interval_secs = 1;

    let config = ctx.config.clone();
    let application = Application::new(ctx)
        .await
        .expect("Failed to build application.");

    let address = format!("http://localhost:{}", application.port());
    let _ = actix_web::rt::spawn(async move {
        application
            .start()
            .await
            .expect("Expected application to start");
    });

    let app = TestApp { config };
    let sdk = GpaSDK::new(address.clone());
    (app, sdk, address)
}
