mod get_sent_emails;

use actix_web::web;
use get_sent_emails::get_sent_emails_controller;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/sent-emails", web::get().to(get_sent_emails_controller));
}
