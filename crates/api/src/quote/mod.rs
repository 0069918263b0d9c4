mod get_quote;
mod set_quote;

use actix_web::web;
use get_quote::get_quote_controller;
use set_quote::set_quote_controller;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/quotes", web::post().to(set_quote_controller));
    cfg.route("/quotes/{quote_id}", web::get().to(get_quote_controller));
}
