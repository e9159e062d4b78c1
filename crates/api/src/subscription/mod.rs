mod subscribe_copy;
mod subscribe_live;
mod unsubscribe;
mod update_subscription;

use actix_web::web;
use subscribe_copy::subscribe_copy_controller;
use subscribe_live::subscribe_live_controller;
use unsubscribe::unsubscribe_controller;
use update_subscription::update_subscription_controller;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/subscriptions", web::post().to(subscribe_live_controller));
    cfg.route(
        "/subscriptions/copy",
        web::post().to(subscribe_copy_controller),
    );
    cfg.route(
        "/subscriptions/{subscription_id}",
        web::put().to(update_subscription_controller),
    );
    cfg.route(
        "/subscriptions/{subscription_id}",
        web::delete().to(unsubscribe_controller),
    );
}
