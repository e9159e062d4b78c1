mod create_share;
mod enable_combined_share;
mod get_share_for_course;
mod toggle_share;

use actix_web::web;
use create_share::create_share_controller;
use enable_combined_share::enable_combined_share_controller;
use get_share_for_course::get_share_for_course_controller;
use toggle_share::toggle_share_controller;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route(
        "/courses/{course_id}/share",
        web::post().to(create_share_controller),
    );
    cfg.route(
        "/courses/{course_id}/share",
        web::get().to(get_share_for_course_controller),
    );
    cfg.route("/shares/{share_id}", web::put().to(toggle_share_controller));
    cfg.route(
        "/me/combined-share",
        web::post().to(enable_combined_share_controller),
    );
}
