mod create_course;
mod delete_course;
mod get_courses;
mod reorder_courses;
mod update_course;

use actix_web::web;
use create_course::create_course_controller;
use delete_course::delete_course_controller;
use get_courses::get_courses_controller;
use reorder_courses::reorder_courses_controller;
use update_course::update_course_controller;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/courses", web::post().to(create_course_controller));
    cfg.route("/courses", web::get().to(get_courses_controller));
    cfg.route(
        "/courses/reorder",
        web::post().to(reorder_courses_controller),
    );
    cfg.route(
        "/courses/{course_id}",
        web::put().to(update_course_controller),
    );
    cfg.route(
        "/courses/{course_id}",
        web::delete().to(delete_course_controller),
    );
}
