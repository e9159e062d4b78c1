mod get_combined_feed;
mod get_course_feed;

use actix_web::{http, web, HttpResponse};
use get_combined_feed::get_combined_feed_controller;
use get_course_feed::get_course_feed_controller;

async fn method_not_allowed() -> HttpResponse {
    HttpResponse::MethodNotAllowed()
        .insert_header(("Content-Type", "text/plain; charset=utf-8"))
        .body("Method not allowed")
}

// Plain OPTIONS requests pass through the CORS middleware untouched,
// so they need their own 204 ahead of the catch-all
async fn no_content() -> HttpResponse {
    HttpResponse::NoContent().finish()
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/feeds/course", web::get().to(get_course_feed_controller));
    cfg.route("/feeds/course", web::method(http::Method::OPTIONS).to(no_content));
    cfg.route("/feeds/course", web::route().to(method_not_allowed));
    cfg.route(
        "/feeds/combined",
        web::get().to(get_combined_feed_controller),
    );
    cfg.route(
        "/feeds/combined",
        web::method(http::Method::OPTIONS).to(no_content),
    );
    cfg.route("/feeds/combined", web::route().to(method_not_allowed));
}

/// Turns a course name into a safe attachment filename
pub(crate) fn feed_filename(name: &str) -> String {
    let slug = name
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() {
                c.to_ascii_lowercase()
            } else {
                '-'
            }
        })
        .collect::<String>();
    let slug = slug.trim_matches('-');
    if slug.is_empty() {
        "calendar.ics".to_string()
    } else {
        format!("{}.ics", slug)
    }
}

pub(crate) fn ics_response(feed: String, filename: &str) -> HttpResponse {
    HttpResponse::Ok()
        .insert_header(("Content-Type", "text/calendar; charset=utf-8"))
        .insert_header((
            "Content-Disposition",
            format!("attachment; filename=\"{}\"", filename),
        ))
        .body(feed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filenames_are_slugged() {
        assert_eq!(feed_filename("Algorithms"), "algorithms.ics");
        assert_eq!(
            feed_filename("Linear Algebra (E2026)"),
            "linear-algebra--e2026.ics"
        );
        assert_eq!(feed_filename("???"), "calendar.ics");
    }
}
