mod get_notification_settings;
mod send_reminders;
mod send_test_notification;
mod update_notification_settings;

use actix_web::web;
use get_notification_settings::get_notification_settings_controller;
use send_reminders::send_reminders_controller;
use send_test_notification::send_test_notification_controller;
use update_notification_settings::update_notification_settings_controller;

pub use send_reminders::SendRemindersUseCase;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route(
        "/me/notifications",
        web::get().to(get_notification_settings_controller),
    );
    cfg.route(
        "/me/notifications",
        web::put().to(update_notification_settings_controller),
    );
    cfg.route(
        "/notifications/send",
        web::post().to(send_reminders_controller),
    );
    cfg.route(
        "/notifications/test",
        web::post().to(send_test_notification_controller),
    );
}
