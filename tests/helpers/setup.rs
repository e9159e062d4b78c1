use itu_calendar_api::Application;
use itu_calendar_domain::User;
use itu_calendar_infra::{setup_context, AppContext};

// Launch the application as a background task
pub async fn spawn_app() -> (AppContext, String) {
    let mut ctx = setup_context().await;
    ctx.config.port = 0; // Random port

    let application = Application::new(ctx.clone())
        .await
        .expect("Failed to build application.");

    let address = format!("http://localhost:{}/api/v1", application.port());
    let _ = actix_web::rt::spawn(async move {
        application
            .start()
            .await
            .expect("Expected application to start");
    });

    (ctx, address)
}

/// Seeds an account the way the external auth collaborator would and
/// returns it. `user.session_token` is the bearer credential.
pub async fn seed_user(ctx: &AppContext, email: &str, session_token: &str) -> User {
    let user = User::new(email, session_token);
    ctx.repos
        .users
        .insert(&user)
        .await
        .expect("Expected to insert user");
    user
}
