mod config;
mod repos;
mod services;
mod system;

pub use config::Config;
use repos::Repos;
pub use repos::{
    IShareRepo, ISubscriptionRepo, ShareInsertError, SubscriptionInsertError,
};
pub use services::{
    DiscordEmbed, DiscordEmbedFooter, DiscordMessage, HttpNotifier, INotifier, InMemoryNotifier,
    SentMessage,
};
use std::sync::Arc;
pub use system::ISys;
use system::RealSys;

#[derive(Clone)]
pub struct AppContext {
    pub repos: Repos,
    pub config: Config,
    pub sys: Arc<dyn ISys>,
    pub notifier: Arc<dyn INotifier>,
}

/// Sets up the application context. The relational store behind the
/// repo traits is an external collaborator; the shipped repos keep
/// everything in process memory, which is also what every test runs
/// against.
pub async fn setup_context() -> AppContext {
    let config = Config::new();
    let notifier = HttpNotifier::new(&config);
    AppContext {
        repos: Repos::create_inmemory(),
        notifier: Arc::new(notifier),
        sys: Arc::new(RealSys {}),
        config,
    }
}
