mod notifier;

pub use notifier::{
    DiscordEmbed, DiscordEmbedFooter, DiscordMessage, HttpNotifier, INotifier, InMemoryNotifier,
    SentMessage,
};
