//! Discord sender for Herald.
//!
//! Each attachment becomes one
//! [embed](https://discord.com/developers/docs/resources/message#embed-object):
//! the title and color carry over, text blocks form the description, and
//! field blocks become inline embed fields.
//!
//! # Quick start
//!
//! ```rust,no_run
//! use herald_discord::{DiscordConfig, DiscordSender};
//!
//! let config = DiscordConfig::new().with_default_username("Herald");
//! let sender = DiscordSender::new(config);
//! ```

pub mod config;
pub mod error;
pub mod provider;
pub mod types;

pub use config::DiscordConfig;
pub use error::DiscordError;
pub use provider::DiscordSender;
pub use types::{DiscordEmbed, DiscordEmbedField, DiscordWebhookRequest};
