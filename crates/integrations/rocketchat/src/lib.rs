//! RocketChat sender for Herald.
//!
//! RocketChat integration webhooks (`/hooks/{id}/{token}`) accept
//! attachments with a title, color, and text. Text and field blocks are
//! folded into that text, one line per entry.

pub mod config;
pub mod error;
pub mod provider;
pub mod types;

pub use config::RocketChatConfig;
pub use error::RocketChatError;
pub use provider::RocketChatSender;
pub use types::{RocketChatAttachment, RocketChatPayload};
