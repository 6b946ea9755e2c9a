//! Mattermost sender for Herald.
//!
//! Mattermost incoming webhooks accept Slack-style attachments. Text blocks
//! become the attachment text, field blocks become short display fields,
//! and the attachment title doubles as the required fallback text.
//!
//! # Quick start
//!
//! ```rust,no_run
//! use herald_mattermost::{MattermostConfig, MattermostSender};
//!
//! let config = MattermostConfig::new().with_username("Herald");
//! let sender = MattermostSender::new(config);
//! ```

pub mod config;
pub mod error;
pub mod provider;
pub mod types;

pub use config::MattermostConfig;
pub use error::MattermostError;
pub use provider::MattermostSender;
pub use types::{MattermostAttachment, MattermostField, MattermostPayload};
