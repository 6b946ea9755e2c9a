//! Platform selection and dispatch for Herald.
//!
//! The [`Router`] owns one sender per supported platform and a shared HTTP
//! client. For each message it resolves the destination platform, from an
//! explicit override or from the webhook URL, and hands the message to
//! that platform's sender. Exactly one POST is made per successful
//! resolution; failures are returned as-is and never re-dispatched.
//!
//! # Quick start
//!
//! ```rust,no_run
//! use herald_core::{Attachment, Block, WebhookMessage};
//! use herald_router::{Router, RouterConfig};
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let router = Router::new(RouterConfig::from_env())?;
//! let message = WebhookMessage::new().with_attachment(
//!     Attachment::new("Alert")
//!         .with_color("#FF0000")
//!         .with_block(Block::text("host down")),
//! );
//! router
//!     .send_message("https://discord.com/api/webhooks/123/abc", &message)
//!     .await?;
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod router;

pub use config::{DEFAULT_PLATFORM_ENV, RouterConfig};
pub use error::ConfigError;
pub use router::Router;
