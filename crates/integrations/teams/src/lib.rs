//! Microsoft Teams sender for Herald.
//!
//! Messages are rendered as a single
//! [Adaptive Card](https://adaptivecards.io/) wrapped in a `message`
//! envelope, the shape accepted by Power Automate "When a Teams webhook
//! request is received" workflows and by incoming webhooks.
//!
//! # Quick start
//!
//! ```rust,no_run
//! use herald_teams::TeamsSender;
//!
//! let sender = TeamsSender::new();
//! ```

pub mod error;
pub mod provider;
pub mod types;

pub use error::TeamsError;
pub use provider::TeamsSender;
pub use types::{AdaptiveCard, CardElement, Fact, TeamsPayload, TextBlock, teams_color};
