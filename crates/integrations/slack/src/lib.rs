//! Slack sender for Herald.
//!
//! Herald's canonical message already has Slack's attachment/block shape,
//! so this sender posts it to the incoming webhook without translation.
//!
//! The message is forwarded as Herald models it, not byte-for-byte as it
//! was read. Parsing keeps only text, fields, and dividers, so a `header`
//! block is re-emitted as a `mrkdwn` section and a section carrying both
//! text and fields is re-emitted as two sections.

pub mod error;
pub mod provider;

pub use error::SlackError;
pub use provider::SlackSender;
