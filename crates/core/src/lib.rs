//! Core types for Herald.
//!
//! Herald forwards alert-style messages, authored in a Slack-compatible
//! shape, to Slack, Discord, Mattermost, RocketChat, or Microsoft Teams
//! incoming webhooks. This crate holds the pieces that involve no I/O:
//!
//! - the canonical [`WebhookMessage`] model,
//! - the [`Platform`] set and URL-based platform resolution,
//! - small text converters shared by the platform translators.

pub mod detect;
pub mod error;
pub mod format;
pub mod message;
pub mod platform;

pub use detect::{DetectionMode, count_path_segments_after_hooks, detect_platform, resolve_platform};
pub use error::RoutingError;
pub use format::{join_lines, parse_field, parse_hex_color};
pub use message::{Attachment, Block, WebhookMessage};
pub use platform::Platform;
