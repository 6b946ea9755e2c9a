//! Platform resolution: explicit override first, URL heuristics second.

use serde::{Deserialize, Serialize};

use crate::error::RoutingError;
use crate::platform::Platform;

const HOOKS_SEGMENT: &str = "/hooks/";

/// Which URL heuristics auto-detection applies.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DetectionMode {
    /// Host markers, then the `/hooks/` path shape: one segment after
    /// `/hooks/` is Mattermost, two or more is RocketChat.
    #[default]
    PathAware,
    /// Host markers only. `/hooks/` URLs without a marker are undetectable.
    HostOnly,
}

/// Resolve the destination platform for `webhook_url`.
///
/// A non-empty `platform_override` always wins and must name a supported
/// platform. Without one, the platform is inferred from the URL.
pub fn resolve_platform(
    platform_override: Option<&str>,
    webhook_url: &str,
    mode: DetectionMode,
) -> Result<Platform, RoutingError> {
    if webhook_url.is_empty() {
        return Err(RoutingError::MissingUrl);
    }

    match platform_override.filter(|p| !p.is_empty()) {
        Some(name) => name.parse(),
        None => detect_platform(webhook_url, mode).ok_or(RoutingError::Undetectable),
    }
}

/// Infer a platform from substrings of the webhook URL.
///
/// Checks run in a fixed order, so a URL carrying several markers resolves
/// to the first one matched.
pub fn detect_platform(webhook_url: &str, mode: DetectionMode) -> Option<Platform> {
    if webhook_url.contains("discord.com") || webhook_url.contains("discordapp.com") {
        return Some(Platform::Discord);
    }
    if webhook_url.contains("slack.com") {
        return Some(Platform::Slack);
    }
    if webhook_url.contains("office.com") || webhook_url.contains("microsoft.com") {
        return Some(Platform::Teams);
    }
    if webhook_url.contains("mattermost") {
        return Some(Platform::Mattermost);
    }

    if mode == DetectionMode::HostOnly {
        return None;
    }

    // Mattermost: /hooks/{key}. RocketChat: /hooks/{id}/{token}.
    match count_path_segments_after_hooks(webhook_url) {
        0 => None,
        1 => Some(Platform::Mattermost),
        _ => Some(Platform::RocketChat),
    }
}

/// Count the non-empty path segments following the first `/hooks/` in the
/// URL, ignoring any query string. Returns 0 when `/hooks/` is absent.
pub fn count_path_segments_after_hooks(webhook_url: &str) -> usize {
    let Some(idx) = webhook_url.find(HOOKS_SEGMENT) else {
        return 0;
    };
    let remainder = &webhook_url[idx + HOOKS_SEGMENT.len()..];
    let path = remainder
        .split_once('?')
        .map_or(remainder, |(path, _query)| path);

    path.split('/').filter(|segment| !segment.is_empty()).count()
}
