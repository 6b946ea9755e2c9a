//! Small text converters shared by the platform translators.

/// Split a Slack field text of the form `*Label*\nValue` (or
/// `**Label**\nValue`) into `(title, value)`.
///
/// Double-asterisk bold markers are first normalized to single asterisks.
/// When the text has no newline the title is empty and the whole
/// (normalized) text is the value.
pub fn parse_field(text: &str) -> (String, String) {
    let normalized = text.replace("**", "*");
    match normalized.split_once('\n') {
        Some((label, value)) => (label.trim_matches('*').to_owned(), value.to_owned()),
        None => (String::new(), normalized),
    }
}

/// Join the non-empty parts with newlines, in order.
///
/// Returns `None` when every part is empty so callers can omit the field.
pub fn join_lines<'a, I>(parts: I) -> Option<String>
where
    I: IntoIterator<Item = &'a str>,
{
    let joined = parts
        .into_iter()
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join("\n");
    (!joined.is_empty()).then_some(joined)
}

/// Parse a `#RRGGBB` color into its integer value.
///
/// The leading `#` is optional. Anything that is not six hex digits yields
/// `None`.
pub fn parse_hex_color(color: &str) -> Option<u32> {
    let hex = color.trim().trim_start_matches('#');
    if hex.len() != 6 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    u32::from_str_radix(hex, 16).ok()
}
