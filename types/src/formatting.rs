//! Centralized text formatting for indicator labels.
//!
//! Overlay text and CLI output both go through this module so the
//! label/count rendering stays identical everywhere it is shown.

/// Format the text of a buff indicator.
///
/// The count is omitted when `hide_count` is set or when the count is zero,
/// which is the usual case for auras that carry no stacks.
///
/// # Examples
/// ```
/// use showbuff_types::formatting::format_indicator;
/// assert_eq!(format_indicator("Onslaught", 3, false), "Onslaught: 3");
/// assert_eq!(format_indicator("Onslaught", 3, true), "Onslaught");
/// assert_eq!(format_indicator("Aura", 0, false), "Aura");
/// ```
pub fn format_indicator(label: &str, count: usize, hide_count: bool) -> String {
    if hide_count || count == 0 {
        label.to_string()
    } else {
        format!("{}: {}", label, count)
    }
}

/// Format an RGBA color as `#RRGGBBAA`.
///
/// # Examples
/// ```
/// use showbuff_types::formatting::format_rgba_hex;
/// assert_eq!(format_rgba_hex([255, 128, 0, 255]), "#FF8000FF");
/// ```
pub fn format_rgba_hex(rgba: [u8; 4]) -> String {
    format!(
        "#{:02X}{:02X}{:02X}{:02X}",
        rgba[0], rgba[1], rgba[2], rgba[3]
    )
}

/// Parse a `#RRGGBB` or `#RRGGBBAA` color. Alpha defaults to 255.
///
/// # Examples
/// ```
/// use showbuff_types::formatting::parse_rgba_hex;
/// assert_eq!(parse_rgba_hex("#ff0000"), Some([255, 0, 0, 255]));
/// assert_eq!(parse_rgba_hex("00FF0080"), Some([0, 255, 0, 128]));
/// assert_eq!(parse_rgba_hex("#abc"), None);
/// ```
pub fn parse_rgba_hex(s: &str) -> Option<[u8; 4]> {
    let hex = s.trim().trim_start_matches('#');
    if !hex.is_ascii() || (hex.len() != 6 && hex.len() != 8) {
        return None;
    }

    let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
    let alpha = if hex.len() == 8 { channel(6)? } else { 255 };
    Some([channel(0)?, channel(2)?, channel(4)?, alpha])
}
