//! Format checks for user-supplied strings.

use std::sync::LazyLock;

use regex::Regex;
use url::Url;

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^[A-Za-z0-9.!#$%&'*+/=?^_`{|}~-]+@[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?(?:\.[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?)+$",
    )
    .expect("valid regex")
});
static HEX_COLOR_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^#(?:[0-9a-fA-F]{3,4}|[0-9a-fA-F]{6}|[0-9a-fA-F]{8})$").expect("valid regex")
});
static RGB_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)^rgba?\(\s*\d{1,3}%?\s*,\s*\d{1,3}%?\s*,\s*\d{1,3}%?\s*(?:,\s*(?:0|1|0?\.\d+|\d{1,3}%)\s*)?\)$",
    )
    .expect("valid regex")
});
static HSL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)^hsla?\(\s*-?\d{1,3}(?:deg)?\s*,\s*\d{1,3}%\s*,\s*\d{1,3}%\s*(?:,\s*(?:0|1|0?\.\d+|\d{1,3}%)\s*)?\)$",
    )
    .expect("valid regex")
});
static CSS_LENGTH_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^-?(?:\d+|\d*\.\d+)(?:px|em|rem|%|vh|vw|vmin|vmax|ch|ex|cm|mm|in|pt|pc)$")
        .expect("valid regex")
});

const NAMED_COLORS: &[&str] = &[
    "black", "silver", "gray", "white", "maroon", "red", "purple", "fuchsia", "green", "lime",
    "olive", "yellow", "navy", "blue", "teal", "aqua", "orange", "transparent", "currentcolor",
];

/// Returns true for a plausible `local@domain.tld` address.
#[must_use]
pub fn is_email(s: &str) -> bool {
    s.len() <= 254 && EMAIL_RE.is_match(s)
}

/// Returns true for an absolute `http` or `https` URL with a host.
#[must_use]
pub fn is_url(s: &str) -> bool {
    Url::parse(s).is_ok_and(|url| matches!(url.scheme(), "http" | "https") && url.has_host())
}

/// Returns true for `#rgb`, `#rgba`, `#rrggbb`, or `#rrggbbaa`.
#[must_use]
pub fn is_hex_color(s: &str) -> bool {
    HEX_COLOR_RE.is_match(s)
}

/// Returns true for a hex color, `rgb()`/`rgba()`, `hsl()`/`hsla()`, or a
/// basic named color.
#[must_use]
pub fn is_color(s: &str) -> bool {
    let s = s.trim();
    is_hex_color(s)
        || RGB_RE.is_match(s)
        || HSL_RE.is_match(s)
        || NAMED_COLORS.iter().any(|name| name.eq_ignore_ascii_case(s))
}

/// Returns true for a CSS length such as `12px`, `-0.5em`, `50%`, or a bare `0`.
#[must_use]
pub fn is_css_length(s: &str) -> bool {
    s == "0" || CSS_LENGTH_RE.is_match(s)
}
