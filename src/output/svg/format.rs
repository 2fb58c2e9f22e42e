//! Text and number formatting for chart labels.

/// Escape text for safe inclusion in HTML and SVG.
#[must_use]
pub fn html_escape(s: &str) -> String {
    let mut escaped = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Compact integer display: `9999`, `10.0K`, `2.5M`.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn format_number(n: i64) -> String {
    let abs = n.unsigned_abs();
    if abs >= 1_000_000 {
        format!("{:.1}M", n as f64 / 1_000_000.0)
    } else if abs >= 10_000 {
        format!("{:.1}K", n as f64 / 1_000.0)
    } else {
        n.to_string()
    }
}

/// Display an observed value: at most two decimals, trailing zeros dropped,
/// large magnitudes abbreviated like [`format_number`].
#[must_use]
pub fn format_value(value: f64) -> String {
    if !value.is_finite() {
        return "n/a".to_string();
    }
    let abs = value.abs();
    if abs >= 1_000_000.0 {
        return format!("{:.1}M", value / 1_000_000.0);
    }
    if abs >= 10_000.0 {
        return format!("{:.1}K", value / 1_000.0);
    }

    let fixed = format!("{value:.2}");
    let trimmed = fixed.trim_end_matches('0').trim_end_matches('.');
    if trimmed == "-0" {
        "0".to_string()
    } else {
        trimmed.to_string()
    }
}

/// Round a coordinate to two decimals so the markup stays compact.
#[must_use]
pub fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}

#[cfg(test)]
#[path = "format_tests.rs"]
mod tests;
