//! SVG styling primitives: colors, palettes and text anchoring.

use std::fmt;

/// Number of categorical series colors defined by the report stylesheet.
pub const SERIES_COLORS: usize = 8;

/// Color specification supporting CSS variables for dark mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChartColor {
    /// Direct hex color (e.g., "#2563eb")
    Hex(String),
    /// CSS variable reference (e.g., "primary" → "var(--color-primary)")
    CssVar(String),
}

impl ChartColor {
    /// Create a CSS variable color reference.
    #[must_use]
    pub fn css_var(name: &str) -> Self {
        Self::CssVar(name.to_string())
    }

    /// Create a hex color.
    #[must_use]
    pub fn hex(color: &str) -> Self {
        Self::Hex(color.to_string())
    }

    /// Categorical color for the `index`-th series, cycling through the palette.
    #[must_use]
    pub fn series(index: usize) -> Self {
        Self::CssVar(format!("series-{}", index % SERIES_COLORS + 1))
    }

    /// Convert to CSS value string.
    #[must_use]
    pub fn to_css(&self) -> String {
        match self {
            Self::Hex(h) => h.clone(),
            Self::CssVar(name) => format!("var(--color-{name})"),
        }
    }
}

/// Light end of the sequential map scale.
const SCALE_LOW: (u8, u8, u8) = (0xdb, 0xea, 0xfe);
/// Dark end of the sequential map scale.
const SCALE_HIGH: (u8, u8, u8) = (0x1e, 0x3a, 0x8a);

/// Interpolate the sequential scale at `t` in `[0, 1]` (clamped).
///
/// Map fills are concrete colors rather than CSS variables so the gradient
/// legend and the symbols agree in every theme.
#[must_use]
pub fn sequential_color(t: f64) -> ChartColor {
    let t = if t.is_finite() { t.clamp(0.0, 1.0) } else { 0.0 };
    ChartColor::Hex(format!(
        "#{:02x}{:02x}{:02x}",
        lerp_channel(SCALE_LOW.0, SCALE_HIGH.0, t),
        lerp_channel(SCALE_LOW.1, SCALE_HIGH.1, t),
        lerp_channel(SCALE_LOW.2, SCALE_HIGH.2, t)
    ))
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn lerp_channel(lo: u8, hi: u8, t: f64) -> u8 {
    (f64::from(hi) - f64::from(lo))
        .mul_add(t, f64::from(lo))
        .round()
        .clamp(0.0, 255.0) as u8
}

/// Text anchor position for labels.
#[derive(Debug, Clone, Copy, Default)]
pub enum TextAnchor {
    #[default]
    Start,
    Middle,
    End,
}

impl fmt::Display for TextAnchor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Start => write!(f, "start"),
            Self::Middle => write!(f, "middle"),
            Self::End => write!(f, "end"),
        }
    }
}

#[cfg(test)]
#[path = "style_tests.rs"]
mod tests;
