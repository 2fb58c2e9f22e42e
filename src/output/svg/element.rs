//! Primitive SVG elements: axes, bars, lines, markers and legends.

use std::fmt::Write;

use super::format::{format_value, html_escape, round2};
use super::style::{ChartColor, TextAnchor};

/// Axis orientation for charts.
#[derive(Debug, Clone, Copy)]
pub enum AxisOrientation {
    Horizontal,
    Vertical,
}

/// Base trait for SVG elements.
pub trait SvgElement {
    /// Render the element to an SVG string.
    fn render(&self) -> String;
}

struct TickInfo {
    start_x: f64,
    start_y: f64,
    end_x: f64,
    end_y: f64,
    label_x: f64,
    label_y: f64,
    anchor: TextAnchor,
}

/// Axis line with ticks; label positions are fractions of `length` in `[0, 1]`.
#[derive(Debug, Clone)]
pub struct Axis {
    pub orientation: AxisOrientation,
    pub x: f64,
    pub y: f64,
    pub length: f64,
    pub labels: Vec<(f64, String)>,
    pub color: ChartColor,
    pub tick_length: f64,
    pub font_size: f64,
}

impl Axis {
    #[must_use]
    pub fn horizontal(x: f64, y: f64, length: f64) -> Self {
        Self::with_orientation(AxisOrientation::Horizontal, x, y, length)
    }

    #[must_use]
    pub fn vertical(x: f64, y: f64, length: f64) -> Self {
        Self::with_orientation(AxisOrientation::Vertical, x, y, length)
    }

    fn with_orientation(orientation: AxisOrientation, x: f64, y: f64, length: f64) -> Self {
        Self {
            orientation,
            x,
            y,
            length,
            labels: Vec::new(),
            color: ChartColor::css_var("text-muted"),
            tick_length: 5.0,
            font_size: 10.0,
        }
    }

    #[must_use]
    pub fn with_labels(mut self, labels: Vec<(f64, String)>) -> Self {
        self.labels = labels;
        self
    }

    #[must_use]
    pub const fn with_font_size(mut self, size: f64) -> Self {
        self.font_size = size;
        self
    }

    fn calculate_tick(&self, pos: f64) -> TickInfo {
        match self.orientation {
            AxisOrientation::Horizontal => {
                let tick_x = round2(pos.mul_add(self.length, self.x));
                TickInfo {
                    start_x: tick_x,
                    start_y: self.y,
                    end_x: tick_x,
                    end_y: self.y + self.tick_length,
                    label_x: tick_x,
                    label_y: self.y + self.tick_length + self.font_size + 2.0,
                    anchor: TextAnchor::Middle,
                }
            }
            AxisOrientation::Vertical => {
                let tick_y = round2(pos.mul_add(-self.length, self.y));
                TickInfo {
                    start_x: self.x,
                    start_y: tick_y,
                    end_x: self.x - self.tick_length,
                    end_y: tick_y,
                    label_x: self.x - self.tick_length - 4.0,
                    label_y: round2(tick_y + self.font_size / 3.0),
                    anchor: TextAnchor::End,
                }
            }
        }
    }
}

impl SvgElement for Axis {
    fn render(&self) -> String {
        let mut output = String::new();
        let color = self.color.to_css();

        let (end_x, end_y) = match self.orientation {
            AxisOrientation::Horizontal => (self.x + self.length, self.y),
            AxisOrientation::Vertical => (self.x, self.y - self.length),
        };

        let _ = writeln!(
            output,
            r#"<line x1="{}" y1="{}" x2="{end_x}" y2="{end_y}" stroke="{color}" stroke-width="1"/>"#,
            self.x, self.y
        );

        for (pos, label) in &self.labels {
            let tick = self.calculate_tick(*pos);

            let _ = writeln!(
                output,
                r#"<line x1="{}" y1="{}" x2="{}" y2="{}" stroke="{color}" stroke-width="1"/>"#,
                tick.start_x, tick.start_y, tick.end_x, tick.end_y
            );

            let escaped_label = html_escape(label);
            let _ = writeln!(
                output,
                r#"<text x="{}" y="{}" text-anchor="{}" fill="{color}" font-size="{}">{escaped_label}</text>"#,
                tick.label_x, tick.label_y, tick.anchor, self.font_size
            );
        }

        output
    }
}

/// A single bar in a bar chart.
#[derive(Debug, Clone)]
pub struct Bar {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub color: ChartColor,
    pub label: String,
    pub value: f64,
}

impl SvgElement for Bar {
    fn render(&self) -> String {
        let color = self.color.to_css();
        let escaped_label = html_escape(&self.label);
        // Title doubles as hover tooltip and screen-reader text
        format!(
            r#"<rect x="{}" y="{}" width="{}" height="{}" fill="{color}" rx="2">
    <title>{escaped_label}: {}</title>
</rect>"#,
            round2(self.x),
            round2(self.y),
            round2(self.width),
            round2(self.height),
            format_value(self.value)
        )
    }
}

/// A polyline through chart-space points.
#[derive(Debug, Clone)]
pub struct Line {
    pub points: Vec<(f64, f64)>,
    pub color: ChartColor,
    pub stroke_width: f64,
    /// Optional `stroke-dasharray`, e.g. `"6,4"` for a trendline.
    pub dash: Option<&'static str>,
}

impl Line {
    #[must_use]
    pub const fn new(points: Vec<(f64, f64)>, color: ChartColor) -> Self {
        Self {
            points,
            color,
            stroke_width: 2.0,
            dash: None,
        }
    }

    #[must_use]
    pub const fn with_stroke_width(mut self, width: f64) -> Self {
        self.stroke_width = width;
        self
    }

    #[must_use]
    pub const fn with_dash(mut self, pattern: &'static str) -> Self {
        self.dash = Some(pattern);
        self
    }
}

impl SvgElement for Line {
    fn render(&self) -> String {
        if self.points.is_empty() {
            return String::new();
        }

        let mut path = String::new();
        for (i, (x, y)) in self.points.iter().enumerate() {
            let cmd = if i == 0 { 'M' } else { 'L' };
            let sep = if i == 0 { "" } else { " " };
            let _ = write!(path, "{sep}{cmd}{},{}", round2(*x), round2(*y));
        }

        let dash = self
            .dash
            .map(|d| format!(r#" stroke-dasharray="{d}""#))
            .unwrap_or_default();
        format!(
            r#"<path d="{path}" fill="none" stroke="{}" stroke-width="{}"{dash} stroke-linecap="round" stroke-linejoin="round"/>"#,
            self.color.to_css(),
            self.stroke_width
        )
    }
}

/// A circular data marker with a tooltip.
#[derive(Debug, Clone)]
pub struct Marker {
    pub cx: f64,
    pub cy: f64,
    pub radius: f64,
    pub color: ChartColor,
    pub title: String,
}

impl SvgElement for Marker {
    fn render(&self) -> String {
        format!(
            r#"<circle cx="{}" cy="{}" r="{}" fill="{}" stroke="var(--color-card, white)" stroke-width="1.5">
    <title>{}</title>
</circle>"#,
            round2(self.cx),
            round2(self.cy),
            self.radius,
            self.color.to_css(),
            html_escape(&self.title)
        )
    }
}

/// A vertical list of color swatches with labels.
#[derive(Debug, Clone)]
pub struct Legend {
    pub x: f64,
    pub y: f64,
    pub entries: Vec<(ChartColor, String)>,
    pub row_height: f64,
}

impl Legend {
    #[must_use]
    pub const fn new(x: f64, y: f64, entries: Vec<(ChartColor, String)>) -> Self {
        Self {
            x,
            y,
            entries,
            row_height: 16.0,
        }
    }
}

impl SvgElement for Legend {
    #[allow(clippy::cast_precision_loss)]
    fn render(&self) -> String {
        let mut output = String::new();
        let text_color = ChartColor::css_var("text").to_css();
        for (i, (color, label)) in self.entries.iter().enumerate() {
            let y = round2(self.row_height.mul_add(i as f64, self.y));
            let _ = writeln!(
                output,
                r#"<rect x="{}" y="{y}" width="10" height="10" fill="{}" rx="2"/>"#,
                self.x,
                color.to_css()
            );
            let _ = writeln!(
                output,
                r#"<text x="{}" y="{}" fill="{text_color}" font-size="10">{}</text>"#,
                self.x + 14.0,
                y + 9.0,
                html_escape(label)
            );
        }
        output
    }
}

#[cfg(test)]
#[path = "element_tests.rs"]
mod tests;
