//! SVG document builder shared by the composite charts.

use std::fmt::Write;

use super::element::SvgElement;
use super::format::{html_escape, round2};
use super::style::{ChartColor, TextAnchor};

/// Builder for an `<svg>` root with an accessible title.
#[derive(Debug, Default)]
pub struct SvgBuilder {
    width: f64,
    height: f64,
    title: String,
    class: Option<&'static str>,
    elements: Vec<String>,
}

impl SvgBuilder {
    #[must_use]
    pub const fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            title: String::new(),
            class: None,
            elements: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// CSS class on the root element, used by the report script to find charts.
    #[must_use]
    pub const fn with_class(mut self, class: &'static str) -> Self {
        self.class = Some(class);
        self
    }

    #[must_use]
    pub fn push_element<E: SvgElement>(mut self, element: &E) -> Self {
        self.elements.push(element.render());
        self
    }

    #[must_use]
    pub fn push_raw(mut self, svg: impl Into<String>) -> Self {
        self.elements.push(svg.into());
        self
    }

    /// Add an escaped text label.
    #[must_use]
    pub fn push_text(
        self,
        (x, y): (f64, f64),
        anchor: TextAnchor,
        font_size: f64,
        color: &ChartColor,
        text: &str,
    ) -> Self {
        let svg = format!(
            r#"<text x="{}" y="{}" text-anchor="{anchor}" fill="{}" font-size="{font_size}">{}</text>"#,
            round2(x),
            round2(y),
            color.to_css(),
            html_escape(text)
        );
        self.push_raw(svg)
    }

    /// Centered muted message for charts with nothing to draw.
    #[must_use]
    pub fn placeholder(self, message: &str) -> Self {
        let center = (self.width / 2.0, self.height / 2.0);
        self.push_text(
            center,
            TextAnchor::Middle,
            14.0,
            &ChartColor::css_var("text-muted"),
            message,
        )
    }

    #[must_use]
    pub fn build(self) -> String {
        let mut output = String::new();

        let class = self
            .class
            .map(|c| format!(r#" class="{c}""#))
            .unwrap_or_default();
        let _ = writeln!(
            output,
            r#"<svg viewBox="0 0 {} {}" xmlns="http://www.w3.org/2000/svg" role="img"{class}>"#,
            self.width, self.height
        );

        if !self.title.is_empty() {
            let escaped = html_escape(&self.title);
            let _ = writeln!(output, r"    <title>{escaped}</title>");
        }

        for element in self.elements {
            for line in element.lines() {
                let _ = writeln!(output, "    {line}");
            }
        }

        output.push_str("</svg>");
        output
    }
}

#[cfg(test)]
#[path = "builder_tests.rs"]
mod tests;
