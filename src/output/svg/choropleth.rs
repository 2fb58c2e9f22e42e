//! World symbol map: one tile per country at its centroid, colored on a
//! sequential scale.
//!
//! Uses an equirectangular projection cropped to the inhabited latitudes, so
//! no boundary geometry has to ship with the report.

use std::fmt::Write;

use super::builder::SvgBuilder;
use super::element::SvgElement;
use super::format::{format_value, html_escape, round2};
use super::style::{ChartColor, TextAnchor, sequential_color};

const LAT_TOP: f64 = 80.0;
const LAT_BOTTOM: f64 = -60.0;
const LEGEND_STEPS: u32 = 5;

/// A value placed at a geographic position.
#[derive(Debug, Clone)]
pub struct MapPoint {
    pub code: String,
    pub name: String,
    pub lat: f64,
    pub lon: f64,
    pub value: f64,
    /// Period the value refers to, shown in the tooltip.
    pub period: String,
}

#[derive(Debug)]
pub struct ChoroplethMap {
    pub title: String,
    pub points: Vec<MapPoint>,
    pub width: f64,
    pub height: f64,
    pub tile_size: f64,
}

impl ChoroplethMap {
    #[must_use]
    pub fn new(title: impl Into<String>, points: Vec<MapPoint>) -> Self {
        Self {
            title: title.into(),
            points,
            width: 720.0,
            height: 340.0,
            tile_size: 12.0,
        }
    }

    /// Map area height; the rest is legend.
    fn map_height(&self) -> f64 {
        self.height - 40.0
    }

    fn project(&self, lat: f64, lon: f64) -> (f64, f64) {
        let x = (lon + 180.0) / 360.0 * self.width;
        let lat = lat.clamp(LAT_BOTTOM, LAT_TOP);
        let y = (LAT_TOP - lat) / (LAT_TOP - LAT_BOTTOM) * self.map_height();
        (x, y)
    }

    fn graticule(&self) -> String {
        let mut output = String::new();
        let color = ChartColor::css_var("border").to_css();
        let _ = writeln!(
            output,
            r#"<rect x="0" y="0" width="{}" height="{}" fill="var(--color-bg)" stroke="{color}"/>"#,
            self.width,
            self.map_height()
        );
        for lon in (-150..=150).step_by(30) {
            let (x, _) = self.project(0.0, f64::from(lon));
            let _ = writeln!(
                output,
                r#"<line x1="{x}" y1="0" x2="{x}" y2="{}" stroke="{color}" stroke-width="0.5"/>"#,
                self.map_height()
            );
        }
        for lat in (-30..=60).step_by(30) {
            let (_, y) = self.project(f64::from(lat), 0.0);
            let y = round2(y);
            let _ = writeln!(
                output,
                r#"<line x1="0" y1="{y}" x2="{}" y2="{y}" stroke="{color}" stroke-width="0.5"/>"#,
                self.width
            );
        }
        output
    }

    fn legend(&self, lo: f64, hi: f64) -> String {
        let mut output = String::new();
        let y = self.map_height() + 14.0;
        let swatch: f64 = 36.0;
        let text = ChartColor::css_var("text-muted").to_css();
        let _ = writeln!(
            output,
            r#"<text x="10" y="{}" fill="{text}" font-size="10">{}</text>"#,
            y + 10.0,
            format_value(lo)
        );
        for step in 0..LEGEND_STEPS {
            let t = f64::from(step) / f64::from(LEGEND_STEPS - 1);
            let x = swatch.mul_add(f64::from(step), 60.0);
            let _ = writeln!(
                output,
                r#"<rect x="{x}" y="{y}" width="{swatch}" height="12" fill="{}"/>"#,
                sequential_color(t).to_css()
            );
        }
        let _ = writeln!(
            output,
            r#"<text x="{}" y="{}" fill="{text}" font-size="10">{}</text>"#,
            swatch.mul_add(f64::from(LEGEND_STEPS), 66.0),
            y + 10.0,
            format_value(hi)
        );
        output
    }
}

impl SvgElement for ChoroplethMap {
    fn render(&self) -> String {
        let builder = SvgBuilder::new(self.width, self.height)
            .with_title(&self.title)
            .push_raw(self.graticule());
        if self.points.is_empty() {
            return builder
                .push_text(
                    (self.width / 2.0, self.map_height() / 2.0),
                    TextAnchor::Middle,
                    14.0,
                    &ChartColor::css_var("text-muted"),
                    "No mappable countries",
                )
                .build();
        }

        let (lo, hi) = self
            .points
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), p| {
                (lo.min(p.value), hi.max(p.value))
            });
        let span = hi - lo;

        let mut tiles = String::new();
        let half = self.tile_size / 2.0;
        for point in &self.points {
            let (x, y) = self.project(point.lat, point.lon);
            let t = if span > f64::EPSILON { (point.value - lo) / span } else { 1.0 };
            let _ = writeln!(
                tiles,
                r#"<rect x="{}" y="{}" width="{}" height="{}" rx="2" fill="{}" stroke="var(--color-card, white)" stroke-width="0.5">
    <title>{} ({}): {} ({})</title>
</rect>"#,
                round2(x - half),
                round2(y - half),
                self.tile_size,
                self.tile_size,
                sequential_color(t).to_css(),
                html_escape(&point.name),
                html_escape(&point.code),
                format_value(point.value),
                html_escape(&point.period)
            );
        }

        builder.push_raw(tiles).push_raw(self.legend(lo, hi)).build()
    }
}

#[cfg(test)]
#[path = "choropleth_tests.rs"]
mod tests;
