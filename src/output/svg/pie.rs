//! Donut chart rendered as a finite set of rotation frames.
//!
//! Every frame holds the same slices rotated by `360 / frames` degrees more
//! than the previous one. Only the first frame is visible; the report script
//! cycles the rest when the play control is pressed.

use std::f64::consts::{PI, TAU};
use std::fmt::Write;

use super::builder::SvgBuilder;
use super::data::DataPoint;
use super::element::{Legend, SvgElement};
use super::format::{format_value, html_escape, round2};
use super::style::ChartColor;

pub const DEFAULT_FRAMES: usize = 12;

#[derive(Debug)]
pub struct DonutChart {
    pub title: String,
    pub data: Vec<DataPoint>,
    pub frames: usize,
    pub width: f64,
    pub height: f64,
    pub outer_radius: f64,
    pub inner_radius: f64,
}

/// Angular extent of one slice, in radians from 12 o'clock, clockwise.
struct Slice<'a> {
    point: &'a DataPoint,
    color: ChartColor,
    start: f64,
    sweep: f64,
    share: f64,
}

impl DonutChart {
    #[must_use]
    pub fn new(title: impl Into<String>, data: Vec<DataPoint>) -> Self {
        Self {
            title: title.into(),
            data,
            frames: DEFAULT_FRAMES,
            width: 460.0,
            height: 280.0,
            outer_radius: 110.0,
            inner_radius: 62.0,
        }
    }

    /// Number of rotation frames; zero is treated as one (static chart).
    #[must_use]
    pub const fn with_frames(mut self, frames: usize) -> Self {
        self.frames = frames;
        self
    }

    fn center(&self) -> (f64, f64) {
        (self.height / 2.0, self.height / 2.0)
    }

    /// Slices for the positive values; non-positive values cannot be shares.
    fn slices(&self) -> Vec<Slice<'_>> {
        let total: f64 = self.data.iter().map(|d| d.value.max(0.0)).sum();
        if total <= 0.0 {
            return Vec::new();
        }
        let mut start = 0.0;
        self.data
            .iter()
            .enumerate()
            .filter(|(_, d)| d.value > 0.0)
            .map(|(i, d)| {
                let share = d.value / total;
                let slice = Slice {
                    point: d,
                    color: d.color.clone().unwrap_or_else(|| ChartColor::series(i)),
                    start,
                    sweep: share * TAU,
                    share,
                };
                start += slice.sweep;
                slice
            })
            .collect()
    }

    fn polar(&self, angle: f64, radius: f64) -> (f64, f64) {
        let (cx, cy) = self.center();
        (
            round2(radius.mul_add(angle.sin(), cx)),
            round2(radius.mul_add(-angle.cos(), cy)),
        )
    }

    fn slice_markup(&self, slice: &Slice<'_>, offset: f64) -> String {
        let title = format!(
            "{}: {} ({:.1}%)",
            html_escape(&slice.point.label),
            format_value(slice.point.value),
            slice.share * 100.0
        );
        let fill = slice.color.to_css();

        // A full ring cannot be drawn as one arc
        if slice.sweep >= TAU - 1e-9 {
            let (cx, cy) = self.center();
            let mid = f64::midpoint(self.outer_radius, self.inner_radius);
            return format!(
                r#"<circle cx="{cx}" cy="{cy}" r="{mid}" fill="none" stroke="{fill}" stroke-width="{}"><title>{title}</title></circle>"#,
                self.outer_radius - self.inner_radius
            );
        }

        let a0 = slice.start + offset;
        let a1 = a0 + slice.sweep;
        let large = u8::from(slice.sweep > PI);
        let (r, ir) = (self.outer_radius, self.inner_radius);
        let (ox0, oy0) = self.polar(a0, r);
        let (ox1, oy1) = self.polar(a1, r);
        let (ix1, iy1) = self.polar(a1, ir);
        let (ix0, iy0) = self.polar(a0, ir);
        format!(
            r#"<path d="M{ox0},{oy0} A{r},{r} 0 {large} 1 {ox1},{oy1} L{ix1},{iy1} A{ir},{ir} 0 {large} 0 {ix0},{iy0} Z" fill="{fill}" stroke="var(--color-card, white)" stroke-width="1"><title>{title}</title></path>"#
        )
    }

    #[allow(clippy::cast_precision_loss)]
    fn frames_markup(&self, slices: &[Slice<'_>]) -> String {
        let frames = self.frames.max(1);
        let step = TAU / frames as f64;
        let mut output = String::new();
        for frame in 0..frames {
            let hidden = if frame == 0 { "" } else { r#" style="display:none""# };
            let _ = writeln!(output, r#"<g class="pie-frame" data-frame="{frame}"{hidden}>"#);
            for slice in slices {
                let _ = writeln!(output, "    {}", self.slice_markup(slice, step * frame as f64));
            }
            output.push_str("</g>\n");
        }
        output
    }
}

impl SvgElement for DonutChart {
    #[allow(clippy::cast_precision_loss)]
    fn render(&self) -> String {
        let builder = SvgBuilder::new(self.width, self.height)
            .with_title(&self.title)
            .with_class("pie-chart");
        let slices = self.slices();
        if slices.is_empty() {
            return builder.placeholder("No data available").build();
        }

        let legend = Legend::new(
            self.height + 10.0,
            self.height / 2.0 - 8.0 * slices.len() as f64,
            slices
                .iter()
                .map(|s| {
                    (
                        s.color.clone(),
                        format!("{} ({:.1}%)", s.point.label, s.share * 100.0),
                    )
                })
                .collect(),
        );

        builder
            .push_raw(self.frames_markup(&slices))
            .push_element(&legend)
            .build()
    }
}

#[cfg(test)]
#[path = "pie_tests.rs"]
mod tests;
