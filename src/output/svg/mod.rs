//! SVG chart generation for the HTML report.
//!
//! Provides building blocks for creating accessible, responsive SVG charts:
//! - viewBox-based scaling (renders at any size)
//! - CSS variable integration (dark mode support via `var(--color-*)`)
//! - Accessibility: `<title>` elements for screen readers and tooltips

mod builder;
mod chart;
mod choropleth;
mod data;
mod element;
mod format;
mod pie;
mod scatter;
mod style;

pub use builder::SvgBuilder;
pub use chart::{BarChart, HorizontalBarChart, MultiLineChart};
pub use choropleth::{ChoroplethMap, MapPoint};
pub use data::{DataPoint, LineSeries, XyPoint};
pub use element::{Axis, AxisOrientation, Bar, Legend, Line, Marker, SvgElement};
pub use format::{format_number, format_value, html_escape};
pub use pie::{DEFAULT_FRAMES, DonutChart};
pub use scatter::{ScatterChart, TrendOverlay};
pub use style::{ChartColor, TextAnchor, sequential_color};

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
