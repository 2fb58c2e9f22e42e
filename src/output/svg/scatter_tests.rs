//! Tests for the scatter chart.

use super::*;

fn points() -> Vec<XyPoint> {
    vec![
        XyPoint::new(2010.0, 1.0, "Cameroon 2010"),
        XyPoint::new(2012.0, 3.0, "Haiti 2012"),
    ]
}

#[test]
fn draws_markers_and_axes() {
    let svg = ScatterChart::new("Scatter", points()).render();
    assert_eq!(svg.matches("<circle").count(), 2);
    assert!(svg.contains("<title>Haiti 2012: 3</title>"));
    assert!(svg.contains(">2011</text>"));
}

#[test]
fn trendline_is_dashed_path() {
    let svg = ScatterChart::new("Scatter", points())
        .with_trend((2010.0, 1.0), (2012.0, 3.0))
        .render();
    assert!(svg.contains("stroke-dasharray=\"6,4\""));
    assert!(svg.contains("var(--color-accent)"));
    assert!(!svg.contains("Not enough distinct years"));
}

#[test]
fn missing_trend_is_noted() {
    let svg = ScatterChart::new("Scatter", points()).render();
    assert!(!svg.contains("<path"));
    assert!(svg.contains("Not enough distinct years for a trendline"));
}

#[test]
fn single_point_has_finite_layout() {
    let svg = ScatterChart::new("One", vec![XyPoint::new(2019.0, 5.0, "A")]).render();
    assert!(!svg.contains("NaN"));
    assert!(!svg.contains("inf"));
    assert_eq!(svg.matches("<circle").count(), 1);
}

#[test]
fn empty_selection_renders_placeholder() {
    let svg = ScatterChart::new("Empty", vec![]).render();
    assert!(svg.contains("No data for the selected countries"));
    assert!(!svg.contains("<circle"));
}
