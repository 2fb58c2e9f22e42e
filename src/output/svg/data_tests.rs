//! Tests for chart data model.

use super::*;
use crate::output::svg::style::ChartColor;

#[test]
fn new_creates_point() {
    let point = DataPoint::new("Chad", 100.0);
    assert_eq!(point.label, "Chad");
    assert!((point.value - 100.0).abs() < f64::EPSILON);
    assert!(point.color.is_none());
}

#[test]
fn with_color_sets_color() {
    let point = DataPoint::new("Chad", 50.0).with_color(ChartColor::hex("#fff"));
    assert_eq!(point.color, Some(ChartColor::hex("#fff")));
}

#[test]
fn series_keeps_points_in_order() {
    let series = LineSeries::new(
        "Haiti (Male)",
        vec![DataPoint::new("2019", 1.0), DataPoint::new("2020", 2.0)],
    );
    let labels: Vec<&str> = series.points.iter().map(|p| p.label.as_str()).collect();
    assert_eq!(labels, vec!["2019", "2020"]);
}

#[test]
fn xy_point_holds_label() {
    let point = XyPoint::new(2019.0, 4.5, "Haiti 2019");
    assert_eq!(point.label, "Haiti 2019");
}
