use std::path::PathBuf;

use super::*;

fn render_error(use_colors: bool, err: &ReportError) -> String {
    let mut buf = Vec::new();
    ErrorOutput::with_colors(use_colors).write_report_error(&mut buf, err);
    String::from_utf8(buf).unwrap()
}

#[test]
fn error_without_colors_basic() {
    let mut buf = Vec::new();
    ErrorOutput::with_colors(false).write_error(&mut buf, "Config", "bad delimiter", None, None);
    assert_eq!(String::from_utf8(buf).unwrap(), "✖ Config: bad delimiter\n");
}

#[test]
fn error_without_colors_full() {
    let mut buf = Vec::new();
    ErrorOutput::with_colors(false).write_error(
        &mut buf,
        "Load",
        "cannot read 'data.csv'",
        Some("No such file or directory"),
        Some("Check the input path"),
    );
    let result = String::from_utf8(buf).unwrap();
    assert_eq!(
        result,
        "✖ Load: cannot read 'data.csv'\n  × No such file or directory\n  help: Check the input path\n"
    );
}

#[test]
fn report_error_uses_accessors() {
    let err = ReportError::TypeKind {
        row: 7,
        column: "obs_value",
        value: "abc".to_string(),
    };
    let result = render_error(false, &err);
    assert!(result.starts_with("✖ TypeKind: non-numeric value 'abc' in column 'obs_value'\n"));
    assert!(result.contains("  × at data row 7\n"));
    assert!(result.contains("  help: Clean the obs_value column"));
}

#[test]
fn missing_column_error_names_file() {
    let err = ReportError::MissingColumn {
        path: PathBuf::from("in.csv"),
        column: "sex",
    };
    let result = render_error(false, &err);
    assert!(result.contains("✖ Load: missing required column 'sex'"));
    assert!(result.contains("  × in in.csv"));
}

#[test]
fn error_with_colors_wraps_heading() {
    let result = render_error(true, &ReportError::Config("bad".to_string()));
    assert!(result.starts_with("\x1b[1m\x1b[31m✖ Config:\x1b[0m bad\n"));
    assert!(result.contains("\x1b[36mhelp:\x1b[0m"));
}

#[test]
fn warning_without_colors() {
    let mut buf = Vec::new();
    let warning = ReportWarning::UnresolvedCountry {
        country: "Atlantis".to_string(),
    };
    ErrorOutput::with_colors(false).write_warning(&mut buf, &warning.to_string(), None, None);
    assert_eq!(
        String::from_utf8(buf).unwrap(),
        "⚠ Warning: country 'Atlantis' has no map region and is omitted\n"
    );
}

#[test]
fn warning_with_colors_and_detail() {
    let mut buf = Vec::new();
    ErrorOutput::with_colors(true).write_warning(&mut buf, "slow", Some("why"), None);
    let result = String::from_utf8(buf).unwrap();
    assert!(result.contains("\x1b[33m⚠ Warning:\x1b[0m slow"));
    assert!(result.contains("\x1b[2m× why\x1b[0m"));
}
