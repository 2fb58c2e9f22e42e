use std::path::PathBuf;

use super::*;

#[test]
fn error_display_config() {
    let err = ReportError::Config("invalid top_n".to_string());
    assert_eq!(err.to_string(), "Configuration error: invalid top_n");
}

#[test]
fn error_display_load_names_path() {
    let err = ReportError::Load {
        path: PathBuf::from("data.csv"),
        source: std::io::Error::new(std::io::ErrorKind::NotFound, "file not found"),
    };
    assert!(err.to_string().contains("data.csv"));
    assert_eq!(err.detail().as_deref(), Some("file not found"));
}

#[test]
fn error_display_missing_column() {
    let err = ReportError::MissingColumn {
        path: PathBuf::from("data.csv"),
        column: "obs_value",
    };
    assert_eq!(
        err.to_string(),
        "Input file data.csv is missing required column 'obs_value'"
    );
}

#[test]
fn error_display_type_kind() {
    let err = ReportError::TypeKind {
        row: 7,
        column: "obs_value",
        value: "high".to_string(),
    };
    assert_eq!(
        err.to_string(),
        "Non-numeric value 'high' in column 'obs_value' at data row 7"
    );
    assert_eq!(err.detail().as_deref(), Some("at data row 7"));
}

#[test]
fn error_type_returns_correct_type() {
    assert_eq!(ReportError::Config("x".to_string()).error_type(), "Config");
    assert_eq!(
        ReportError::MissingColumn {
            path: PathBuf::from("a.csv"),
            column: "sex",
        }
        .error_type(),
        "Load"
    );
    assert_eq!(
        ReportError::TypeKind {
            row: 1,
            column: "obs_value",
            value: "x".to_string(),
        }
        .error_type(),
        "TypeKind"
    );
    assert_eq!(
        ReportError::Io(std::io::Error::other("test")).error_type(),
        "IO"
    );
}

#[test]
fn config_error_has_no_detail() {
    let err = ReportError::Config("bad".to_string());
    assert_eq!(err.message(), "bad");
    assert!(err.detail().is_none());
    assert!(err.suggestion().is_some());
}

#[test]
fn io_error_converts_via_from() {
    let err: ReportError = std::io::Error::other("disk full").into();
    assert!(matches!(err, ReportError::Io(_)));
    assert!(err.suggestion().is_none());
}

#[test]
fn file_access_reports_path_and_cause() {
    let err = ReportError::FileAccess {
        path: PathBuf::from("out/report.html"),
        source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "permission denied"),
    };
    assert_eq!(err.error_type(), "IO");
    assert_eq!(err.message(), "cannot access 'out/report.html'");
    assert_eq!(err.detail().as_deref(), Some("permission denied"));
}
