//! Tests for SVG text formatting.

use super::*;

mod html_escape_tests {
    use super::*;

    #[test]
    fn escapes_ampersand() {
        assert_eq!(html_escape("Trinidad & Tobago"), "Trinidad &amp; Tobago");
    }

    #[test]
    fn escapes_angle_brackets() {
        assert_eq!(html_escape("<tag>"), "&lt;tag&gt;");
    }

    #[test]
    fn escapes_quotes() {
        assert_eq!(html_escape("\"quoted\""), "&quot;quoted&quot;");
        assert_eq!(html_escape("Cote d'Ivoire"), "Cote d&#39;Ivoire");
    }

    #[test]
    fn leaves_unicode_alone() {
        assert_eq!(html_escape("Türkiye"), "Türkiye");
    }
}

mod format_number_tests {
    use super::*;

    #[test]
    fn small_numbers_unchanged() {
        assert_eq!(format_number(0), "0");
        assert_eq!(format_number(9999), "9999");
        assert_eq!(format_number(-42), "-42");
    }

    #[test]
    fn thousands_show_k() {
        assert_eq!(format_number(10_000), "10.0K");
        assert_eq!(format_number(15_500), "15.5K");
    }

    #[test]
    fn millions_show_m() {
        assert_eq!(format_number(1_000_000), "1.0M");
        assert_eq!(format_number(2_500_000), "2.5M");
    }
}

mod format_value_tests {
    use super::*;

    #[test]
    fn trims_trailing_zeros() {
        assert_eq!(format_value(15.0), "15");
        assert_eq!(format_value(2.5), "2.5");
        assert_eq!(format_value(1.0 / 3.0), "0.33");
    }

    #[test]
    fn negative_and_zero() {
        assert_eq!(format_value(-1.25), "-1.25");
        assert_eq!(format_value(-0.001), "0");
        assert_eq!(format_value(0.0), "0");
    }

    #[test]
    fn large_values_abbreviated() {
        assert_eq!(format_value(150_000.0), "150.0K");
        assert_eq!(format_value(3_200_000.0), "3.2M");
    }

    #[test]
    fn non_finite_is_marked() {
        assert_eq!(format_value(f64::NAN), "n/a");
    }
}

#[test]
fn round2_truncates_noise() {
    assert!((round2(12.345_678) - 12.35).abs() < 1e-9);
    assert!((round2(400.0) - 400.0).abs() < f64::EPSILON);
}
