use crate::error::Result;
use crate::pipeline::DerivedViews;

use super::ReportFormatter;

/// Pretty JSON dump of every derived view and warning.
pub struct JsonFormatter;

impl ReportFormatter for JsonFormatter {
    fn format(&self, views: &DerivedViews) -> Result<String> {
        views.to_json()
    }
}

#[cfg(test)]
#[path = "json_tests.rs"]
mod tests;
