//! Deterministic template rendering
//!
//! Merges form values into a document type's template. Fields that are
//! missing or blank keep their bracket placeholder so the rendered text
//! stays legible for live preview; a fully-filled form yields the base
//! document with no field placeholders left.

use chrono::{Local, NaiveDate};

use crate::registry::{self, DocumentSpec};
use crate::types::{non_empty, DocumentTypeId, FormValues};

/// Render the base document for an implemented type.
///
/// Returns `None` for catalogued-but-unimplemented types. Output is
/// identical for identical inputs within the same calendar day (the
/// current date is the only ambient input).
pub fn render(id: DocumentTypeId, values: &FormValues) -> Option<String> {
    registry::spec(id).map(|spec| render_spec_on(spec, values, Local::now().date_naive()))
}

/// Required-field labels missing from `values`, in schema order.
pub fn missing_fields(id: DocumentTypeId, values: &FormValues) -> Vec<&'static str> {
    registry::spec(id)
        .map(|spec| {
            spec.fields
                .iter()
                .filter(|f| f.required && non_empty(values, f.key).is_none())
                .map(|f| f.label)
                .collect()
        })
        .unwrap_or_default()
}

pub(crate) fn render_spec(spec: &DocumentSpec, values: &FormValues) -> String {
    render_spec_on(spec, values, Local::now().date_naive())
}

fn render_spec_on(spec: &DocumentSpec, values: &FormValues, today: NaiveDate) -> String {
    let mut text = spec.template.to_string();
    for field in spec.fields {
        if let Some(value) = non_empty(values, field.key) {
            text = text.replace(field.placeholder, value);
        }
    }
    substitute_dates(&text, today)
}

/// Replace the date tokens with the current local date, written the way
/// legal documents expect it: day, full month name, four-digit year.
fn substitute_dates(text: &str, today: NaiveDate) -> String {
    text.replace("[Current Date]", &today.format("%-d %B %Y").to_string())
        .replace("[Day]", &today.format("%-d").to_string())
        .replace("[Month]", &today.format("%B").to_string())
        .replace("[Year]", &today.format("%Y").to_string())
}
