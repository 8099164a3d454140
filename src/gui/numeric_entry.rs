//! Numeric Entry Widget
//! Single-line text entry bound to an f64. Text that does not parse is kept
//! in the edit buffer but never written to the bound value.

use egui::{Color32, TextEdit};
use log::trace;
use std::num::ParseFloatError;
use thiserror::Error;

const ERROR_COLOR: Color32 = Color32::from_rgb(220, 53, 69);

#[derive(Error, Debug, Clone, PartialEq)]
pub enum FieldInputError {
    #[error("Value is empty")]
    Empty,
    #[error("'{input}' is not a number")]
    NotANumber {
        input: String,
        #[source]
        source: ParseFloatError,
    },
    #[error("'{input}' is not a finite number")]
    NotFinite { input: String },
}

/// Parse entry text into a finite number. Surrounding whitespace and
/// exponent notation are accepted.
pub fn parse_field(text: &str) -> Result<f64, FieldInputError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(FieldInputError::Empty);
    }

    let value: f64 = trimmed
        .parse()
        .map_err(|source| FieldInputError::NotANumber {
            input: trimmed.to_string(),
            source,
        })?;

    if !value.is_finite() {
        return Err(FieldInputError::NotFinite {
            input: trimmed.to_string(),
        });
    }
    Ok(value)
}

/// Text buffer plus the last rejection, if any.
#[derive(Debug, Clone)]
pub struct NumericEntry {
    pub(super) text: String,
    error: Option<FieldInputError>,
}

impl NumericEntry {
    pub fn new(value: f64) -> Self {
        Self {
            text: value.to_string(),
            error: None,
        }
    }

    /// Parse the current buffer. Returns the accepted value, or None when the
    /// text is rejected.
    pub fn commit(&mut self) -> Option<f64> {
        match parse_field(&self.text) {
            Ok(value) => {
                self.error = None;
                Some(value)
            }
            Err(e) => {
                trace!("Rejected input: {}", e);
                self.error = Some(e);
                None
            }
        }
    }

    /// Draw the entry. Returns a new value when the user edited the text into
    /// a valid number.
    pub fn show(&mut self, ui: &mut egui::Ui, width: f32) -> Option<f64> {
        let mut edit = TextEdit::singleline(&mut self.text).desired_width(width);
        if self.error.is_some() {
            edit = edit.text_color(ERROR_COLOR);
        }

        let response = ui.add(edit);
        let accepted = if response.changed() {
            self.commit()
        } else {
            None
        };

        if let Some(error) = &self.error {
            response.on_hover_text(error.to_string());
        }

        accepted
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("100", 100.0)]
    #[case(" 90.5 ", 90.5)]
    #[case("1e-5", 1e-5)]
    #[case("-2.5", -2.5)]
    fn parse_accepts_numbers(#[case] text: &str, #[case] expected: f64) {
        assert_eq!(parse_field(text), Ok(expected));
    }

    #[rstest]
    #[case("")]
    #[case("   ")]
    fn parse_rejects_empty(#[case] text: &str) {
        assert_eq!(parse_field(text), Err(FieldInputError::Empty));
    }

    #[test]
    fn parse_rejects_text() {
        let err = parse_field("abc").unwrap_err();

        match &err {
            FieldInputError::NotANumber { input, .. } => assert_eq!(input, "abc"),
            other => panic!("unexpected error: {other:?}"),
        }
        assert_eq!(err.to_string(), "'abc' is not a number");
    }

    #[rstest]
    #[case("inf")]
    #[case("NaN")]
    fn parse_rejects_non_finite(#[case] text: &str) {
        let result = parse_field(text);

        assert!(matches!(result, Err(FieldInputError::NotFinite { .. })));
    }

    #[test]
    fn new_entry_shows_value() {
        assert_eq!(NumericEntry::new(100.0).text, "100");
        assert_eq!(NumericEntry::new(1e-5).text, "0.00001");
    }

    #[test]
    fn commit_keeps_error_until_text_is_valid() {
        let mut entry = NumericEntry::new(90.0);

        entry.text = "9x".to_string();
        assert_eq!(entry.commit(), None);
        assert!(entry.error.is_some());

        entry.text = "95".to_string();
        assert_eq!(entry.commit(), Some(95.0));
        assert!(entry.error.is_none());
    }
}
