//! Field checks shared by the history inputs

use chrono::NaiveDate;
use kernel::error::app_error::FieldError;

use crate::domain::value_object::history_date::parse_history_date;

/// Collects field errors while an input is being checked
#[derive(Debug, Default)]
pub(crate) struct Checker {
    errors: Vec<FieldError>,
}

impl Checker {
    /// Non-blank text, or an error with `msg`
    pub fn required(
        &mut self,
        param: &'static str,
        raw: Option<String>,
        msg: &'static str,
    ) -> Option<String> {
        match raw {
            Some(value) if !value.trim().is_empty() => Some(value),
            _ => {
                self.errors.push(FieldError::new(param, msg));
                None
            }
        }
    }

    /// A required date
    pub fn required_date(
        &mut self,
        param: &'static str,
        raw: Option<String>,
        msg: &'static str,
    ) -> Option<NaiveDate> {
        let raw = self.required(param, raw, msg)?;
        self.date(param, &raw)
    }

    /// An optional date; blank counts as absent
    pub fn optional_date(&mut self, param: &'static str, raw: Option<String>) -> Option<NaiveDate> {
        let raw = optional(raw)?;
        self.date(param, &raw)
    }

    fn date(&mut self, param: &'static str, raw: &str) -> Option<NaiveDate> {
        let parsed = parse_history_date(raw);
        if parsed.is_none() {
            self.errors
                .push(FieldError::new(param, format!("{} must be a valid date", date_label(param))));
        }
        parsed
    }

    pub fn finish(self) -> Result<(), Vec<FieldError>> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(self.errors)
        }
    }
}

/// Optional text; blank counts as absent
pub(crate) fn optional(raw: Option<String>) -> Option<String> {
    raw.filter(|value| !value.trim().is_empty())
}

fn date_label(param: &str) -> &str {
    match param {
        "from" => "From date",
        "to" => "To date",
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collects_every_error() {
        let mut checker = Checker::default();
        assert_eq!(checker.required("title", None, "Title is required"), None);
        assert_eq!(
            checker.required("company", Some("  ".into()), "Company is required"),
            None
        );
        assert_eq!(checker.optional_date("to", Some("someday".into())), None);

        let errors = checker.finish().unwrap_err();
        let messages: Vec<_> = errors.iter().map(|e| e.msg.as_ref()).collect();
        assert_eq!(
            messages,
            [
                "Title is required",
                "Company is required",
                "To date must be a valid date"
            ]
        );
    }

    #[test]
    fn test_valid_input_passes() {
        let mut checker = Checker::default();
        assert_eq!(
            checker.required_date("from", Some("2021-03-04".into()), "From date is required"),
            NaiveDate::from_ymd_opt(2021, 3, 4)
        );
        assert_eq!(checker.optional_date("to", Some(String::new())), None);
        assert!(checker.finish().is_ok());
    }
}
