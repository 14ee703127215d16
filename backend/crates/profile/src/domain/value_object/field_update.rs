//! Field Update Value Object
//!
//! A single optional field in a sparse update. Absent input keeps the
//! stored value, a blank string clears it, anything else replaces it.

/// Tri-state change to one optional field
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FieldUpdate<T> {
    /// Field not supplied; stored value is untouched
    #[default]
    Keep,
    /// Replace with a new value
    Set(T),
    /// Remove the stored value
    Clear,
}

impl FieldUpdate<String> {
    /// Interpret raw request input
    ///
    /// Whitespace-only input counts as blank. The value itself is stored
    /// as supplied.
    pub fn from_input(raw: Option<String>) -> Self {
        match raw {
            None => FieldUpdate::Keep,
            Some(value) if value.trim().is_empty() => FieldUpdate::Clear,
            Some(value) => FieldUpdate::Set(value),
        }
    }
}

impl<T> FieldUpdate<T> {
    pub fn is_keep(&self) -> bool {
        matches!(self, FieldUpdate::Keep)
    }

    /// Apply onto a stored optional value
    pub fn apply_to(self, target: &mut Option<T>) {
        match self {
            FieldUpdate::Keep => {}
            FieldUpdate::Set(value) => *target = Some(value),
            FieldUpdate::Clear => *target = None,
        }
    }

    /// Value to use when there is nothing stored yet
    pub fn into_initial(self) -> Option<T> {
        match self {
            FieldUpdate::Set(value) => Some(value),
            FieldUpdate::Keep | FieldUpdate::Clear => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_input() {
        assert_eq!(FieldUpdate::from_input(None), FieldUpdate::Keep);
        assert_eq!(FieldUpdate::from_input(Some("".into())), FieldUpdate::Clear);
        assert_eq!(FieldUpdate::from_input(Some("  ".into())), FieldUpdate::Clear);
        assert_eq!(
            FieldUpdate::from_input(Some("Acme".into())),
            FieldUpdate::Set("Acme".to_string())
        );
    }

    #[test]
    fn test_apply_to() {
        let mut stored = Some("old".to_string());
        FieldUpdate::Keep.apply_to(&mut stored);
        assert_eq!(stored.as_deref(), Some("old"));

        FieldUpdate::Set("new".to_string()).apply_to(&mut stored);
        assert_eq!(stored.as_deref(), Some("new"));

        FieldUpdate::Clear.apply_to(&mut stored);
        assert_eq!(stored, None);
    }

    #[test]
    fn test_into_initial() {
        assert_eq!(FieldUpdate::Set(1).into_initial(), Some(1));
        assert_eq!(FieldUpdate::<i32>::Clear.into_initial(), None);
        assert_eq!(FieldUpdate::<i32>::Keep.into_initial(), None);
    }
}
