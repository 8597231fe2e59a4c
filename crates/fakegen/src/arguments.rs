//! Positional and keyword arguments handed to formatters.
//!
//! Formatters receive their arguments as opaque JSON values. A parameter may
//! be bound either by position or by keyword, but not both: [`Arguments::get`]
//! reports a parameter supplied twice as an error.

use std::collections::BTreeMap;

pub use serde_json::Value;

use crate::error::FormatterError;

/// Arguments forwarded unchanged from a caller to a formatter.
///
/// # Example
///
/// ```
/// use fakegen::Arguments;
///
/// let args = Arguments::new().with_positional("foo").with_keyword("append", "!");
///
/// assert_eq!(args.get_str(0, "param"), Ok(Some("foo")));
/// assert_eq!(args.get_str(1, "append"), Ok(Some("!")));
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Arguments {
    positional: Vec<Value>,
    keyword: BTreeMap<String, Value>,
}

impl Arguments {
    /// Creates an empty argument list.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            positional: Vec::new(),
            keyword: BTreeMap::new(),
        }
    }

    /// Appends a positional argument.
    #[must_use]
    pub fn with_positional(mut self, value: impl Into<Value>) -> Self {
        self.push_positional(value);
        self
    }

    /// Sets a keyword argument, replacing any previous value for `key`.
    #[must_use]
    pub fn with_keyword(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert_keyword(key, value);
        self
    }

    /// Appends a positional argument in place.
    pub fn push_positional(&mut self, value: impl Into<Value>) {
        self.positional.push(value.into());
    }

    /// Sets a keyword argument in place.
    pub fn insert_keyword(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.keyword.insert(key.into(), value.into());
    }

    /// Returns the positional arguments in call order.
    #[must_use]
    pub fn positional(&self) -> &[Value] {
        &self.positional
    }

    /// Returns the keyword arguments.
    #[must_use]
    pub const fn keyword(&self) -> &BTreeMap<String, Value> {
        &self.keyword
    }

    /// Returns `true` when no argument was supplied.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.positional.is_empty() && self.keyword.is_empty()
    }

    /// Looks up the parameter bound at position `index` or named `name`.
    ///
    /// # Errors
    ///
    /// Returns [`FormatterError::DuplicateArgument`] when the parameter is
    /// bound both by position and by keyword.
    pub fn get(&self, index: usize, name: &str) -> Result<Option<&Value>, FormatterError> {
        match (self.positional.get(index), self.keyword.get(name)) {
            (Some(_), Some(_)) => Err(FormatterError::DuplicateArgument {
                parameter: name.to_owned(),
            }),
            (positional, keyword) => Ok(positional.or(keyword)),
        }
    }

    /// Looks up a string parameter.
    ///
    /// # Errors
    ///
    /// Returns [`FormatterError::InvalidArgument`] when the parameter is
    /// present but is not a string, or [`FormatterError::DuplicateArgument`]
    /// when it is bound twice.
    pub fn get_str(&self, index: usize, name: &str) -> Result<Option<&str>, FormatterError> {
        self.get(index, name)?
            .map(|value| value.as_str().ok_or_else(|| invalid(name, "a string")))
            .transpose()
    }

    /// Looks up a non-negative integer parameter.
    ///
    /// # Errors
    ///
    /// Returns [`FormatterError::InvalidArgument`] when the parameter is
    /// present but is not a non-negative integer that fits in `usize`, or
    /// [`FormatterError::DuplicateArgument`] when it is bound twice.
    pub fn get_usize(&self, index: usize, name: &str) -> Result<Option<usize>, FormatterError> {
        self.get(index, name)?
            .map(|value| {
                value
                    .as_u64()
                    .and_then(|number| usize::try_from(number).ok())
                    .ok_or_else(|| invalid(name, "a non-negative integer"))
            })
            .transpose()
    }
}

fn invalid(name: &str, expected: &'static str) -> FormatterError {
    FormatterError::InvalidArgument {
        parameter: name.to_owned(),
        expected,
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[test]
    fn positional_binding_is_used_when_no_keyword_matches() {
        let args = Arguments::new()
            .with_positional("first")
            .with_keyword("other", "second");

        assert_eq!(args.get(0, "param"), Ok(Some(&Value::from("first"))));
    }

    #[test]
    fn keyword_binding_is_used_when_position_is_empty() {
        let args = Arguments::new().with_keyword("append", "!");

        assert_eq!(args.get(1, "append"), Ok(Some(&Value::from("!"))));
        assert_eq!(args.get(0, "param"), Ok(None));
    }

    #[test]
    fn binding_a_parameter_twice_is_rejected() {
        let args = Arguments::new()
            .with_positional("first")
            .with_keyword("param", "second");

        let duplicate = FormatterError::DuplicateArgument {
            parameter: "param".to_owned(),
        };
        assert_eq!(args.get(0, "param"), Err(duplicate.clone()));
        assert_eq!(args.get_str(0, "param"), Err(duplicate));
        assert_eq!(args.get_str(1, "append"), Ok(None));
    }

    #[test]
    fn empty_arguments_report_empty() {
        assert!(Arguments::new().is_empty());
        assert!(!Arguments::new().with_keyword("a", 1).is_empty());
    }

    #[rstest]
    #[case(Value::from(3), Ok(Some(3)))]
    #[case(Value::from(-1), Err(invalid("nb", "a non-negative integer")))]
    #[case(Value::from("3"), Err(invalid("nb", "a non-negative integer")))]
    fn get_usize_validates_shape(
        #[case] value: Value,
        #[case] expected: Result<Option<usize>, FormatterError>,
    ) {
        let args = Arguments::new().with_keyword("nb", value);
        assert_eq!(args.get_usize(0, "nb"), expected);
    }

    #[test]
    fn get_str_rejects_non_strings() {
        let args = Arguments::new().with_positional(7);

        assert_eq!(args.get_str(0, "value"), Err(invalid("value", "a string")));
    }

    #[test]
    fn missing_parameters_resolve_to_none() {
        let args = Arguments::new();

        assert_eq!(args.get_str(0, "value"), Ok(None));
        assert_eq!(args.get_usize(0, "nb"), Ok(None));
    }
}
