pub type Result<T> = std::result::Result<T, InvalidFlagValue>;

/// A candidate integer that cannot be used as a [`FlagValue`](crate::FlagValue).
///
/// Raised when the candidate is fractional, NaN, infinite, negative, or above
/// `0x7FFFFFFF`. `name` is set when the candidate came from a flag set
/// definition.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{}", format_message(.name, .value))]
pub struct InvalidFlagValue {
    name: Option<String>,
    value: String,
}

fn format_message(name: &Option<String>, value: &str) -> String {
    match name {
        Some(name) => format!(
            "Invalid bitflag value for \"{name}\": {value}. Must be a non-negative integer within 31-bit range."
        ),
        None => format!(
            "Cannot convert {value} to a flag value: must be a non-negative integer within 31-bit range."
        ),
    }
}

impl InvalidFlagValue {
    pub(crate) fn new(value: impl Into<String>) -> Self {
        Self {
            name: None,
            value: value.into(),
        }
    }

    pub(crate) fn named(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Name of the offending definition entry, if any.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// The rejected value in its natural string form (`NaN`, `Infinity`, `-1`, `1.5`).
    pub fn value(&self) -> &str {
        &self.value
    }
}
