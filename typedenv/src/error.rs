//! Reasons a lookup falls back to its default

/// Why an accessor could not use the environment value.
///
/// Never returned to callers. Accessors classify the failure, log anything
/// other than [`EnvError::Missing`], and substitute the caller's default.
#[derive(Debug, thiserror::Error)]
pub(crate) enum EnvError {
    /// Variable is not set.
    #[error("Environment variable '{name}' is not set")]
    Missing {
        /// Name of the missing environment variable
        name: String,
    },

    /// Variable is set but its value is not valid UTF-8.
    #[error("Environment variable '{name}' is not valid unicode")]
    NotUnicode {
        /// Name of the environment variable
        name: String,
    },

    /// Variable is set but its value does not parse as the target type.
    #[error("Failed to parse environment variable '{name}' as {type_name}: {message}")]
    Parse {
        /// Name of the environment variable being parsed
        name: String,
        /// Fully qualified type name that parsing was attempted for
        type_name: &'static str,
        /// Error message from the parser
        message: String,
    },
}

impl EnvError {
    pub(crate) fn parse_error<T>(name: impl Into<String>, message: impl std::fmt::Display) -> Self {
        Self::Parse {
            name: name.into(),
            type_name: std::any::type_name::<T>(),
            message: message.to_string(),
        }
    }

    pub(crate) fn missing(name: impl Into<String>) -> Self {
        Self::Missing { name: name.into() }
    }

    pub(crate) fn not_unicode(name: impl Into<String>) -> Self {
        Self::NotUnicode { name: name.into() }
    }

    /// Name of the environment variable the error is about
    pub(crate) fn name(&self) -> &str {
        match self {
            Self::Missing { name } | Self::NotUnicode { name } | Self::Parse { name, .. } => name,
        }
    }
}

/// Rejected boolean literal.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid boolean literal {0:?}")]
pub(crate) struct InvalidBool(pub(crate) String);

/// Rejected floating point literal.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub(crate) enum InvalidFloat {
    #[error(transparent)]
    Syntax(#[from] std::num::ParseFloatError),

    /// Finite literal whose magnitude does not fit in `f64`.
    #[error("value {0:?} out of range")]
    OutOfRange(String),
}
