//! Error types for the fakegen crate.
//!
//! Resolution failures and formatter failures are kept apart so callers can
//! tell "no such formatter" from "the formatter ran and failed", following
//! the project's error handling conventions with `thiserror`.

use thiserror::Error;

/// Errors a formatter may raise while producing a value.
///
/// The generator never inspects or rewrites these; they reach the caller
/// exactly as the formatter produced them.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatterError {
    /// A required argument was supplied neither positionally nor by keyword.
    #[error("missing required argument '{parameter}'")]
    MissingArgument {
        /// Name of the missing parameter.
        parameter: String,
    },

    /// An argument was supplied with a value of the wrong shape.
    #[error("invalid value for argument '{parameter}': expected {expected}")]
    InvalidArgument {
        /// Name of the offending parameter.
        parameter: String,
        /// Description of the accepted values.
        expected: &'static str,
    },

    /// An argument was supplied both by position and by keyword.
    #[error("argument '{parameter}' given both by position and by keyword")]
    DuplicateArgument {
        /// Name of the parameter bound twice.
        parameter: String,
    },

    /// The provider was asked for a formatter it does not implement.
    #[error("provider does not implement formatter '{formatter}'")]
    Unsupported {
        /// Formatter name that was requested.
        formatter: String,
    },

    /// The formatter failed for a reason of its own.
    #[error("{message}")]
    Failed {
        /// Description of the failure.
        message: String,
    },
}

/// Errors surfaced by the generator facade.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GeneratorError {
    /// No registered provider exposes the requested formatter name.
    #[error("unknown formatter '{name}'")]
    NameNotFound {
        /// The formatter name that could not be resolved.
        name: String,
    },

    /// Composite formatters expanded inside one another too deeply.
    #[error("composite formatter '{name}' nests too deeply")]
    CompositeDepth {
        /// The composite whose expansion hit the limit.
        name: String,
    },

    /// The resolved formatter failed; the inner error is passed through.
    #[error(transparent)]
    Formatter(#[from] FormatterError),
}

impl GeneratorError {
    /// Returns `true` when the error reports an unknown formatter name.
    #[must_use]
    pub const fn is_name_not_found(&self) -> bool {
        matches!(self, Self::NameNotFound { .. })
    }
}
