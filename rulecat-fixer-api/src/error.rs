use thiserror::Error;

/// Errors a fixer library reports through the [`crate::Fixer`] and
/// [`crate::FixerLibrary`] contracts.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FixerError {
    /// Source text could not be tokenized.
    #[error("{message} on line {line}")]
    Parse { line: usize, message: String },

    #[error("unknown option \"{option}\"")]
    UnknownOption { option: String },

    #[error("missing required option \"{option}\"")]
    MissingOption { option: String },

    #[error("option \"{option}\" expects {expected}, got {found}")]
    InvalidOptionType {
        option: String,
        expected: String,
        found: String,
    },

    #[error("option \"{option}\" does not accept {value}")]
    InvalidOptionValue { option: String, value: String },

    #[error("fixer \"{fixer}\" does not accept configuration")]
    NotConfigurable { fixer: String },

    #[error("unknown rule set \"{name}\"")]
    UnknownSet { name: String },

    #[error("rule set \"{name}\" includes itself")]
    RecursiveSet { name: String },

    #[error("rule set \"{name}\" is invalid: {message}")]
    InvalidSet { name: String, message: String },

    /// A fixer could not rewrite a token stream.
    #[error("{message}")]
    Fix { message: String },
}

impl FixerError {
    /// Stable kind name, used when a failure is reported as data.
    pub fn kind(&self) -> &'static str {
        match self {
            FixerError::Parse { .. } => "ParseError",
            FixerError::UnknownOption { .. } => "UnknownOption",
            FixerError::MissingOption { .. } => "MissingOption",
            FixerError::InvalidOptionType { .. } => "InvalidOptionType",
            FixerError::InvalidOptionValue { .. } => "InvalidOptionValue",
            FixerError::NotConfigurable { .. } => "NotConfigurable",
            FixerError::UnknownSet { .. } => "UnknownSet",
            FixerError::RecursiveSet { .. } => "RecursiveSet",
            FixerError::InvalidSet { .. } => "InvalidSet",
            FixerError::Fix { .. } => "FixError",
        }
    }
}
