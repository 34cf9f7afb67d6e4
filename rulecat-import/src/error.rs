use crate::format::ImportFormat;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ImportError {
    #[error("input is empty")]
    Empty,

    #[error("{format} syntax error: {message}")]
    Syntax {
        format: ImportFormat,
        message: String,
    },

    #[error("{format} input is not a map of rules")]
    NotARuleMap { format: ImportFormat },

    #[error("no rules array found")]
    NoRulesArray,

    #[error("rule \"{rule}\" must be true, false, null or an option map, found {found}")]
    InvalidRule { rule: String, found: String },

    #[error("input is not a recognized PHP, JSON or YAML rule configuration")]
    Unrecognized,

    #[error("unknown import format \"{0}\" (expected auto, php, json or yaml)")]
    UnknownFormat(String),
}
