//! Reference fixer library for rulecat.
//!
//! A small PHP-style code-style library: a lossless tokenizer, a handful of fixers and a few
//! composable rule sets. [`BuiltinLibrary`] exposes all of it through
//! [`rulecat_fixer_api::FixerLibrary`] so the extractor has a real catalog to walk.

mod fixers;
mod library;
mod sets;
mod tokenizer;

pub use fixers::{
    ArraySyntaxFixer, BlankLineBeforeStatementFixer, ElseifFixer, IndentationTypeFixer,
    LowercaseKeywordsFixer, NoClosingTagFixer, NoTrailingWhitespaceFixer, PsrAutoloadingFixer,
    SingleQuoteFixer, StrictComparisonFixer, builtin_fixers,
};
pub use library::BuiltinLibrary;
pub use sets::{SetDefinition, builtin_sets, resolve};
pub use tokenizer::tokenize;
