use camino::Utf8Path;
use rulecat_fixer_api::{Fixer, FormatDefaults};

mod array_syntax;
mod blank_line_before_statement;
mod elseif;
mod indentation_type;
mod lowercase_keywords;
mod no_closing_tag;
mod no_trailing_whitespace;
mod psr_autoloading;
mod single_quote;
mod strict_comparison;

pub use array_syntax::ArraySyntaxFixer;
pub use blank_line_before_statement::BlankLineBeforeStatementFixer;
pub use elseif::ElseifFixer;
pub use indentation_type::IndentationTypeFixer;
pub use lowercase_keywords::LowercaseKeywordsFixer;
pub use no_closing_tag::NoClosingTagFixer;
pub use no_trailing_whitespace::NoTrailingWhitespaceFixer;
pub use psr_autoloading::PsrAutoloadingFixer;
pub use single_quote::SingleQuoteFixer;
pub use strict_comparison::StrictComparisonFixer;

/// Fresh, unconfigured instances of every built-in fixer.
pub fn builtin_fixers(root: &Utf8Path, format: &FormatDefaults) -> Vec<Box<dyn Fixer>> {
    vec![
        Box::new(ArraySyntaxFixer::new()),
        Box::new(BlankLineBeforeStatementFixer::new()),
        Box::new(ElseifFixer),
        Box::new(IndentationTypeFixer::new(format.indent.clone())),
        Box::new(LowercaseKeywordsFixer),
        Box::new(NoClosingTagFixer),
        Box::new(NoTrailingWhitespaceFixer),
        Box::new(PsrAutoloadingFixer::new(root)),
        Box::new(SingleQuoteFixer::new()),
        Box::new(StrictComparisonFixer),
    ]
}

/// Boolean option from a map already resolved against its schema.
fn resolved_bool(options: &rulecat_fixer_api::OptionMap, name: &str) -> bool {
    options.get(name).and_then(|v| v.as_bool()).unwrap_or(false)
}
