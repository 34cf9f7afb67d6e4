#![no_main]

//! Fuzz target for the individual importers.

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use rulecat_import::{ImportFormat, Importers};

#[derive(Debug, Arbitrary)]
enum Format {
    Php,
    Json,
    Yaml,
}

#[derive(Debug, Arbitrary)]
struct Input {
    format: Format,
    text: String,
}

fuzz_target!(|input: Input| {
    let format = match input.format {
        Format::Php => ImportFormat::Php,
        Format::Json => ImportFormat::Json,
        Format::Yaml => ImportFormat::Yaml,
    };
    let _ = Importers::for_format(format).try_parse(&input.text);
});
