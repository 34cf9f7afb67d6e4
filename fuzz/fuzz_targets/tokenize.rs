#![no_main]

//! Fuzz target for the built-in tokenizer: tokenizing must be lossless.

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(s) = std::str::from_utf8(data) else {
        return;
    };

    if let Ok(tokens) = rulecat_builtin::tokenize(s) {
        assert_eq!(tokens.generate_code(), s);
    }
});
