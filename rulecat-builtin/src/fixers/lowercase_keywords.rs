use rulecat_fixer_api::{CodeSample, FileContext, Fixer, FixerDefinition, FixerError, Tokens};

const KEYWORDS: &[&str] = &[
    "abstract", "and", "array", "as", "break", "callable", "case", "catch", "class", "clone",
    "const", "continue", "declare", "default", "do", "echo", "else", "elseif", "empty",
    "enddeclare", "endfor", "endforeach", "endif", "endswitch", "endwhile", "enum", "extends",
    "final", "finally", "fn", "for", "foreach", "function", "global", "goto", "if",
    "implements", "include", "include_once", "instanceof", "insteadof", "interface", "isset",
    "list", "match", "namespace", "new", "or", "print", "private", "protected", "public",
    "readonly", "require", "require_once", "return", "static", "switch", "throw", "trait", "try",
    "unset", "use", "var", "while", "xor", "yield",
];

pub struct LowercaseKeywordsFixer;

impl Fixer for LowercaseKeywordsFixer {
    fn name(&self) -> &str {
        "lowercase_keywords"
    }

    fn definition(&self) -> Option<FixerDefinition> {
        Some(FixerDefinition::new(
            "PHP keywords MUST be in lower case.",
            vec![CodeSample::new(
                "<?php\n    FOREACH($a AS $B) {\n        TRY {\n            NEW $C($a, ISSET($B));\n            WHILE($B) {\n                INCLUDE \"test.php\";\n            }\n        } CATCH(\\Exception $e) {\n            EXIT(1);\n        }\n    }\n",
            )],
        ))
    }

    fn fix(&self, _file: &FileContext, tokens: &mut Tokens) -> Result<(), FixerError> {
        for i in 0..tokens.len() {
            let token = &tokens.as_slice()[i];
            let is_keyword = KEYWORDS.iter().any(|k| token.is_keyword(k));
            if !is_keyword || !token.text.chars().any(|c| c.is_ascii_uppercase()) {
                continue;
            }
            let is_member_name = tokens.prev_meaningful(i).is_some_and(|p| {
                matches!(tokens.as_slice()[p].text.as_str(), "->" | "?->" | "::")
            });
            if is_member_name {
                continue;
            }
            let lower = token.text.to_ascii_lowercase();
            tokens.set_text(i, lower);
        }
        Ok(())
    }
}
