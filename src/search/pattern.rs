//! Translation of dialog text and options into a matcher pattern.

use super::types::{CompileFlags, SearchOptions};

/// Build the pattern string for `text` under `options`.
///
/// Literal text is escaped so it matches verbatim; regex text is passed
/// through untouched. Whole-word mode wraps either form in `\b` anchors.
pub fn compile_pattern(text: &str, options: &SearchOptions) -> String {
    let pattern = if options.use_regex {
        text.to_string()
    } else {
        regex::escape(text)
    };

    if options.whole_word {
        format!(r"\b{}\b", pattern)
    } else {
        pattern
    }
}

/// Matcher flags for `options`.
pub fn compile_flags(options: &SearchOptions) -> CompileFlags {
    (CompileFlags::MULTILINE | CompileFlags::UNICODE)
        .with(CompileFlags::CASE_INSENSITIVE, !options.case_sensitive)
        .with(CompileFlags::UNICODE_CLASSES, options.use_regex)
}

#[cfg(test)]
mod tests {
    use super::*;
    use regex::RegexBuilder;

    fn literal() -> SearchOptions {
        SearchOptions {
            case_sensitive: true,
            ..Default::default()
        }
    }

    fn build(pattern: &str) -> regex::Regex {
        RegexBuilder::new(pattern).build().unwrap()
    }

    #[test]
    fn test_literal_metacharacters_escaped() {
        for text in ["a.b", "1+1=2", "(x)", "[abc]", "a*b?", "^start$", r"back\slash", "{1,2}|q"] {
            let pattern = compile_pattern(text, &literal());
            let re = build(&pattern);
            let anchored = build(&format!("^(?:{})$", pattern));
            assert!(re.is_match(text), "{text} should match itself");
            assert!(anchored.is_match(text), "{text} should match exactly");
        }
    }

    #[test]
    fn test_literal_dot_does_not_match_any_char() {
        let re = build(&compile_pattern("a.b", &literal()));
        assert!(!re.is_match("axb"));
    }

    #[test]
    fn test_regex_passthrough() {
        let options = SearchOptions {
            use_regex: true,
            ..Default::default()
        };
        assert_eq!(compile_pattern(r"test\d+", &options), r"test\d+");
    }

    #[test]
    fn test_whole_word_wraps_literal() {
        let options = SearchOptions {
            whole_word: true,
            ..literal()
        };
        let pattern = compile_pattern("cat", &options);
        assert_eq!(pattern, r"\bcat\b");

        let re = build(&pattern);
        assert!(re.is_match("the cat sat"));
        assert!(re.is_match("cat"));
        assert!(!re.is_match("concatenate"));
    }

    #[test]
    fn test_whole_word_wraps_regex() {
        let options = SearchOptions {
            whole_word: true,
            use_regex: true,
            ..Default::default()
        };
        assert_eq!(compile_pattern("fo+", &options), r"\bfo+\b");
    }

    #[test]
    fn test_flags_case_insensitive() {
        let flags = compile_flags(&SearchOptions::default());
        assert!(flags.contains(CompileFlags::MULTILINE | CompileFlags::UNICODE));
        assert!(flags.contains(CompileFlags::CASE_INSENSITIVE));
        assert!(!flags.contains(CompileFlags::UNICODE_CLASSES));
    }

    #[test]
    fn test_flags_case_sensitive_regex() {
        let flags = compile_flags(&SearchOptions {
            case_sensitive: true,
            use_regex: true,
            ..Default::default()
        });
        assert!(flags.contains(CompileFlags::MULTILINE | CompileFlags::UNICODE));
        assert!(!flags.contains(CompileFlags::CASE_INSENSITIVE));
        assert!(flags.contains(CompileFlags::UNICODE_CLASSES));
    }
}
