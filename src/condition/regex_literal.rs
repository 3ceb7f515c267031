// SPDX-License-Identifier: MIT

//! `/pattern/flags` literal parsing for regex comparisons

use once_cell::sync::Lazy;
use regex::{Regex, RegexBuilder};

static LITERAL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)^/(.+)/([gimuy]*)$").expect("literal pattern is valid"));

/// A regex target split into its pattern and flag letters
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegexLiteral {
    pub pattern: String,
    pub flags: String,
}

impl RegexLiteral {
    pub fn has_flag(&self, flag: char) -> bool {
        self.flags.contains(flag)
    }

    /// Flag letters that appear more than once
    pub fn repeated_flags(&self) -> Vec<char> {
        let mut repeated: Vec<char> = self
            .flags
            .chars()
            .filter(|&c| self.flags.matches(c).count() > 1)
            .collect();
        repeated.sort_unstable();
        repeated.dedup();
        repeated
    }

    /// Build the regex, honouring `i`, `m` and `y` (sticky: match at the start only).
    /// A repeated flag is a syntax error.
    pub fn compile(&self, size_limit: usize) -> Result<Regex, regex::Error> {
        let repeated = self.repeated_flags();
        if !repeated.is_empty() {
            return Err(regex::Error::Syntax(format!(
                "repeated flag(s) {:?} in '/{}/{}'",
                repeated, self.pattern, self.flags
            )));
        }

        let pattern = if self.has_flag('y') {
            format!(r"\A(?:{})", self.pattern)
        } else {
            self.pattern.clone()
        };

        RegexBuilder::new(&pattern)
            .case_insensitive(self.has_flag('i'))
            .multi_line(self.has_flag('m'))
            .size_limit(size_limit)
            .build()
    }
}

/// Split a target into pattern and flags.
///
/// `/abc/i` yields (`abc`, `i`); anything not in that shape is taken whole as
/// the pattern with no flags.
pub fn parse_regex_literal(target: &str) -> RegexLiteral {
    match LITERAL.captures(target) {
        Some(caps) => RegexLiteral {
            pattern: caps[1].to_string(),
            flags: caps[2].to_string(),
        },
        None => RegexLiteral {
            pattern: target.to_string(),
            flags: String::new(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LIMIT: usize = 1 << 20;

    #[test]
    fn test_parse_literal_with_flags() {
        let lit = parse_regex_literal("/^[0-9]+$/i");
        assert_eq!(lit.pattern, "^[0-9]+$");
        assert_eq!(lit.flags, "i");
    }

    #[test]
    fn test_parse_plain_pattern() {
        let lit = parse_regex_literal("^abc$");
        assert_eq!(lit.pattern, "^abc$");
        assert!(lit.flags.is_empty());
    }

    #[test]
    fn test_parse_unknown_flag_is_plain() {
        let lit = parse_regex_literal("/abc/x");
        assert_eq!(lit.pattern, "/abc/x");
        assert!(lit.flags.is_empty());
    }

    #[test]
    fn test_parse_slashes_inside_pattern() {
        let lit = parse_regex_literal("/a/b/gm");
        assert_eq!(lit.pattern, "a/b");
        assert_eq!(lit.flags, "gm");
    }

    #[test]
    fn test_parse_empty_literal_is_plain() {
        // "//" has no pattern between the slashes
        let lit = parse_regex_literal("//");
        assert_eq!(lit.pattern, "//");
    }

    #[test]
    fn test_compile_case_insensitive() {
        let re = parse_regex_literal("/hello/i").compile(LIMIT).unwrap();
        assert!(re.is_match("Say HELLO"));

        let re = parse_regex_literal("/hello/").compile(LIMIT).unwrap();
        assert!(!re.is_match("Say HELLO"));
    }

    #[test]
    fn test_compile_multi_line() {
        let re = parse_regex_literal("/^b$/m").compile(LIMIT).unwrap();
        assert!(re.is_match("a\nb\nc"));

        let re = parse_regex_literal("/^b$/").compile(LIMIT).unwrap();
        assert!(!re.is_match("a\nb\nc"));
    }

    #[test]
    fn test_compile_sticky_anchors_at_start() {
        let re = parse_regex_literal("/b/y").compile(LIMIT).unwrap();
        assert!(re.is_match("bc"));
        assert!(!re.is_match("abc"));
    }

    #[test]
    fn test_repeated_flags_are_rejected() {
        let lit = parse_regex_literal("/a/ii");
        assert_eq!(lit.flags, "ii");
        assert_eq!(lit.repeated_flags(), vec!['i']);
        assert!(matches!(lit.compile(LIMIT), Err(regex::Error::Syntax(_))));

        let lit = parse_regex_literal("/a/gimuy");
        assert!(lit.repeated_flags().is_empty());
        assert!(lit.compile(LIMIT).is_ok());
    }

    #[test]
    fn test_compile_invalid() {
        assert!(parse_regex_literal("/([a-z/").compile(LIMIT).is_err());
        assert!(parse_regex_literal("(unclosed").compile(LIMIT).is_err());
    }
}
