use crate::error::{MailAssertError, Result};
use regex::Regex;
use std::fmt;

const DELIMITERS: &[char] = &['/', '#', '~', '!', '@', '%', '|'];

/// A subject matcher. Matching is a search: the pattern may hit anywhere in
/// the subject.
///
/// Both plain regular expressions (`Order #\d+`) and delimited patterns with
/// trailing flags (`/order #\d+/i`) are accepted.
#[derive(Debug, Clone)]
pub struct SubjectPattern {
    source: String,
    regex: Regex,
}

impl SubjectPattern {
    /// Compiles `source`.
    ///
    /// A source that starts with one of `/ # ~ ! @ % |` and repeats that
    /// character later, followed only by letters, is always read as a
    /// delimited pattern: `/status/ok` is rejected for the unknown flag `o`
    /// rather than taken as a plain regex. Bracket delimiters such as
    /// `{Order}` are not recognised and go to the regex engine as written.
    pub fn new(source: &str) -> Result<Self> {
        let expression = match split_delimited(source) {
            Some((body, flags)) => with_inline_flags(source, body, flags)?,
            None => source.to_string(),
        };

        let regex = Regex::new(&expression).map_err(|e| MailAssertError::Pattern {
            pattern: source.to_string(),
            reason: e.to_string(),
        })?;

        Ok(Self {
            source: source.to_string(),
            regex,
        })
    }

    pub fn is_match(&self, subject: &str) -> bool {
        self.regex.is_match(subject)
    }
}

impl fmt::Display for SubjectPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

// "/body/flags" -> ("body", "flags"), only when the closing delimiter is
// followed by nothing but ASCII letters.
fn split_delimited(source: &str) -> Option<(&str, &str)> {
    let delimiter = source.chars().next().filter(|c| DELIMITERS.contains(c))?;
    let rest = &source[delimiter.len_utf8()..];
    let close = rest.rfind(delimiter)?;
    let flags = &rest[close + delimiter.len_utf8()..];

    if flags.chars().all(|c| c.is_ascii_alphabetic()) {
        Some((&rest[..close], flags))
    } else {
        None
    }
}

fn with_inline_flags(source: &str, body: &str, flags: &str) -> Result<String> {
    let mut inline = String::new();
    for flag in flags.chars() {
        match flag {
            'i' | 'm' | 's' | 'x' | 'U' => inline.push(flag),
            // unicode is always on; `$` handling is left to the engine
            'u' | 'D' => {}
            other => {
                return Err(MailAssertError::Pattern {
                    pattern: source.to_string(),
                    reason: format!("unsupported flag '{other}'"),
                });
            }
        }
    }

    if inline.is_empty() {
        Ok(body.to_string())
    } else {
        Ok(format!("(?{inline}){body}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_delimited_pattern_matches_substring() {
        let pattern = SubjectPattern::new(r"/Order #\d+/").unwrap();
        assert!(pattern.is_match("Order #123 confirmed"));
        assert!(pattern.is_match("Re: Order #9"));
        assert!(!pattern.is_match("Order #abc"));
    }

    #[test]
    fn test_plain_regex_is_unanchored() {
        let pattern = SubjectPattern::new(r"confirmed").unwrap();
        assert!(pattern.is_match("Order #123 confirmed"));
    }

    #[test]
    fn test_case_insensitive_flag() {
        let pattern = SubjectPattern::new("/welcome/i").unwrap();
        assert!(pattern.is_match("WELCOME aboard"));

        let strict = SubjectPattern::new("/welcome/").unwrap();
        assert!(!strict.is_match("WELCOME aboard"));
    }

    #[test]
    fn test_alternative_delimiter() {
        let pattern = SubjectPattern::new("#a/b#").unwrap();
        assert!(pattern.is_match("path a/b here"));
    }

    #[test]
    fn test_unicode_flag_is_accepted() {
        let pattern = SubjectPattern::new("/caf./u").unwrap();
        assert!(pattern.is_match("café ouvert"));
    }

    #[test]
    fn test_unknown_flag_is_rejected() {
        let err = SubjectPattern::new("/order/e").unwrap_err();
        assert!(matches!(err, MailAssertError::Pattern { .. }));
        assert!(err.to_string().contains("unsupported flag 'e'"));
    }

    #[test]
    fn test_invalid_regex_is_rejected() {
        let err = SubjectPattern::new("/Order (/").unwrap_err();
        assert!(matches!(err, MailAssertError::Pattern { .. }));
        assert!(err.to_string().contains("/Order (/"));
    }

    #[test]
    fn test_unterminated_delimiter_is_plain_regex() {
        // no closing '/', so the leading slash is part of the expression
        let pattern = SubjectPattern::new("/tmp").unwrap();
        assert!(pattern.is_match("see /tmp/file"));
    }

    #[test]
    fn test_display_keeps_source() {
        let pattern = SubjectPattern::new(r"/Order #\d+/").unwrap();
        assert_eq!(pattern.to_string(), r"/Order #\d+/");
    }

    #[test]
    fn test_multi_line_flag() {
        let subject = "Re: status\nOrder shipped";
        assert!(SubjectPattern::new("/^Order/m").unwrap().is_match(subject));
        assert!(!SubjectPattern::new("/^Order/").unwrap().is_match(subject));
    }

    #[test]
    fn test_dot_all_flag() {
        let subject = "Order\nshipped";
        assert!(SubjectPattern::new("/Order.shipped/s").unwrap().is_match(subject));
        assert!(!SubjectPattern::new("/Order.shipped/").unwrap().is_match(subject));
    }

    #[test]
    fn test_extended_flag() {
        let extended = SubjectPattern::new(r"/Order \d+/x").unwrap();
        assert!(extended.is_match("Order123"));
        assert!(!extended.is_match("Order 123"));

        let plain = SubjectPattern::new(r"/Order \d+/").unwrap();
        assert!(plain.is_match("Order 123"));
        assert!(!plain.is_match("Order123"));
    }

    #[test]
    fn test_ungreedy_flag() {
        let lazy = SubjectPattern::new("/a+/U").unwrap();
        assert_eq!(lazy.regex.find("aaa").unwrap().as_str(), "a");

        let greedy = SubjectPattern::new("/a+/").unwrap();
        assert_eq!(greedy.regex.find("aaa").unwrap().as_str(), "aaa");
    }

    #[test]
    fn test_dollar_end_only_flag_is_accepted() {
        let pattern = SubjectPattern::new("/shipped$/D").unwrap();
        assert!(pattern.is_match("Order shipped"));
        assert!(!pattern.is_match("shipped today"));
    }

    #[test]
    fn test_trailing_text_after_delimiter_is_read_as_flags() {
        let err = SubjectPattern::new("/status/ok").unwrap_err();
        assert!(err.to_string().contains("unsupported flag 'o'"));

        // without the leading delimiter it is a plain regex
        let pattern = SubjectPattern::new("status/ok").unwrap();
        assert!(pattern.is_match("build status/ok"));
    }
}
