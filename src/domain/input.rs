//! Pure parsing for line-oriented answers.
//!
//! The interactive retry loops live in `app::prompts`; everything here is a
//! plain function of the typed text so it can be tested without a terminal.

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;
use url::Url;

/// Why a line could not be accepted. Always recoverable by asking again.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("This cannot be empty")]
    Empty,
    #[error("Please enter a number")]
    NotANumber,
    #[error("Port must be between 1 and 65535")]
    PortOutOfRange,
}

/// Constraints applied to a free-text answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct InputRules {
    /// Accept a blank line.
    pub allow_empty: bool,
    /// Keep only the first whitespace-delimited word.
    pub single_worded: bool,
}

impl InputRules {
    pub const REQUIRED: InputRules = InputRules { allow_empty: false, single_worded: false };
    pub const OPTIONAL_WORD: InputRules = InputRules { allow_empty: true, single_worded: true };
    pub const REQUIRED_WORD: InputRules = InputRules { allow_empty: false, single_worded: true };
}

/// Outcome of applying [`InputRules`] to one line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Accepted {
    pub value: String,
    /// More than one word was typed and only the first was kept.
    pub truncated: bool,
}

/// Apply `rules` to a raw line (without its line terminator).
pub fn require_non_empty(raw: &str, rules: InputRules) -> Result<Accepted, InputError> {
    if rules.single_worded {
        let mut words = raw.split_whitespace();
        return match words.next() {
            Some(first) => {
                Ok(Accepted { value: first.to_string(), truncated: words.next().is_some() })
            }
            None if rules.allow_empty => Ok(Accepted { value: String::new(), truncated: false }),
            None => Err(InputError::Empty),
        };
    }

    if raw.trim().is_empty() && !rules.allow_empty {
        return Err(InputError::Empty);
    }
    Ok(Accepted { value: raw.to_string(), truncated: false })
}

/// Blank means `default`; otherwise yes only when the first character is `y` or `Y`.
pub fn parse_yes_no(raw: &str, default: bool) -> bool {
    match raw.trim().chars().next() {
        None => default,
        Some(first) => first.eq_ignore_ascii_case(&'y'),
    }
}

pub fn parse_integer(raw: &str) -> Result<i64, InputError> {
    let word = raw.split_whitespace().next().ok_or(InputError::NotANumber)?;
    word.parse::<i64>().map_err(|_| InputError::NotANumber)
}

pub fn parse_port(raw: &str) -> Result<u16, InputError> {
    let number = parse_integer(raw)?;
    u16::try_from(number).ok().filter(|port| *port > 0).ok_or(InputError::PortOutOfRange)
}

/// Whether `raw` parses as an absolute `http`/`https` URL.
///
/// nginx variables such as `$request_uri` are allowed inside the URL.
pub fn looks_like_http_url(raw: &str) -> bool {
    Url::parse(raw).is_ok_and(|url| matches!(url.scheme(), "http" | "https") && url.has_host())
}

/// What a typed root path refers to on this machine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathCheck {
    /// An existing directory, made absolute.
    Directory(PathBuf),
    /// Exists but is a file or something else.
    NotADirectory,
    /// Nothing at that path yet.
    Missing,
}

pub fn inspect_path(raw: &str) -> PathCheck {
    let path = Path::new(raw);
    match fs::metadata(path) {
        Ok(meta) if meta.is_dir() => {
            let absolute = std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf());
            PathCheck::Directory(absolute)
        }
        Ok(_) => PathCheck::NotADirectory,
        Err(_) => PathCheck::Missing,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn required_rejects_blank() {
        assert_eq!(require_non_empty("", InputRules::REQUIRED), Err(InputError::Empty));
        assert_eq!(require_non_empty("   ", InputRules::REQUIRED_WORD), Err(InputError::Empty));
    }

    #[test]
    fn optional_accepts_blank() {
        let accepted = require_non_empty("", InputRules::OPTIONAL_WORD).unwrap();
        assert_eq!(accepted.value, "");
        assert!(!accepted.truncated);
    }

    #[test]
    fn single_word_keeps_first_token() {
        let accepted = require_non_empty("  alpha beta ", InputRules::REQUIRED_WORD).unwrap();
        assert_eq!(accepted.value, "alpha");
        assert!(accepted.truncated);
    }

    #[test]
    fn free_text_keeps_inner_spaces() {
        let accepted = require_non_empty("a.com  b.com", InputRules::REQUIRED).unwrap();
        assert_eq!(accepted.value, "a.com  b.com");
    }

    #[test]
    fn free_text_is_returned_verbatim() {
        let accepted = require_non_empty(" /srv/www/site ", InputRules::REQUIRED).unwrap();
        assert_eq!(accepted.value, " /srv/www/site ");
        assert!(!accepted.truncated);
    }

    #[test]
    fn yes_no_uses_first_character() {
        assert!(parse_yes_no("", true));
        assert!(!parse_yes_no("", false));
        assert!(parse_yes_no("Yes", false));
        assert!(parse_yes_no("yikes", false));
        assert!(!parse_yes_no("no", true));
        assert!(!parse_yes_no("ok", true));
    }

    #[test]
    fn port_bounds() {
        assert_eq!(parse_port("443"), Ok(443));
        assert_eq!(parse_port("0"), Err(InputError::PortOutOfRange));
        assert_eq!(parse_port("70000"), Err(InputError::PortOutOfRange));
        assert_eq!(parse_port("-1"), Err(InputError::PortOutOfRange));
        assert_eq!(parse_port("http"), Err(InputError::NotANumber));
    }

    #[test]
    fn http_urls_are_recognised() {
        assert!(looks_like_http_url("http://127.0.0.1:8000"));
        assert!(looks_like_http_url("https://blog.sidsun.com"));
        assert!(looks_like_http_url("http://blog.sidsun.com$request_uri"));
        assert!(!looks_like_http_url("127.0.0.1:8000"));
        assert!(!looks_like_http_url("ftp://files.example.com"));
    }

    #[test]
    fn inspect_path_distinguishes_three_cases() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("index.html");
        fs::write(&file, "hi").unwrap();

        assert!(matches!(
            inspect_path(dir.path().to_str().unwrap()),
            PathCheck::Directory(path) if path.is_absolute()
        ));
        assert_eq!(inspect_path(file.to_str().unwrap()), PathCheck::NotADirectory);
        assert_eq!(
            inspect_path(dir.path().join("missing").to_str().unwrap()),
            PathCheck::Missing
        );
    }

    proptest! {
        #[test]
        fn integers_parse_back(n in any::<i64>()) {
            prop_assert_eq!(parse_integer(&n.to_string()), Ok(n));
        }

        #[test]
        fn yes_no_ignores_case_of_y(rest in "[a-z]{0,8}") {
            let upper = format!("Y{rest}");
            let lower = format!("y{rest}");
            prop_assert!(parse_yes_no(&upper, false));
            prop_assert!(parse_yes_no(&lower, false));
        }
    }
}
