//! # Casing Forms
//!
//! The five naming conventions this crate understands, and the word-level
//! primitives everything else is built from.
//!
//! Every form is defined over the same underlying structure, an ordered
//! sequence of lowercase ASCII words, and differs only in how those words are
//! written back out:
//!
//! | form   | join rule                                            | example            |
//! |--------|------------------------------------------------------|--------------------|
//! | camel  | first word lowercase, rest capitalized, concatenated | thisIsAnExample    |
//! | pascal | every word capitalized, concatenated                 | ThisIsAnExample    |
//! | snake  | lowercase, joined with `_`                           | this_is_an_example |
//! | kebab  | lowercase, joined with `-`                           | this-is-an-example |
//! | global | uppercase, joined with `_`                           | THIS_IS_AN_EXAMPLE |
//!
//! [`CasingForm::split_words`] and [`CasingForm::join_words`] are exact
//! inverses over well-formed input: splitting a string of form F and joining
//! the words back under F reproduces the string, and joining any nonempty
//! sequence of nonempty lowercase words under F then splitting recovers the
//! sequence. The word sequence only ever exists as an intermediate value
//! inside a single call; it is never stored.

use std::{fmt::Display, str::FromStr};

/// A naming convention for identifier-like strings.
///
/// Inputs are assumed to be ASCII alphabetic words only; digits, acronym runs
/// like `HTTPServer` and non-ASCII letters are out of scope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum CasingForm {
    Camel,
    Pascal,
    Snake,
    Kebab,
    Global,
}

impl CasingForm {
    /// Whether `s` is well-formed under this convention.
    ///
    /// Note that short inputs can satisfy several forms at once: `"foo"`
    /// matches snake, camel *and* kebab. [`infer_casing`] resolves that
    /// ambiguity with a fixed priority order; this predicate does not.
    ///
    /// An all-uppercase single word such as `"FOO"` is global, not pascal:
    /// pascal requires at least one lowercase letter.
    ///
    /// [`infer_casing`]: crate::infer::infer_casing
    pub fn matches(self, s: &str) -> bool {
        match self {
            Self::Snake => separated_runs(s, '_', |c| c.is_ascii_lowercase()),
            Self::Kebab => separated_runs(s, '-', |c| c.is_ascii_lowercase()),
            Self::Global => separated_runs(s, '_', |c| c.is_ascii_uppercase()),
            Self::Pascal => {
                s.starts_with(|c: char| c.is_ascii_uppercase())
                    && s.chars().all(|c| c.is_ascii_alphabetic())
                    && s.contains(|c: char| c.is_ascii_lowercase())
            }
            Self::Camel => {
                s.starts_with(|c: char| c.is_ascii_lowercase())
                    && s.chars().all(|c| c.is_ascii_alphabetic())
            }
        }
    }

    /// Split a string assumed to be in this form into its lowercase words.
    ///
    /// No validation is performed; a string that is not actually in this form
    /// still splits deterministically, just not meaningfully.
    pub fn split_words(self, s: &str) -> Vec<String> {
        match self {
            Self::Snake => s.split('_').map(str::to_owned).collect(),
            Self::Kebab => s.split('-').map(str::to_owned).collect(),
            Self::Global => s.split('_').map(|run| run.to_ascii_lowercase()).collect(),
            Self::Camel | Self::Pascal => {
                let mut words = vec![];
                let mut word = String::new();
                for c in s.chars() {
                    if c.is_ascii_uppercase() {
                        // uppercase starts a new word; camel's leading
                        // lowercase run is flushed here as the first word
                        if !word.is_empty() {
                            words.push(word);
                            word = String::new();
                        }
                        word.push(c.to_ascii_lowercase());
                    } else {
                        word.push(c);
                    }
                }
                if !word.is_empty() {
                    words.push(word);
                }
                words
            }
        }
    }

    /// Join a sequence of lowercase words under this form.
    pub fn join_words(self, words: &[String]) -> String {
        match self {
            Self::Snake => words.join("_"),
            Self::Kebab => words.join("-"),
            Self::Global => words
                .iter()
                .map(|word| word.to_ascii_uppercase())
                .collect::<Vec<String>>()
                .join("_"),
            Self::Pascal => words.iter().map(|word| capitalize(word)).collect(),
            Self::Camel => {
                let mut words = words.iter();
                let mut joined = String::new();
                if let Some(first) = words.next() {
                    joined.push_str(first);
                }
                for word in words {
                    joined.push_str(&capitalize(word));
                }
                joined
            }
        }
    }

    /// The lowercase tag this form parses from and displays as.
    pub fn tag(self) -> &'static str {
        match self {
            Self::Camel => "camel",
            Self::Pascal => "pascal",
            Self::Snake => "snake",
            Self::Kebab => "kebab",
            Self::Global => "global",
        }
    }
}

/// `s` is one or more nonempty runs of characters accepted by `run_char`,
/// separated by single `sep` characters.
fn separated_runs(s: &str, sep: char, run_char: impl Fn(char) -> bool) -> bool {
    !s.is_empty() && s.split(sep).all(|run| !run.is_empty() && run.chars().all(&run_char))
}

/// Uppercase the first character of a word. Empty words stay empty instead of
/// panicking on a missing first character.
fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => {
            let rest: String = chars.collect();
            format!("{}{}", first.to_ascii_uppercase(), rest)
        }
        None => String::new(),
    }
}

impl Display for CasingForm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.tag())
    }
}

/// Error returned when parsing a [`CasingForm`] from a string tag.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown casing form {0:?}, expected one of: camel, pascal, snake, kebab, global")]
pub struct ParseCasingFormError(pub String);

impl FromStr for CasingForm {
    type Err = ParseCasingFormError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "camel" => Ok(Self::Camel),
            "pascal" => Ok(Self::Pascal),
            "snake" => Ok(Self::Snake),
            "kebab" => Ok(Self::Kebab),
            "global" => Ok(Self::Global),
            _ => Err(ParseCasingFormError(s.to_owned())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn words(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn split_multi_word() {
        let expected = words(&["this", "is", "an", "example"]);
        assert_eq!(CasingForm::Camel.split_words("thisIsAnExample"), expected);
        assert_eq!(CasingForm::Pascal.split_words("ThisIsAnExample"), expected);
        assert_eq!(CasingForm::Snake.split_words("this_is_an_example"), expected);
        assert_eq!(CasingForm::Kebab.split_words("this-is-an-example"), expected);
        assert_eq!(CasingForm::Global.split_words("THIS_IS_AN_EXAMPLE"), expected);
    }

    #[test]
    fn join_multi_word() {
        let w = words(&["this", "is", "an", "example"]);
        assert_eq!(CasingForm::Camel.join_words(&w), "thisIsAnExample");
        assert_eq!(CasingForm::Pascal.join_words(&w), "ThisIsAnExample");
        assert_eq!(CasingForm::Snake.join_words(&w), "this_is_an_example");
        assert_eq!(CasingForm::Kebab.join_words(&w), "this-is-an-example");
        assert_eq!(CasingForm::Global.join_words(&w), "THIS_IS_AN_EXAMPLE");
    }

    #[test]
    fn split_single_word() {
        assert_eq!(CasingForm::Camel.split_words("foo"), words(&["foo"]));
        assert_eq!(CasingForm::Pascal.split_words("Foo"), words(&["foo"]));
        assert_eq!(CasingForm::Global.split_words("FOO"), words(&["foo"]));
    }

    #[test]
    fn join_single_word() {
        let w = words(&["foo"]);
        assert_eq!(CasingForm::Camel.join_words(&w), "foo");
        assert_eq!(CasingForm::Pascal.join_words(&w), "Foo");
        assert_eq!(CasingForm::Global.join_words(&w), "FOO");
    }

    #[test]
    fn join_guards_empty_words() {
        let w = words(&["", "foo", ""]);
        assert_eq!(CasingForm::Pascal.join_words(&w), "Foo");
        assert_eq!(CasingForm::Camel.join_words(&w), "Foo");
        assert_eq!(CasingForm::Pascal.join_words(&[]), "");
    }

    #[test]
    fn matches_ambiguous_single_word() {
        assert!(CasingForm::Snake.matches("foo"));
        assert!(CasingForm::Camel.matches("foo"));
        assert!(CasingForm::Kebab.matches("foo"));
        assert!(!CasingForm::Pascal.matches("foo"));
        assert!(!CasingForm::Global.matches("foo"));
    }

    #[test]
    fn matches_all_uppercase_is_global_not_pascal() {
        assert!(CasingForm::Global.matches("FOO"));
        assert!(!CasingForm::Pascal.matches("FOO"));
        assert!(CasingForm::Pascal.matches("Foo"));
    }

    #[test]
    fn matches_rejects_malformed() {
        for form in [
            CasingForm::Camel,
            CasingForm::Pascal,
            CasingForm::Snake,
            CasingForm::Kebab,
            CasingForm::Global,
        ] {
            assert!(!form.matches(""), "{form} matched empty string");
            assert!(!form.matches("th1s_is_bad"), "{form} matched digits");
            assert!(!form.matches("this_Is-Mixed"), "{form} matched mixed separators");
            assert!(!form.matches("double__underscore"), "{form} matched empty run");
        }
    }

    #[test]
    fn tag_round_trip() {
        for form in [
            CasingForm::Camel,
            CasingForm::Pascal,
            CasingForm::Snake,
            CasingForm::Kebab,
            CasingForm::Global,
        ] {
            assert_eq!(form.to_string().parse::<CasingForm>(), Ok(form));
        }
        assert_eq!(
            "screaming".parse::<CasingForm>(),
            Err(ParseCasingFormError("screaming".into()))
        );
    }
}
