//! String predicates
//!
//! Lengths are counted in `char`s, never bytes, so multi-byte input behaves the
//! same as ASCII. Case-insensitive comparisons use Unicode lower-casing.
//!
//! The substring rules ([`contains`], [`starts_with`], [`ends_with`],
//! [`in_haystack`]) take an `identical` flag. The loose, case-insensitive match
//! is always required; `identical = true` additionally requires the exact,
//! case-sensitive match.

use std::borrow::Cow;

use encoding_rs::Encoding;
use once_cell::sync::Lazy;
use regex::Regex;
use url::Url;

use super::combinators::Predicate;
use crate::error::AssertionError;

static ALPHANUMERIC: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)^[a-z0-9]+$").unwrap());
static ALPHA: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)^[a-z]+$").unwrap());
static ALL_CONSONANTS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\s|[b-df-hj-np-tv-zB-DF-HJ-NP-TV-Z])+$").unwrap());
static VOWELS: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(\s|[aeiouAEIOU])*$").unwrap());
static SLUG: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9a-z-]+$").unwrap());
static VERSION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[0-9]+\.[0-9]+(\.[0-9]*)?([+-][^+-][0-9A-Za-z.-]*)?$").unwrap()
});
static EMAIL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^[A-Z0-9._%+\-]+@(?:[A-Z0-9\-]+\.)+[A-Z0-9\-]+$").unwrap()
});
static UUID_STRICT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^[0-9a-f]{8}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{12}$").unwrap()
});
static UUID_LOOSE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^[0-9a-f]{4}(?:-?[0-9a-f]{4}){7}$").unwrap());

#[inline]
fn fold(value: &str) -> String {
    value.to_lowercase()
}

#[inline]
fn char_len(value: &str) -> usize {
    value.chars().count()
}

/// Declares a unit predicate backed by one of the compiled patterns above.
macro_rules! regex_predicate {
    ($(#[$meta:meta])* $name:ident, $ctor:ident, $pattern:ident) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Default, Debug)]
        pub struct $name;

        impl Predicate<str> for $name {
            #[inline]
            fn check(&self, value: &str) -> bool {
                $pattern.is_match(value)
            }
        }

        #[doc = concat!("Create a [`", stringify!($name), "`] predicate.")]
        pub fn $ctor() -> $name {
            $name
        }
    };
}

regex_predicate!(
    /// Only ASCII letters and digits, at least one.
    IsAlphanumeric,
    is_alphanumeric,
    ALPHANUMERIC
);
regex_predicate!(
    /// Only ASCII letters, at least one.
    IsAlpha,
    is_alpha,
    ALPHA
);
regex_predicate!(
    /// Only consonants and whitespace, at least one character.
    IsAllConsonants,
    is_all_consonants,
    ALL_CONSONANTS
);
regex_predicate!(
    /// Only vowels and whitespace. The empty string passes.
    IsVowel,
    is_vowel,
    VOWELS
);
regex_predicate!(
    /// `MAJOR.MINOR[.PATCH][+-PRERELEASE]`.
    ///
    /// ```rust
    /// use touchstone::predicate::*;
    ///
    /// assert!(is_version().check("1.0"));
    /// assert!(is_version().check("2.10.3-beta.1"));
    /// assert!(!is_version().check("1"));
    /// assert!(!is_version().check("v1.0.0"));
    /// ```
    IsVersion,
    is_version,
    VERSION
);
regex_predicate!(
    /// `local@domain.tld`, ASCII only, case-insensitive.
    IsEmail,
    is_email,
    EMAIL
);

/// Character length in a range.
#[derive(Clone, Copy, Debug)]
pub struct LenBetween {
    min: usize,
    max: usize,
    inclusive: bool,
}

impl LenBetween {
    /// Lower bound.
    pub fn min(&self) -> usize {
        self.min
    }

    /// Upper bound.
    pub fn max(&self) -> usize {
        self.max
    }
}

impl Predicate<str> for LenBetween {
    #[inline]
    fn check(&self, value: &str) -> bool {
        let len = char_len(value);
        if self.inclusive {
            self.min <= len && len <= self.max
        } else {
            self.min < len && len < self.max
        }
    }
}

/// Create a predicate on the character length of a string.
///
/// Exclusive bounds use `min < len < max`, inclusive bounds `min <= len <= max`.
///
/// # Example
///
/// ```rust
/// use touchstone::predicate::*;
///
/// assert!(len_between(2, 5, true).check("ñandú"));
/// assert!(!len_between(2, 5, false).check("ñandú"));
/// ```
pub fn len_between(min: usize, max: usize, inclusive: bool) -> LenBetween {
    LenBetween {
        min,
        max,
        inclusive,
    }
}

/// Exact character length.
#[derive(Clone, Copy, Debug)]
pub struct HasLength(pub usize);

impl Predicate<str> for HasLength {
    #[inline]
    fn check(&self, value: &str) -> bool {
        char_len(value) == self.0
    }
}

/// Create a predicate that checks the string is exactly `len` characters.
///
/// # Example
///
/// ```rust
/// use touchstone::predicate::*;
///
/// assert!(has_length(4).check("día!"));
/// assert!(!has_length(5).check("día!"));
/// ```
pub fn has_length(len: usize) -> HasLength {
    HasLength(len)
}

/// Substring anywhere in the value.
#[derive(Clone, Debug)]
pub struct Contains<S> {
    needle: S,
    identical: bool,
}

impl<S: AsRef<str> + Send + Sync> Predicate<str> for Contains<S> {
    fn check(&self, value: &str) -> bool {
        let needle = self.needle.as_ref();
        let loose = fold(value).contains(&fold(needle));
        loose && (!self.identical || value.contains(needle))
    }
}

/// Create a predicate that checks the value contains `needle`.
///
/// # Example
///
/// ```rust
/// use touchstone::predicate::*;
///
/// assert!(contains("WORLD", false).check("hello world"));
/// assert!(!contains("WORLD", true).check("hello world"));
/// assert!(contains("world", true).check("hello world"));
/// ```
pub fn contains<S: AsRef<str> + Send + Sync>(needle: S, identical: bool) -> Contains<S> {
    Contains { needle, identical }
}

/// Value begins with a prefix.
#[derive(Clone, Debug)]
pub struct StartsWith<S> {
    prefix: S,
    identical: bool,
}

impl<S: AsRef<str> + Send + Sync> Predicate<str> for StartsWith<S> {
    fn check(&self, value: &str) -> bool {
        let prefix = self.prefix.as_ref();
        let loose = fold(value).starts_with(&fold(prefix));
        loose && (!self.identical || value.starts_with(prefix))
    }
}

/// Create a predicate that checks the value starts with `prefix`.
pub fn starts_with<S: AsRef<str> + Send + Sync>(prefix: S, identical: bool) -> StartsWith<S> {
    StartsWith { prefix, identical }
}

/// Value ends with a suffix.
#[derive(Clone, Debug)]
pub struct EndsWith<S> {
    suffix: S,
    identical: bool,
}

impl<S: AsRef<str> + Send + Sync> Predicate<str> for EndsWith<S> {
    fn check(&self, value: &str) -> bool {
        let suffix = self.suffix.as_ref();
        let loose = fold(value).ends_with(&fold(suffix));
        loose && (!self.identical || value.ends_with(suffix))
    }
}

/// Create a predicate that checks the value ends with `suffix`.
pub fn ends_with<S: AsRef<str> + Send + Sync>(suffix: S, identical: bool) -> EndsWith<S> {
    EndsWith { suffix, identical }
}

/// Value occurs inside a haystack.
#[derive(Clone, Debug)]
pub struct InHaystack<S> {
    haystack: S,
    identical: bool,
}

impl<S: AsRef<str> + Send + Sync> Predicate<str> for InHaystack<S> {
    fn check(&self, value: &str) -> bool {
        let haystack = self.haystack.as_ref();
        let loose = fold(haystack).contains(&fold(value));
        loose && (!self.identical || haystack.contains(value))
    }
}

/// Create a predicate that checks the value can be found inside `haystack`.
///
/// # Example
///
/// ```rust
/// use touchstone::predicate::*;
///
/// let sizes = in_haystack("small,medium,large", false);
/// assert!(sizes.check("Medium"));
/// assert!(!sizes.check("huge"));
/// ```
pub fn in_haystack<S: AsRef<str> + Send + Sync>(haystack: S, identical: bool) -> InHaystack<S> {
    InHaystack {
        haystack,
        identical,
    }
}

/// Value equals another string.
#[derive(Clone, Debug)]
pub struct Equals<S> {
    other: S,
    identical: bool,
}

impl<S: AsRef<str> + Send + Sync> Predicate<str> for Equals<S> {
    fn check(&self, value: &str) -> bool {
        let other = self.other.as_ref();
        if value == other {
            return true;
        }
        if self.identical {
            return false;
        }
        match (numeric(value), numeric(other)) {
            (Some(a), Some(b)) => a == b,
            _ => false,
        }
    }
}

// `f64` also parses "inf" and "NaN", which are not numbers here
fn numeric(value: &str) -> Option<f64> {
    value.trim().parse::<f64>().ok().filter(|n| n.is_finite())
}

/// Create a predicate that checks equality with `other`.
///
/// In loose mode two numeric strings are equal when their values are.
///
/// # Example
///
/// ```rust
/// use touchstone::predicate::*;
///
/// assert!(equals("10", false).check("1e1"));
/// assert!(!equals("10", true).check("1e1"));
/// assert!(equals("abc", true).check("abc"));
/// ```
pub fn equals<S: AsRef<str> + Send + Sync>(other: S, identical: bool) -> Equals<S> {
    Equals { other, identical }
}

/// ASCII character classes for the "only characters of class X" rules.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CharClass {
    /// Control characters.
    Control,
    /// `0-9`.
    Digit,
    /// Visible characters, no space.
    Graphical,
    /// Visible characters and space.
    Printable,
    /// Punctuation.
    Punctuation,
    /// Space, tab, newline, carriage return, vertical tab, form feed.
    Space,
    /// `0-9a-fA-F`.
    HexDigit,
}

impl CharClass {
    fn matches(self, c: char) -> bool {
        match self {
            CharClass::Control => c.is_ascii_control(),
            CharClass::Digit => c.is_ascii_digit(),
            CharClass::Graphical => c.is_ascii_graphic(),
            CharClass::Printable => c.is_ascii_graphic() || c == ' ',
            CharClass::Punctuation => c.is_ascii_punctuation(),
            CharClass::Space => matches!(c, ' ' | '\t' | '\n' | '\r' | '\x0b' | '\x0c'),
            CharClass::HexDigit => c.is_ascii_hexdigit(),
        }
    }
}

/// Every character belongs to one [`CharClass`]. The empty string fails.
#[derive(Clone, Copy, Debug)]
pub struct OnlyClass(pub CharClass);

impl Predicate<str> for OnlyClass {
    #[inline]
    fn check(&self, value: &str) -> bool {
        !value.is_empty() && value.chars().all(|c| self.0.matches(c))
    }
}

/// Only control characters.
pub fn is_control_characters() -> OnlyClass {
    OnlyClass(CharClass::Control)
}

/// Only ASCII digits.
///
/// ```rust
/// use touchstone::predicate::*;
///
/// assert!(is_digit().check("0123"));
/// assert!(!is_digit().check("-1"));
/// assert!(!is_digit().check(""));
/// ```
pub fn is_digit() -> OnlyClass {
    OnlyClass(CharClass::Digit)
}

/// Only visible characters.
pub fn has_graphical_chars_only() -> OnlyClass {
    OnlyClass(CharClass::Graphical)
}

/// Only visible characters and spaces.
pub fn has_printable_chars_only() -> OnlyClass {
    OnlyClass(CharClass::Printable)
}

/// Only punctuation.
pub fn is_punctuation() -> OnlyClass {
    OnlyClass(CharClass::Punctuation)
}

/// Only whitespace.
pub fn is_space() -> OnlyClass {
    OnlyClass(CharClass::Space)
}

/// Only hexadecimal digits.
pub fn is_hex_digit() -> OnlyClass {
    OnlyClass(CharClass::HexDigit)
}

/// Value is unchanged by lower-casing.
#[derive(Clone, Copy, Default, Debug)]
pub struct IsLowercase;

impl Predicate<str> for IsLowercase {
    #[inline]
    fn check(&self, value: &str) -> bool {
        value.to_lowercase() == value
    }
}

/// Create an [`IsLowercase`] predicate.
pub fn is_lowercase() -> IsLowercase {
    IsLowercase
}

/// Value is unchanged by upper-casing.
#[derive(Clone, Copy, Default, Debug)]
pub struct IsUppercase;

impl Predicate<str> for IsUppercase {
    #[inline]
    fn check(&self, value: &str) -> bool {
        value.to_uppercase() == value
    }
}

/// Create an [`IsUppercase`] predicate.
pub fn is_uppercase() -> IsUppercase {
    IsUppercase
}

/// Value has something other than whitespace.
#[derive(Clone, Copy, Default, Debug)]
pub struct NotEmpty;

impl Predicate<str> for NotEmpty {
    #[inline]
    fn check(&self, value: &str) -> bool {
        !value.trim().is_empty()
    }
}

/// Create a [`NotEmpty`] predicate.
///
/// ```rust
/// use touchstone::predicate::*;
///
/// assert!(not_empty().check(" a "));
/// assert!(!not_empty().check(" \t\n"));
/// ```
pub fn not_empty() -> NotEmpty {
    NotEmpty
}

/// Value contains no whitespace at all.
#[derive(Clone, Copy, Default, Debug)]
pub struct NoWhitespace;

impl Predicate<str> for NoWhitespace {
    #[inline]
    fn check(&self, value: &str) -> bool {
        !value.chars().any(char::is_whitespace)
    }
}

/// Create a [`NoWhitespace`] predicate.
pub fn no_whitespace() -> NoWhitespace {
    NoWhitespace
}

/// Value matches a caller-supplied regular expression.
#[derive(Clone, Debug)]
pub struct MatchesRegex(Regex);

impl MatchesRegex {
    /// Wrap an already compiled regex.
    pub fn new(regex: Regex) -> Self {
        MatchesRegex(regex)
    }
}

impl Predicate<str> for MatchesRegex {
    #[inline]
    fn check(&self, value: &str) -> bool {
        self.0.is_match(value)
    }
}

/// Compile `pattern` into a predicate.
///
/// A pattern that does not compile is a caller error, reported as
/// [`AssertionError::InvalidArgument`].
///
/// # Example
///
/// ```rust
/// use touchstone::predicate::*;
///
/// let zip = matches_regex(r"^\d{5}$").unwrap();
/// assert!(zip.check("08001"));
/// assert!(matches_regex("(").is_err());
/// ```
pub fn matches_regex(pattern: &str) -> Result<MatchesRegex, AssertionError> {
    Regex::new(pattern)
        .map(MatchesRegex)
        .map_err(|e| AssertionError::invalid_argument(format!("invalid pattern: {e}")))
}

/// Lower-case, hyphen separated identifier.
#[derive(Clone, Copy, Default, Debug)]
pub struct IsSlug;

impl Predicate<str> for IsSlug {
    fn check(&self, value: &str) -> bool {
        !value.contains("--")
            && SLUG.is_match(value)
            && !value.starts_with('-')
            && !value.ends_with('-')
    }
}

/// Create an [`IsSlug`] predicate.
///
/// ```rust
/// use touchstone::predicate::*;
///
/// assert!(is_slug().check("foo-bar-2"));
/// assert!(!is_slug().check("foo--bar"));
/// assert!(!is_slug().check("-foo"));
/// assert!(!is_slug().check("Foo"));
/// ```
pub fn is_slug() -> IsSlug {
    IsSlug
}

/// Absolute URL with an explicit path.
///
/// A protocol-relative value (`//host/path`) is read as `http://host/path`.
#[derive(Clone, Copy, Default, Debug)]
pub struct IsUrl;

impl Predicate<str> for IsUrl {
    fn check(&self, value: &str) -> bool {
        let candidate: Cow<'_, str> = if value.starts_with("//") {
            Cow::Owned(format!("http:{value}"))
        } else {
            Cow::Borrowed(value)
        };

        let Ok(url) = Url::parse(&candidate) else {
            return false;
        };
        if matches!(url.scheme(), "http" | "https")
            && url.host_str().is_none_or(str::is_empty)
        {
            return false;
        }
        has_explicit_path(&candidate)
    }
}

// `Url` normalises an empty path to "/", so look at the raw text instead.
fn has_explicit_path(raw: &str) -> bool {
    let Some((_, rest)) = raw.trim().split_once(':') else {
        return false;
    };
    match rest.strip_prefix("//") {
        Some(after_authority) => after_authority
            .find(['/', '?', '#'])
            .is_some_and(|idx| after_authority[idx..].starts_with('/')),
        None => !rest.is_empty() && !rest.starts_with(['?', '#']),
    }
}

/// Create an [`IsUrl`] predicate.
///
/// ```rust
/// use touchstone::predicate::*;
///
/// assert!(is_url().check("https://example.com/"));
/// assert!(is_url().check("//cdn.example.com/app.js"));
/// assert!(!is_url().check("https://example.com"));
/// assert!(!is_url().check("example.com/path"));
/// ```
pub fn is_url() -> IsUrl {
    IsUrl
}

/// RFC 4122 style UUID.
#[derive(Clone, Copy, Debug)]
pub struct IsUuid {
    strict: bool,
}

impl Predicate<str> for IsUuid {
    fn check(&self, value: &str) -> bool {
        if self.strict {
            UUID_STRICT.is_match(value)
        } else {
            let trimmed = value.trim_matches(|c| matches!(c, '[' | ']' | '{' | '}'));
            UUID_LOOSE.is_match(trimmed)
        }
    }
}

/// Create an [`IsUuid`] predicate.
///
/// Strict mode only accepts the hyphenated 8-4-4-4-12 form. Loose mode strips
/// surrounding brackets or braces and accepts hyphens between any group of
/// four hex digits, or none at all.
///
/// ```rust
/// use touchstone::predicate::*;
///
/// let id = "6ba7b810-9dad-11d1-80b4-00c04fd430c8";
/// assert!(is_uuid(true).check(id));
/// assert!(!is_uuid(true).check("{6ba7b810-9dad-11d1-80b4-00c04fd430c8}"));
/// assert!(is_uuid(false).check("{6ba7b810-9dad-11d1-80b4-00c04fd430c8}"));
/// assert!(is_uuid(false).check("6ba7b8109dad11d180b400c04fd430c8"));
/// ```
pub fn is_uuid(strict: bool) -> IsUuid {
    IsUuid { strict }
}

/// Character subsets counted by the `has_*` rules.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CharSubset {
    /// `a-z`.
    Lowercase,
    /// `A-Z`.
    Uppercase,
    /// `0-9`.
    Numeric,
    /// Anything that is neither an ASCII letter, a digit, nor whitespace.
    Special,
}

impl CharSubset {
    fn matches(self, c: char) -> bool {
        match self {
            CharSubset::Lowercase => c.is_ascii_lowercase(),
            CharSubset::Uppercase => c.is_ascii_uppercase(),
            CharSubset::Numeric => c.is_ascii_digit(),
            CharSubset::Special => !c.is_ascii_alphanumeric() && !c.is_whitespace(),
        }
    }
}

/// At least `amount` characters of a [`CharSubset`], whitespace ignored.
#[derive(Clone, Copy, Debug)]
pub struct HasAtLeast {
    subset: CharSubset,
    amount: usize,
}

impl HasAtLeast {
    /// The threshold actually applied. Zero is treated as one.
    pub fn amount(&self) -> usize {
        self.amount.max(1)
    }
}

impl Predicate<str> for HasAtLeast {
    fn check(&self, value: &str) -> bool {
        let needed = self.amount();
        value
            .chars()
            .filter(|c| !c.is_whitespace())
            .filter(|&c| self.subset.matches(c))
            .take(needed)
            .count()
            == needed
    }
}

/// Create a [`HasAtLeast`] predicate for an arbitrary subset.
pub fn has_at_least(subset: CharSubset, amount: usize) -> HasAtLeast {
    HasAtLeast { subset, amount }
}

/// At least `amount` lower-case letters.
///
/// ```rust
/// use touchstone::predicate::*;
///
/// assert!(has_lowercase(2).check("aBc"));
/// assert!(!has_lowercase(2).check("ABc"));
/// ```
pub fn has_lowercase(amount: usize) -> HasAtLeast {
    has_at_least(CharSubset::Lowercase, amount)
}

/// At least `amount` upper-case letters.
pub fn has_uppercase(amount: usize) -> HasAtLeast {
    has_at_least(CharSubset::Uppercase, amount)
}

/// At least `amount` digits.
pub fn has_numeric(amount: usize) -> HasAtLeast {
    has_at_least(CharSubset::Numeric, amount)
}

/// At least `amount` special characters.
pub fn has_special_characters(amount: usize) -> HasAtLeast {
    has_at_least(CharSubset::Special, amount)
}

/// Bytes are valid in one of a list of candidate charsets.
///
/// Candidates are tried in order and the first one that decodes the input
/// without a malformed sequence is the detected charset. Labels that
/// `encoding_rs` does not know are ignored; `ASCII` and `US-ASCII` are checked
/// directly because the WHATWG registry maps them to windows-1252.
#[derive(Clone, Debug)]
pub struct IsCharset {
    candidates: Vec<String>,
}

impl IsCharset {
    /// The candidate matching `bytes`, if any.
    pub fn detect(&self, bytes: &[u8]) -> Option<&str> {
        self.candidates
            .iter()
            .map(String::as_str)
            .find(|label| decodes_as(bytes, label))
    }
}

fn decodes_as(bytes: &[u8], label: &str) -> bool {
    let label = label.trim();
    if label.eq_ignore_ascii_case("ascii") || label.eq_ignore_ascii_case("us-ascii") {
        return bytes.is_ascii();
    }
    Encoding::for_label(label.as_bytes()).is_some_and(|encoding| {
        encoding
            .decode_without_bom_handling_and_without_replacement(bytes)
            .is_some()
    })
}

impl Predicate<[u8]> for IsCharset {
    #[inline]
    fn check(&self, value: &[u8]) -> bool {
        self.detect(value).is_some()
    }
}

impl Predicate<str> for IsCharset {
    #[inline]
    fn check(&self, value: &str) -> bool {
        self.detect(value.as_bytes()).is_some()
    }
}

/// Create an [`IsCharset`] predicate.
///
/// ```rust
/// use touchstone::predicate::*;
///
/// let latin = is_charset(["ASCII"]);
/// assert!(latin.check("plain".as_bytes()));
/// assert!(!latin.check("café".as_bytes()));
///
/// let either = is_charset(["ASCII", "UTF-8"]);
/// assert_eq!(either.detect("café".as_bytes()), Some("UTF-8"));
/// ```
pub fn is_charset<I, S>(candidates: I) -> IsCharset
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    IsCharset {
        candidates: candidates.into_iter().map(Into::into).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_length_counts_chars_not_bytes() {
        let value = "日本語";
        assert_eq!(value.len(), 9);
        assert!(has_length(3).check(value));
        assert!(!has_length(9).check(value));
        assert!(len_between(3, 3, true).check(value));
        assert!(!len_between(3, 3, false).check(value));
        assert!(len_between(2, 4, false).check(value));
    }

    #[test]
    fn test_len_between_with_inverted_bounds_never_holds() {
        assert!(!len_between(5, 1, true).check("abc"));
    }

    #[test]
    fn test_alpha_and_alphanumeric() {
        assert!(is_alpha().check("Hello"));
        assert!(!is_alpha().check("Hello1"));
        assert!(!is_alpha().check(""));
        assert!(is_alphanumeric().check("Hello1"));
        assert!(!is_alphanumeric().check("Hello 1"));
        assert!(!is_alphanumeric().check("héllo"));
    }

    #[test]
    fn test_consonants_and_vowels() {
        assert!(is_all_consonants().check("bcd fgh"));
        assert!(!is_all_consonants().check("bad"));
        assert!(!is_all_consonants().check(""));
        assert!(is_vowel().check("aei OU"));
        assert!(is_vowel().check(""));
        assert!(!is_vowel().check("ab"));
    }

    #[test]
    fn test_contains_identical_flag() {
        assert!(contains("ÄPFEL", false).check("grüne äpfel"));
        assert!(!contains("ÄPFEL", true).check("grüne äpfel"));
        assert!(contains("äpfel", true).check("grüne äpfel"));
        assert!(!contains("birnen", false).check("grüne äpfel"));
    }

    #[test]
    fn test_starts_and_ends_with() {
        assert!(starts_with("hel", false).check("HELLO"));
        assert!(!starts_with("hel", true).check("HELLO"));
        assert!(!starts_with("llo", false).check("hello"));
        assert!(ends_with("LLO", false).check("hello"));
        assert!(ends_with("llo", true).check("hello"));
        assert!(!ends_with("LLO", true).check("hello"));
        assert!(!ends_with("hel", false).check("hello"));
    }

    #[test]
    fn test_in_haystack() {
        assert!(in_haystack("red,green,blue", true).check("green"));
        assert!(!in_haystack("red,green,blue", true).check("GREEN"));
        assert!(in_haystack("red,green,blue", false).check("GREEN"));
    }

    #[test]
    fn test_equals() {
        assert!(equals("abc", false).check("abc"));
        assert!(!equals("abc", false).check("ABC"));
        assert!(equals("1.0", false).check("1"));
        assert!(!equals("1.0", true).check("1"));
    }

    #[test]
    fn test_equals_ignores_non_finite_spellings() {
        assert!(!equals("inf", false).check("Infinity"));
        assert!(!equals("-inf", false).check("-INFINITY"));
        assert!(!equals("NaN", false).check("nan"));
        assert!(equals("NaN", false).check("NaN"));
        assert!(equals(" 2.50", false).check("2.5"));
    }

    #[test]
    fn test_character_classes() {
        assert!(is_control_characters().check("\n\r\t"));
        assert!(!is_control_characters().check("a\n"));
        assert!(has_graphical_chars_only().check("abc!"));
        assert!(!has_graphical_chars_only().check("ab c"));
        assert!(has_printable_chars_only().check("ab c"));
        assert!(!has_printable_chars_only().check("ab\tc"));
        assert!(is_punctuation().check("!?.,"));
        assert!(!is_punctuation().check("!a"));
        assert!(is_space().check(" \t\n\x0b\x0c\r"));
        assert!(!is_space().check(""));
        assert!(is_hex_digit().check("DEADbeef09"));
        assert!(!is_hex_digit().check("0x1f"));
    }

    #[test]
    fn test_case_predicates() {
        assert!(is_lowercase().check("straße 1"));
        assert!(!is_lowercase().check("Straße"));
        assert!(is_uppercase().check("ÀÉÎ 2"));
        assert!(!is_uppercase().check("Àéî"));
    }

    #[test]
    fn test_whitespace_rules() {
        assert!(no_whitespace().check("a-b"));
        assert!(!no_whitespace().check("a\u{00a0}b"));
        assert!(not_empty().check("0"));
        assert!(!not_empty().check(""));
    }

    #[test]
    fn test_slug() {
        assert!(is_slug().check("foo-bar"));
        assert!(is_slug().check("2024"));
        assert!(!is_slug().check("foo--bar"));
        assert!(!is_slug().check("-foo"));
        assert!(!is_slug().check("foo-"));
        assert!(!is_slug().check("foo_bar"));
        assert!(!is_slug().check(""));
    }

    #[test]
    fn test_version() {
        for ok in ["1.0", "1.0.", "1.0.0", "1.0.0-rc1", "1.0+build.5", "10.20.30-alpha.1"] {
            assert!(is_version().check(ok), "{ok}");
        }
        for bad in ["1", "1.a", "1.0.0-", "1.0.0--x", "v1.0"] {
            assert!(!is_version().check(bad), "{bad}");
        }
    }

    #[test]
    fn test_email() {
        assert!(is_email().check("john.doe+tag@example.co.uk"));
        assert!(is_email().check("JOHN@EXAMPLE.COM"));
        assert!(!is_email().check("john@localhost"));
        assert!(!is_email().check("john doe@example.com"));
        assert!(!is_email().check("@example.com"));
    }

    #[test]
    fn test_url() {
        assert!(is_url().check("http://example.com/"));
        assert!(is_url().check("https://example.com/path?q=1#frag"));
        assert!(is_url().check("//example.com/path"));
        assert!(is_url().check("ftp://files.example.com/pub/"));
        assert!(!is_url().check("http://example.com"));
        assert!(!is_url().check("http://example.com?q=1"));
        assert!(!is_url().check("not a url"));
        assert!(!is_url().check("/"));
        assert!(!is_url().check(""));
    }

    #[test]
    fn test_uuid() {
        assert!(is_uuid(true).check("6BA7B810-9DAD-11D1-80B4-00C04FD430C8"));
        assert!(!is_uuid(true).check("6ba7b8109dad11d180b400c04fd430c8"));
        assert!(is_uuid(false).check("[6ba7-b810-9dad-11d1-80b4-00c0-4fd4-30c8]"));
        assert!(!is_uuid(false).check("6ba7b810-9dad-11d1-80b4-00c04fd430c"));
        assert!(!is_uuid(false).check("zba7b8109dad11d180b400c04fd430c8"));
    }

    #[test]
    fn test_has_at_least() {
        assert!(has_uppercase(2).check("AbC"));
        assert!(!has_uppercase(3).check("AbC"));
        assert!(has_numeric(0).check("a1"));
        assert!(!has_numeric(0).check("abc"));
        assert!(has_special_characters(2).check("a!b?"));
        assert!(has_special_characters(1).check("naïve"));
        assert!(!has_special_characters(1).check("a b\tc"));
        assert_eq!(has_lowercase(0).amount(), 1);
    }

    #[test]
    fn test_charset_detection_order() {
        let latin1 = [0x63, 0x61, 0x66, 0xe9];
        assert!(!is_charset(["UTF-8"]).check(&latin1[..]));
        assert_eq!(
            is_charset(["UTF-8", "ISO-8859-1"]).detect(&latin1),
            Some("ISO-8859-1")
        );
        assert!(is_charset(["ASCII"]).check("abc"));
        assert!(!is_charset(["no-such-charset"]).check("abc"));
    }
}
