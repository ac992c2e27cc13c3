//! Compiled patterns for common input formats.
//!
//! Every pattern is anchored at both ends: a rule accepts a string only when the
//! whole string matches, never a substring. Matching is pure and the compiled
//! statics are `Sync`, so any number of threads may evaluate them concurrently.

use once_cell::sync::Lazy;
use regex::Regex;

/// One or more ASCII digits
pub static NUMBER_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[0-9]+$")
        .expect("Failed to compile number regex")
});

/// Letters, digits and whitespace
pub static ALPHANUMERIC_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9\s]+$")
        .expect("Failed to compile alphanumeric regex")
});

/// Five digits, a hyphen, three digits (CEP format)
pub static POSTAL_CODE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[0-9]{5}-[0-9]{3}$")
        .expect("Failed to compile postal code regex")
});

/// Letters and whitespace only
pub static LETTERS_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z\s]+$")
        .expect("Failed to compile letters regex")
});

/// At least 8 characters, all drawn from the allowed password alphabet.
/// The per-class requirements are checked separately in [`matches_password`],
/// since the regex engine has no lookahead.
pub static PASSWORD_CHARSET_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9@$!%*?&]{8,}$")
        .expect("Failed to compile password charset regex")
});

static CONTAINS_LOWERCASE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[a-z]")
        .expect("Failed to compile lowercase class regex")
});

static CONTAINS_UPPERCASE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[A-Z]")
        .expect("Failed to compile uppercase class regex")
});

static CONTAINS_DIGIT_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[0-9]")
        .expect("Failed to compile digit class regex")
});

static CONTAINS_SYMBOL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[@$!%*?&]")
        .expect("Failed to compile symbol class regex")
});

/// Local part, `@`, domain, dot, top-level segment of at least two letters
pub static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$")
        .expect("Failed to compile email regex")
});

/// At least two space-separated words, each an uppercase letter followed by at
/// least two more characters (accented Latin-1 letters, whitespace, apostrophe
/// and hyphen allowed). Rejects short components such as "Li" by design of the
/// original grammar.
pub static FULL_NAME_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Z][a-zA-Zà-úÀ-Ú\s'-]{2,}(\s[A-Z][a-zA-Zà-úÀ-Ú\s'-]{2,})+$")
        .expect("Failed to compile full name regex")
});

/// `dd/mm/yyyy` with day 01-31 and month 01-12, ranges checked independently.
/// Does not reject impossible day/month combinations such as `31/02/2024` and
/// applies no leap-year rule.
pub static DATE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(0[1-9]|[12][0-9]|3[01])/(0[1-9]|1[0-2])/[0-9]{4}$")
        .expect("Failed to compile date regex")
});

/// Exactly the literal `true` or `false`
pub static BOOLEAN_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(true|false)$")
        .expect("Failed to compile boolean regex")
});

/// 3 to 20 characters: letters, digits and underscore
pub static USERNAME_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-zA-Z0-9_]{3,20}$")
        .expect("Failed to compile username regex")
});

/// Returns true if the input is one or more ASCII digits
pub fn matches_number(input: &str) -> bool {
    NUMBER_REGEX.is_match(input)
}

/// Returns true if the input contains only letters, digits and whitespace
pub fn matches_alphanumeric(input: &str) -> bool {
    ALPHANUMERIC_REGEX.is_match(input)
}

/// Returns true if the input is a postal code in `00000-000` form
pub fn matches_postal_code(input: &str) -> bool {
    POSTAL_CODE_REGEX.is_match(input)
}

/// Returns true if the input contains only letters and whitespace
pub fn matches_letters(input: &str) -> bool {
    LETTERS_REGEX.is_match(input)
}

/// Returns true if the input is a valid password: at least 8 characters from
/// the allowed alphabet, with at least one lowercase letter, one uppercase
/// letter, one digit and one of `@$!%*?&`
pub fn matches_password(input: &str) -> bool {
    PASSWORD_CHARSET_REGEX.is_match(input)
        && CONTAINS_LOWERCASE_REGEX.is_match(input)
        && CONTAINS_UPPERCASE_REGEX.is_match(input)
        && CONTAINS_DIGIT_REGEX.is_match(input)
        && CONTAINS_SYMBOL_REGEX.is_match(input)
}

/// Returns true if the input is a well-formed email address
pub fn matches_email(input: &str) -> bool {
    EMAIL_REGEX.is_match(input)
}

/// Returns true if the input is a full name of at least two capitalized words
pub fn matches_full_name(input: &str) -> bool {
    FULL_NAME_REGEX.is_match(input)
}

/// Returns true if the input is a `dd/mm/yyyy` date with day and month ranges
/// checked independently
pub fn matches_date(input: &str) -> bool {
    DATE_REGEX.is_match(input)
}

/// Returns true if the input is exactly `true` or `false`
pub fn matches_boolean(input: &str) -> bool {
    BOOLEAN_REGEX.is_match(input)
}

/// Returns true if the input is a 3 to 20 character username
pub fn matches_username(input: &str) -> bool {
    USERNAME_REGEX.is_match(input)
}
