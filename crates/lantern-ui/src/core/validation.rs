//! Field rules for the sign-up form.

use once_cell::sync::Lazy;
use regex::Regex;

type Rule = Lazy<Result<Regex, regex::Error>>;

// `\x{FEFF}` joins `\s` so whitespace matches what browsers treat as such.
static NAME_RULE: Rule = Lazy::new(|| Regex::new(r"^[a-zA-Z\s\x{FEFF}]{2,}$"));
static EMAIL_RULE: Rule =
    Lazy::new(|| Regex::new(r"^[^\s@\x{FEFF}]+@[^\s@\x{FEFF}]+\.[^\s@\x{FEFF}]+$"));
static PHONE_RULE: Rule = Lazy::new(|| Regex::new(r"^[0-9]{10}$"));

/// Characters a password may use besides ASCII letters and digits.
pub const PASSWORD_SPECIALS: &str = "@$!%*?&";
/// Minimum password length.
pub const PASSWORD_MIN_LEN: usize = 8;

/// Form fields under validation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Field {
    /// Full name.
    Name,
    /// Email address.
    Email,
    /// Password.
    Password,
    /// Ten-digit phone number.
    Phone,
}

impl Field {
    /// Every field in form order.
    pub const ALL: [Self; 4] = [Self::Name, Self::Email, Self::Password, Self::Phone];

    /// Position of the field in [`Field::ALL`].
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::Name => 0,
            Self::Email => 1,
            Self::Password => 2,
            Self::Phone => 3,
        }
    }

    /// Whether surrounding whitespace is stripped before matching.
    #[must_use]
    pub const fn trims_input(self) -> bool {
        !matches!(self, Self::Password)
    }
}

/// Live validation state of one field.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FieldStatus {
    /// No input or submit attempt since load or the last reset.
    #[default]
    Untouched,
    /// Last check failed.
    Invalid,
    /// Last check passed.
    Valid,
}

impl FieldStatus {
    /// Status for a validation outcome.
    #[must_use]
    pub const fn from_valid(valid: bool) -> Self {
        if valid { Self::Valid } else { Self::Invalid }
    }

    /// True only for [`FieldStatus::Valid`].
    #[must_use]
    pub const fn is_valid(self) -> bool {
        matches!(self, Self::Valid)
    }
}

/// Check `raw` against the rule for `field`.
#[must_use]
pub fn validate(field: Field, raw: &str) -> bool {
    let value = if field.trims_input() {
        trim_browser(raw)
    } else {
        raw
    };
    match field {
        Field::Name => matches_rule(&NAME_RULE, value),
        Field::Email => matches_rule(&EMAIL_RULE, value),
        Field::Password => password_ok(value),
        Field::Phone => matches_rule(&PHONE_RULE, value),
    }
}

/// Trim like `String.prototype.trim`, which also strips U+FEFF.
fn trim_browser(raw: &str) -> &str {
    raw.trim_matches(|c: char| c.is_whitespace() || c == '\u{FEFF}')
}

fn matches_rule(rule: &Rule, value: &str) -> bool {
    Lazy::force(rule)
        .as_ref()
        .is_ok_and(|regex| regex.is_match(value))
}

fn password_ok(value: &str) -> bool {
    let allowed = |c: char| c.is_ascii_alphanumeric() || PASSWORD_SPECIALS.contains(c);
    value.chars().count() >= PASSWORD_MIN_LEN
        && value.chars().all(allowed)
        && value.chars().any(|c| c.is_ascii_lowercase())
        && value.chars().any(|c| c.is_ascii_uppercase())
        && value.chars().any(|c| c.is_ascii_digit())
        && value.chars().any(|c| PASSWORD_SPECIALS.contains(c))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rules_compile() {
        assert!(NAME_RULE.is_ok());
        assert!(EMAIL_RULE.is_ok());
        assert!(PHONE_RULE.is_ok());
    }

    #[test]
    fn name_rule() {
        assert!(validate(Field::Name, "Jo"));
        assert!(validate(Field::Name, "John Smith"));
        assert!(validate(Field::Name, "  Ann  "));
        assert!(!validate(Field::Name, "J"));
        assert!(!validate(Field::Name, "John123"));
        assert!(!validate(Field::Name, "   "));
    }

    #[test]
    fn byte_order_mark_counts_as_whitespace() {
        assert!(validate(Field::Name, "Jo\u{FEFF}"));
        assert!(validate(Field::Name, "Jo\u{FEFF}Smith"));
        assert!(validate(Field::Phone, "\u{FEFF}1234567890"));
        assert!(!validate(Field::Email, "a\u{FEFF}b@c.com"));
        assert!(!validate(Field::Password, "Abcdef1!\u{FEFF}"));
    }

    #[test]
    fn email_rule() {
        assert!(validate(Field::Email, "a@b.co"));
        assert!(validate(Field::Email, " a@b.co "));
        assert!(!validate(Field::Email, "a@b"));
        assert!(!validate(Field::Email, "a b@c.com"));
        assert!(!validate(Field::Email, "a@@b.com"));
    }

    #[test]
    fn password_rule() {
        assert!(validate(Field::Password, "Abcdef1!"));
        assert!(!validate(Field::Password, "abcdef1!"));
        assert!(!validate(Field::Password, "Abcdefg!"));
        assert!(!validate(Field::Password, "Abc1!"));
        assert!(!validate(Field::Password, "Abcdef12"));
        assert!(!validate(Field::Password, "Abcdef1!#"));
        assert!(!validate(Field::Password, " Abcdef1!"));
    }

    #[test]
    fn phone_rule() {
        assert!(validate(Field::Phone, "1234567890"));
        assert!(!validate(Field::Phone, "123-456-7890"));
        assert!(!validate(Field::Phone, "12345"));
        assert!(!validate(Field::Phone, "١٢٣٤٥٦٧٨٩٠"));
    }

    #[test]
    fn field_order_matches_indices() {
        for (position, field) in Field::ALL.into_iter().enumerate() {
            assert_eq!(field.index(), position);
        }
        assert!(FieldStatus::from_valid(true).is_valid());
        assert!(!FieldStatus::default().is_valid());
    }
}
