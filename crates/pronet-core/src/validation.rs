// ── Input validation ──
//
// Pure predicates used by the login and profile forms.

use std::sync::LazyLock;

use regex::Regex;
use url::Url;

static EMAIL: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"^[A-Z0-9a-z._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$").ok());

/// Keep only ASCII digits.
pub fn sanitize_digits(raw: &str) -> String {
    raw.chars().filter(char::is_ascii_digit).collect()
}

/// 8–15 digits and nothing else.
pub fn validate_phone(phone: &str) -> bool {
    (8..=15).contains(&phone.len()) && phone.chars().all(|c| c.is_ascii_digit())
}

/// Looser check on free-form input: 10–15 digits once separators are stripped.
pub fn is_valid_phone(raw: &str) -> bool {
    (10..=15).contains(&sanitize_digits(raw).len())
}

/// `local@domain.tld` with a purely alphabetic TLD of two or more letters.
pub fn validate_email(email: &str) -> bool {
    EMAIL.as_ref().is_some_and(|re| re.is_match(email))
}

/// Letters and spaces, at least two characters.
pub fn validate_name(name: &str) -> bool {
    name.len() >= 2 && name.chars().all(|c| c.is_ascii_alphabetic() || c == ' ')
}

/// Attachment types accepted by chat uploads.
pub const DEFAULT_ATTACHMENT_EXTENSIONS: [&str; 5] = ["pdf", "ppt", "pptx", "xls", "xlsx"];

/// Case-insensitive check of the text after the last `.`.
pub fn validate_file_extension(file_name: &str, allowed: &[&str]) -> bool {
    let Some(ext) = file_name.split('.').next_back() else {
        return false;
    };
    let ext = ext.to_ascii_lowercase();
    allowed.iter().any(|a| *a == ext)
}

pub fn validate_url(raw: &str) -> bool {
    Url::parse(raw).is_ok()
}

/// Password policy for account creation.
#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PasswordRules {
    pub min_length: usize,
    pub require_uppercase: bool,
    pub require_lowercase: bool,
    pub require_digit: bool,
    pub require_special: bool,
}

impl Default for PasswordRules {
    fn default() -> Self {
        Self {
            min_length: 8,
            require_uppercase: true,
            require_lowercase: true,
            require_digit: true,
            require_special: false,
        }
    }
}

impl PasswordRules {
    pub fn validate(&self, password: &str) -> bool {
        if password.chars().count() < self.min_length {
            return false;
        }
        let has = |pred: fn(&char) -> bool| password.chars().any(|c| pred(&c));

        (!self.require_uppercase || has(char::is_ascii_uppercase))
            && (!self.require_lowercase || has(char::is_ascii_lowercase))
            && (!self.require_digit || has(char::is_ascii_digit))
            && (!self.require_special || has(|c| !c.is_ascii_alphanumeric()))
    }
}

pub fn validate_password(password: &str) -> bool {
    PasswordRules::default().validate(password)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn phone_lengths() {
        assert!(!validate_phone("1234567"));
        assert!(validate_phone("12345678"));
        assert!(validate_phone("123456789012345"));
        assert!(!validate_phone("1234567890123456"));
        assert!(!validate_phone("12345-678"));
    }

    #[test]
    fn free_form_phone_strips_separators() {
        assert!(is_valid_phone("+1 (555) 123-4567"));
        assert!(!is_valid_phone("555-1234"));
        assert_eq!(sanitize_digits("+1 (555) 123-4567"), "15551234567");
    }

    #[test]
    fn emails() {
        assert!(validate_email("ava.johnson+work@example.co"));
        assert!(!validate_email("ava@example"));
        assert!(!validate_email("ava@example.c0m"));
        assert!(!validate_email("@example.com"));
        assert!(!validate_email("a@b@example.com"));
        assert!(!validate_email("a@.com"));
        assert!(validate_email("a@b..com"));
        assert!(!validate_email("a@b.com1"));
    }

    #[test]
    fn names() {
        assert!(validate_name("Priya Mehta"));
        assert!(!validate_name("P"));
        assert!(!validate_name("R2D2"));
    }

    #[test]
    fn passwords() {
        assert!(validate_password("Secret123"));
        assert!(!validate_password("secret123"));
        assert!(!validate_password("SECRET123"));
        assert!(!validate_password("Secretabc"));
        assert!(!validate_password("Sec1"));

        let strict = PasswordRules {
            require_special: true,
            ..PasswordRules::default()
        };
        assert!(!strict.validate("Secret123"));
        assert!(strict.validate("Secret123!"));
    }

    #[test]
    fn attachments() {
        assert!(validate_file_extension("deck.PPTX", &DEFAULT_ATTACHMENT_EXTENSIONS));
        assert!(!validate_file_extension("photo.png", &DEFAULT_ATTACHMENT_EXTENSIONS));
    }

    #[test]
    fn urls() {
        assert!(validate_url("https://example.com/profile"));
        assert!(!validate_url("not a url"));
    }
}
