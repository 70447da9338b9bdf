//! Form field validation for the login and signup views

use once_cell::sync::Lazy;
use regex::Regex;

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-zA-Z0-9._-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,4}$")
        .expect("email pattern is valid")
});

static NAME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-zA-Z\s]+$").expect("name pattern is valid"));

/// Minimum password length in characters
pub const MIN_PASSWORD_LEN: usize = 8;

pub const INVALID_EMAIL_MSG: &str = "Please enter a valid email";
pub const INVALID_NAME_MSG: &str = "Please enter a valid name";
pub const SHORT_PASSWORD_MSG: &str = "Minimum 8 characters";
pub const PASSWORD_MISMATCH_MSG: &str = "Passwords do not match!";
pub const INVALID_FORM_MSG: &str = "Please enter valid details";

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

/// Letters and whitespace only
pub fn is_valid_name(name: &str) -> bool {
    NAME_RE.is_match(name)
}

pub fn is_valid_password(password: &str) -> bool {
    password.chars().count() >= MIN_PASSWORD_LEN
}

/// Login form state.
///
/// Validity flags start out `true` so no error is shown before the user has
/// typed anything.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
    pub email_valid: bool,
    pub password_valid: bool,
}

impl Default for LoginForm {
    fn default() -> Self {
        Self {
            email: String::new(),
            password: String::new(),
            email_valid: true,
            password_valid: true,
        }
    }
}

impl LoginForm {
    pub fn set_email(&mut self, email: String) {
        self.email_valid = is_valid_email(&email);
        self.email = email;
    }

    pub fn set_password(&mut self, password: String) {
        self.password_valid = is_valid_password(&password);
        self.password = password;
    }

    pub fn can_submit(&self) -> bool {
        is_valid_email(&self.email) && is_valid_password(&self.password)
    }
}

/// Signup form state
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SignupForm {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub notifications: bool,
    pub name_valid: bool,
    pub email_valid: bool,
    pub password_valid: bool,
    pub passwords_match: bool,
}

impl Default for SignupForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            email: String::new(),
            password: String::new(),
            confirm_password: String::new(),
            notifications: false,
            name_valid: true,
            email_valid: true,
            password_valid: true,
            passwords_match: true,
        }
    }
}

impl SignupForm {
    pub fn set_name(&mut self, name: String) {
        self.name_valid = is_valid_name(&name);
        self.name = name;
    }

    pub fn set_email(&mut self, email: String) {
        self.email_valid = is_valid_email(&email);
        self.email = email;
    }

    pub fn set_password(&mut self, password: String) {
        self.password_valid = is_valid_password(&password);
        if !self.confirm_password.is_empty() {
            self.passwords_match = self.confirm_password == password;
        }
        self.password = password;
    }

    pub fn set_confirm_password(&mut self, confirm_password: String) {
        self.passwords_match = confirm_password == self.password;
        self.confirm_password = confirm_password;
    }

    pub fn can_submit(&self) -> bool {
        is_valid_name(&self.name)
            && is_valid_email(&self.email)
            && is_valid_password(&self.password)
            && self.password == self.confirm_password
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_validation() {
        assert!(is_valid_email("a@b.co"));
        assert!(is_valid_email("first.last-1@mail.example.com"));
        assert!(!is_valid_email("a@b"));
        assert!(!is_valid_email("a.com"));
        assert!(!is_valid_email(""));
        assert!(!is_valid_email("a@b.toolong"));
        assert!(!is_valid_email("a b@c.de"));
    }

    #[test]
    fn test_password_length() {
        assert!(!is_valid_password("1234567"));
        assert!(is_valid_password("12345678"));
        assert!(!is_valid_password(""));
        assert!(is_valid_password("pässwörd"));
    }

    #[test]
    fn test_name_validation() {
        assert!(is_valid_name("Ada Lovelace"));
        assert!(!is_valid_name("R2-D2"));
        assert!(!is_valid_name(""));
    }

    #[test]
    fn test_login_form_flags_follow_input() {
        let mut form = LoginForm::default();
        assert!(form.email_valid && form.password_valid);
        assert!(!form.can_submit());

        form.set_email("a@b".to_string());
        assert!(!form.email_valid);
        form.set_email("a@b.co".to_string());
        assert!(form.email_valid);

        form.set_password("short".to_string());
        assert!(!form.password_valid);
        assert!(!form.can_submit());

        form.set_password("long enough".to_string());
        assert!(form.can_submit());
    }

    #[test]
    fn test_signup_form_requires_matching_passwords() {
        let mut form = SignupForm::default();
        form.set_name("Ada".to_string());
        form.set_email("ada@example.com".to_string());
        form.set_password("12345678".to_string());
        form.set_confirm_password("1234567".to_string());
        assert!(!form.passwords_match);
        assert!(!form.can_submit());

        form.set_confirm_password("12345678".to_string());
        assert!(form.passwords_match);
        assert!(form.can_submit());

        form.set_password("87654321".to_string());
        assert!(!form.passwords_match);
        assert!(!form.can_submit());
    }

    #[test]
    fn test_signup_form_rejects_invalid_name() {
        let mut form = SignupForm::default();
        form.set_name("4da".to_string());
        form.set_email("ada@example.com".to_string());
        form.set_password("12345678".to_string());
        form.set_confirm_password("12345678".to_string());
        assert!(!form.name_valid);
        assert!(!form.can_submit());
    }
}
