use once_cell::sync::Lazy;
use regex::Regex;

use super::types::{Field, FieldFlags, NewUser, SubmissionOutcome};

/// Characters accepted in a password besides ASCII letters and digits
pub const PASSWORD_SPECIALS: &str = "@$!%*?&_()'{}~|=£¤µ";

pub const PASSWORD_MIN_CHARS: usize = 6;

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9_.\-]+@([A-Za-z0-9_\-]+\.)+[A-Za-z0-9_\-]{2,4}$")
        .expect("email pattern compiles")
});

// regex has no lookahead: one anchored charset check plus one check per required class
static PASSWORD_CHARSET_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9@$!%*?&_()'{}~|=£¤µ]+$").expect("password charset compiles")
});
static PASSWORD_LOWER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[a-z]").expect("lowercase pattern compiles"));
static PASSWORD_UPPER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[A-Z]").expect("uppercase pattern compiles"));
static PASSWORD_DIGIT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[0-9]").expect("digit pattern compiles"));
static PASSWORD_SPECIAL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[@$!%*?&_()'{}~|=£¤µ]").expect("special pattern compiles"));

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

/// At least six characters from the allowed set, with a lowercase letter,
/// an uppercase letter, a digit and a special character.
pub fn is_valid_password(password: &str) -> bool {
    password.chars().count() >= PASSWORD_MIN_CHARS
        && PASSWORD_CHARSET_RE.is_match(password)
        && PASSWORD_LOWER_RE.is_match(password)
        && PASSWORD_UPPER_RE.is_match(password)
        && PASSWORD_DIGIT_RE.is_match(password)
        && PASSWORD_SPECIAL_RE.is_match(password)
}

/// Checks a submission. Presence is checked first, then the email format,
/// then the password format; only the first failing stage is reported.
pub fn validate_submission(user: &NewUser) -> SubmissionOutcome {
    let missing: Vec<Field> = Field::ALL
        .into_iter()
        .filter(|field| user.field(*field).is_empty())
        .collect();

    if !missing.is_empty() {
        SubmissionOutcome::MissingFields(missing)
    } else if !is_valid_email(&user.email) {
        SubmissionOutcome::InvalidEmail
    } else if !is_valid_password(&user.password) {
        SubmissionOutcome::InvalidPassword
    } else {
        SubmissionOutcome::Ready(user.clone())
    }
}

impl FieldFlags {
    /// Applies a submission outcome on top of the current flags.
    ///
    /// Missing fields only raise their own flags. Once every field is filled the
    /// empty flags are cleared and the failing format flag is raised; the other
    /// format flag keeps its previous value until a submission fully passes.
    pub fn apply_submission(&mut self, outcome: &SubmissionOutcome) {
        match outcome {
            SubmissionOutcome::MissingFields(fields) => {
                for field in fields {
                    self.set_empty(*field, true);
                }
            }
            SubmissionOutcome::InvalidEmail => {
                self.clear_empty();
                self.invalid_email = true;
            }
            SubmissionOutcome::InvalidPassword => {
                self.clear_empty();
                self.invalid_password = true;
            }
            SubmissionOutcome::Ready(_) => *self = FieldFlags::default(),
        }
    }

    /// Typing a non-empty value clears that field's "required" flag
    pub fn on_edit(&mut self, field: Field, value: &str) {
        if !value.is_empty() {
            self.set_empty(field, false);
        }
    }

    fn clear_empty(&mut self) {
        for field in Field::ALL {
            self.set_empty(field, false);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_pattern() {
        assert!(is_valid_email("jane.doe@example.com"));
        assert!(is_valid_email("a-b_c@mail.server.org"));
        assert!(is_valid_email("x@y.io"));

        assert!(!is_valid_email("plainaddress"));
        assert!(!is_valid_email("missing@tld"));
        assert!(!is_valid_email("two@@example.com"));
        assert!(!is_valid_email("user@example.toolong"));
        assert!(!is_valid_email("user@example.c"));
        assert!(!is_valid_email("user name@example.com"));
        assert!(!is_valid_email(""));
    }

    #[test]
    fn test_password_requires_every_class() {
        assert!(is_valid_password("Abcde1!"));
        assert!(is_valid_password("zZ9_{}"));

        // missing uppercase / lowercase / digit / special
        assert!(!is_valid_password("abcde1!"));
        assert!(!is_valid_password("ABCDE1!"));
        assert!(!is_valid_password("Abcdef!"));
        assert!(!is_valid_password("Abcdef1"));
    }

    #[test]
    fn test_password_length_and_charset() {
        assert!(!is_valid_password("Ab1!"));
        assert!(!is_valid_password("Ab1!x"));
        assert!(is_valid_password("Ab1!xy"));

        // characters outside the allowed set are rejected
        assert!(!is_valid_password("Abc 1!x"));
        assert!(!is_valid_password("Abc1!x#"));
        assert!(!is_valid_password("Abc1!xé"));
    }

    #[test]
    fn test_every_special_character_is_accepted() {
        for special in PASSWORD_SPECIALS.chars() {
            let password = format!("Abc12{special}");
            assert!(is_valid_password(&password), "rejected {password}");
        }
    }

    #[test]
    fn test_password_multibyte_specials_count_as_one_char() {
        // "Aa1£" is 5 bytes but 4 chars
        assert!(!is_valid_password("Aa1£"));
        assert!(is_valid_password("Aa1£µx"));
    }

    #[test]
    fn test_submission_blocked_until_all_fields_present() {
        let outcome = validate_submission(&NewUser::new("", "a@b.com", ""));
        assert_eq!(
            outcome,
            SubmissionOutcome::MissingFields(vec![Field::Username, Field::Password])
        );

        let outcome = validate_submission(&NewUser::default());
        assert_eq!(outcome, SubmissionOutcome::MissingFields(Field::ALL.to_vec()));
    }

    #[test]
    fn test_submission_checks_email_before_password() {
        let outcome = validate_submission(&NewUser::new("jane", "nope", "weak"));
        assert_eq!(outcome, SubmissionOutcome::InvalidEmail);

        let outcome = validate_submission(&NewUser::new("jane", "jane@example.com", "weak"));
        assert_eq!(outcome, SubmissionOutcome::InvalidPassword);

        let user = NewUser::new("jane", "jane@example.com", "Secr3t!");
        assert_eq!(validate_submission(&user), SubmissionOutcome::Ready(user));
    }

    #[test]
    fn test_whitespace_counts_as_content() {
        let outcome = validate_submission(&NewUser::new(" ", "jane@example.com", "Secr3t!"));
        assert!(matches!(outcome, SubmissionOutcome::Ready(_)));
    }

    #[test]
    fn test_apply_missing_fields_keeps_other_flags() {
        let mut flags = FieldFlags {
            invalid_email: true,
            ..FieldFlags::default()
        };
        flags.apply_submission(&SubmissionOutcome::MissingFields(vec![Field::Email]));

        assert!(flags.empty_email);
        assert!(!flags.empty_username);
        assert!(flags.invalid_email);
    }

    #[test]
    fn test_apply_format_failure_clears_empty_flags() {
        let mut flags = FieldFlags {
            empty_username: true,
            invalid_email: true,
            ..FieldFlags::default()
        };
        flags.apply_submission(&SubmissionOutcome::InvalidPassword);

        assert!(!flags.empty_username);
        assert!(flags.invalid_password);
        // email flag is left as it was
        assert!(flags.invalid_email);

        flags.apply_submission(&SubmissionOutcome::Ready(NewUser::default()));
        assert!(!flags.any());
    }

    #[test]
    fn test_on_edit_clears_only_on_content() {
        let mut flags = FieldFlags {
            empty_username: true,
            empty_password: true,
            ..FieldFlags::default()
        };

        flags.on_edit(Field::Username, "");
        assert!(flags.empty_username);

        flags.on_edit(Field::Username, "j");
        assert!(!flags.empty_username);
        assert!(flags.empty_password);
    }
}
