//! Field validation predicates for contact registration.
//!
//! # Responsibility
//! - Decide whether user-supplied contact fields may be persisted.
//! - Decide whether a lookup id is safe to bind into a query.
//!
//! # Invariants
//! - Predicates are pure and never panic.
//! - Lengths are counted in Unicode scalar values, not bytes.
//! - Mobile numbers follow one pinned rule set (Brazil, `pt-BR`).
//! - Digits in phone numbers and ids are ASCII `0-9` only.

use once_cell::sync::Lazy;
use regex::Regex;

pub const MIN_NAME_CHARS: usize = 3;
pub const MAX_NAME_CHARS: usize = 255;
pub const MAX_PHONE_CHARS: usize = 30;
pub const MAX_DESCRIPTION_CHARS: usize = 50;

const MAX_EMAIL_CHARS: usize = 254;
const MAX_EMAIL_LOCAL_CHARS: usize = 64;

// Dot-atom of RFC 5322 `atext`.
static EMAIL_LOCAL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9!#$%&'*+/=?^_`{|}~-]+(\.[A-Za-z0-9!#$%&'*+/=?^_`{|}~-]+)*$")
        .expect("valid email local-part regex")
});
static DOMAIN_LABEL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9]([A-Za-z0-9-]{0,61}[A-Za-z0-9])?$").expect("valid domain label regex")
});
static TLD_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z]{2,63}$").expect("valid tld regex"));
static PT_BR_MOBILE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^((\+?55 ?[1-9]{2} ?)|(\+?55 ?\([1-9]{2}\) ?)|(0[1-9]{2} ?)|(\([1-9]{2}\) ?)|([1-9]{2} ?))(([0-9]{4}-?[0-9]{4})|(9[1-9][0-9]{3}-?[0-9]{4}))$",
    )
    .expect("valid pt-BR mobile regex")
});

/// Returns `true` only when all four contact fields are acceptable.
pub fn validate(name: &str, email: &str, phone: &str, description: &str) -> bool {
    is_valid_name(name)
        && is_valid_email(email)
        && is_valid_mobile_phone(phone)
        && is_valid_description(description)
}

/// Name length must be within `3..=255` characters.
pub fn is_valid_name(name: &str) -> bool {
    (MIN_NAME_CHARS..=MAX_NAME_CHARS).contains(&name.chars().count())
}

/// Accepts `local@domain` addresses with a dotted domain and alphabetic TLD.
///
/// Quoted local parts, IP-literal domains and internationalized domains are
/// rejected.
pub fn is_valid_email(email: &str) -> bool {
    if email.chars().count() > MAX_EMAIL_CHARS {
        return false;
    }
    let Some((local, domain)) = email.rsplit_once('@') else {
        return false;
    };
    if local.len() > MAX_EMAIL_LOCAL_CHARS || !EMAIL_LOCAL_RE.is_match(local) {
        return false;
    }

    let labels = domain.split('.').collect::<Vec<_>>();
    if labels.len() < 2 {
        return false;
    }
    let Some((tld, rest)) = labels.split_last() else {
        return false;
    };
    TLD_RE.is_match(tld) && rest.iter().all(|label| DOMAIN_LABEL_RE.is_match(label))
}

/// Accepts Brazilian mobile numbers up to 30 characters.
///
/// Optional `+55` country code, a two-digit area code (bare, parenthesized
/// or with a `0` trunk prefix), then an 8-digit or `9`-prefixed 9-digit
/// subscriber number with an optional hyphen.
pub fn is_valid_mobile_phone(phone: &str) -> bool {
    phone.chars().count() <= MAX_PHONE_CHARS && PT_BR_MOBILE_RE.is_match(phone)
}

/// Description may be empty and holds at most 50 characters.
pub fn is_valid_description(description: &str) -> bool {
    description.chars().count() <= MAX_DESCRIPTION_CHARS
}

/// Lookup ids must be a non-empty run of ASCII decimal digits.
///
/// Signs, decimals, whitespace and anything else are rejected before any
/// query is built.
pub fn is_valid_contact_id(id: &str) -> bool {
    !id.is_empty() && id.bytes().all(|byte| byte.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::{
        is_valid_contact_id, is_valid_description, is_valid_email, is_valid_mobile_phone,
        is_valid_name, validate,
    };

    #[test]
    fn name_length_bounds_are_inclusive() {
        assert!(!is_valid_name("Al"));
        assert!(is_valid_name("Ana"));
        assert!(is_valid_name(&"a".repeat(255)));
        assert!(!is_valid_name(&"a".repeat(256)));
    }

    #[test]
    fn name_length_counts_characters_not_bytes() {
        assert!(is_valid_name("Zoë"));
        assert!(!is_valid_name("Jõ"));
    }

    #[test]
    fn email_accepts_common_addresses() {
        for email in [
            "ana@example.com",
            "first.last@mail.example.com.br",
            "user+tag@sub-domain.example.org",
            "o'neil@example.io",
        ] {
            assert!(is_valid_email(email), "{email} should be accepted");
        }
    }

    #[test]
    fn email_rejects_malformed_addresses() {
        for email in [
            "",
            "x@x",
            "plainaddress",
            "@example.com",
            "ana@",
            "ana@.com",
            "ana@example.",
            "ana@example.c",
            "ana@example.123",
            ".ana@example.com",
            "ana.@example.com",
            "an..a@example.com",
            "ana@-example.com",
            "ana@example-.com",
            "ana@exa mple.com",
            "ana example@example.com",
        ] {
            assert!(!is_valid_email(email), "{email} should be rejected");
        }
    }

    #[test]
    fn email_rejects_overlong_local_part() {
        let email = format!("{}@example.com", "a".repeat(65));
        assert!(!is_valid_email(&email));
    }

    #[test]
    fn mobile_phone_accepts_brazilian_shapes() {
        for phone in [
            "+5511987654321",
            "5511987654321",
            "+55 11 98765-4321",
            "+55 (11) 98765-4321",
            "(11) 98765-4321",
            "011 987654321",
            "11987654321",
            "1133334444",
        ] {
            assert!(is_valid_mobile_phone(phone), "{phone} should be accepted");
        }
    }

    #[test]
    fn mobile_phone_rejects_other_shapes() {
        for phone in [
            "",
            "123",
            "+1 415 555 0100",
            "11 90765-4321",
            "00 98765-4321",
            "+55 11 98765-4321 ext",
            "not a phone",
            "11\u{0668}\u{0667}\u{0666}\u{0665}\u{0664}\u{0663}\u{0662}\u{0661}",
            "+55 11 \u{FF19}8765-4321",
            "(11) \u{0969}\u{0968}\u{0967}\u{0966}-4321",
        ] {
            assert!(!is_valid_mobile_phone(phone), "{phone} should be rejected");
        }
    }

    #[test]
    fn description_allows_empty_and_caps_length() {
        assert!(is_valid_description(""));
        assert!(is_valid_description(&"d".repeat(50)));
        assert!(!is_valid_description(&"d".repeat(51)));
    }

    #[test]
    fn validate_is_all_or_nothing() {
        assert!(validate(
            "Ana Silva",
            "ana@example.com",
            "+5511987654321",
            "friend"
        ));
        assert!(!validate("Al", "x@x", "123", ""));
        assert!(!validate(
            "Ana Silva",
            "ana@example.com",
            "+5511987654321",
            &"d".repeat(51)
        ));
    }

    #[test]
    fn contact_id_accepts_only_digits() {
        assert!(is_valid_contact_id("1"));
        assert!(is_valid_contact_id("0042"));
        for id in ["", "-1", "1.5", " 1", "1 ", "abc", "1; DROP TABLE Contato", "١"] {
            assert!(!is_valid_contact_id(id), "{id:?} should be rejected");
        }
    }
}
