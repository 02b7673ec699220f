//! Input format checks for registration numbers and contact phones.
//!
//! Both are synchronous pure predicates: they never fail, never allocate
//! user-visible state, and leave it to callers to surface messages.

/// Required digit count for a contact phone, after stripping formatting.
pub const PHONE_DIGITS: usize = 10;

/// Outcome of a phone-number check. `TooShort`/`TooLong` carry advisory
/// detail for inline feedback; only [`PhoneCheck::Valid`] passes submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhoneCheck {
    Valid,
    TooShort { missing: usize },
    TooLong,
}

impl PhoneCheck {
    pub fn is_valid(&self) -> bool {
        matches!(self, PhoneCheck::Valid)
    }

    /// Advisory text for an invalid phone, `None` when valid.
    pub fn advice(&self) -> Option<String> {
        match self {
            PhoneCheck::Valid => None,
            PhoneCheck::TooShort { missing: 1 } => Some("Need 1 more digit".to_string()),
            PhoneCheck::TooShort { missing } => Some(format!("Need {} more digits", missing)),
            PhoneCheck::TooLong => Some("Phone number is too long".to_string()),
        }
    }
}

/// Strips non-digit characters and checks for exactly [`PHONE_DIGITS`] digits.
pub fn check_phone(s: &str) -> PhoneCheck {
    let digits = s.chars().filter(|c| c.is_ascii_digit()).count();
    match digits.cmp(&PHONE_DIGITS) {
        std::cmp::Ordering::Equal => PhoneCheck::Valid,
        std::cmp::Ordering::Less => PhoneCheck::TooShort {
            missing: PHONE_DIGITS - digits,
        },
        std::cmp::Ordering::Greater => PhoneCheck::TooLong,
    }
}

pub fn is_valid_phone(s: &str) -> bool {
    check_phone(s).is_valid()
}

/// True iff the uppercased input matches `[7892]\d[A-Z]{2,3}\d{4}`:
/// a program/institution digit from {7,8,9,2}, one more digit, a 2–3 letter
/// program code, and a 4-digit serial. Examples: 22BCE9126, 23CS1234.
pub fn is_valid_registration_number(s: &str) -> bool {
    let s = s.trim().to_uppercase();
    let b = s.as_bytes();
    if !(8..=9).contains(&b.len()) {
        return false;
    }
    if !matches!(b[0], b'7' | b'8' | b'9' | b'2') {
        return false;
    }
    if !b[1].is_ascii_digit() {
        return false;
    }
    let letters = &b[2..b.len() - 4];
    if !letters.iter().all(|c| c.is_ascii_uppercase()) {
        return false;
    }
    b[b.len() - 4..].iter().all(|c| c.is_ascii_digit())
}
