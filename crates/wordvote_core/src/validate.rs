//! Request parameter validation.
//!
//! Every parameter must already be in canonical form: parsing it and
//! printing it back has to reproduce the raw string exactly. This rejects
//! inputs that a lenient parser would silently accept, such as `"3abc"`,
//! `"+3"`, `"007"` or `"Cat"`.

use crate::error::{CoreError, CoreResult, InvalidField};

/// Raw, untrusted request parameters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawSubmission {
    /// Slot identifier (`s`).
    pub slot: String,
    /// Word guess (`i`).
    pub word: String,
    /// User identifier (`u`).
    pub user_id: String,
}

impl RawSubmission {
    /// Creates raw parameters from anything string-like.
    pub fn new(slot: impl Into<String>, word: impl Into<String>, user_id: impl Into<String>) -> Self {
        Self {
            slot: slot.into(),
            word: word.into(),
            user_id: user_id.into(),
        }
    }
}

/// Parameters that passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedInput {
    /// Slot identifier.
    pub slot: u64,
    /// Word, one or more ASCII lowercase letters.
    pub word: String,
    /// User identifier.
    pub user_id: u16,
}

/// Validates raw parameters.
///
/// # Errors
///
/// Returns [`CoreError::InvalidInput`] if any parameter is rejected. The
/// first failing field is recorded in the error for logging.
pub fn validate(raw: &RawSubmission) -> CoreResult<ValidatedInput> {
    let slot = validate_slot(&raw.slot).ok_or(CoreError::InvalidInput(InvalidField::Slot))?;
    let word = validate_word(&raw.word).ok_or(CoreError::InvalidInput(InvalidField::Word))?;
    let user_id =
        validate_user_id(&raw.user_id).ok_or(CoreError::InvalidInput(InvalidField::UserId))?;

    Ok(ValidatedInput {
        slot,
        word,
        user_id,
    })
}

fn validate_slot(raw: &str) -> Option<u64> {
    let value = parse_canonical_int(raw)?;
    u64::try_from(value).ok()
}

fn validate_user_id(raw: &str) -> Option<u16> {
    let value = parse_canonical_int(raw)?;
    u16::try_from(value).ok()
}

fn validate_word(raw: &str) -> Option<String> {
    let folded = raw.to_ascii_lowercase();
    let well_formed = !folded.is_empty() && folded.bytes().all(|b| b.is_ascii_lowercase());

    // Uppercase input is rejected even though it folds to a valid word.
    (well_formed && folded == raw).then_some(folded)
}

/// Parses an integer and accepts it only if it prints back as `raw`.
fn parse_canonical_int(raw: &str) -> Option<i64> {
    let value = parse_int_prefix(raw);
    (value.to_string() == raw).then_some(value)
}

/// Lenient integer parsing: optional leading whitespace and sign, then the
/// longest run of decimal digits. No digits parses as 0; overflow saturates.
fn parse_int_prefix(raw: &str) -> i64 {
    let trimmed = raw.trim_start();
    let (negative, digits) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let mut value: i64 = 0;
    for b in digits.bytes().take_while(u8::is_ascii_digit) {
        let digit = i64::from(b - b'0');
        let next = value.checked_mul(10).and_then(|v| {
            if negative {
                v.checked_sub(digit)
            } else {
                v.checked_add(digit)
            }
        });
        match next {
            Some(v) => value = v,
            None => return if negative { i64::MIN } else { i64::MAX },
        }
    }
    value
}
