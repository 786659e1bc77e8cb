//! Candidate validators.
//!
//! A validator is a domain check applied to a pattern's raw match before it
//! becomes a candidate: checksum gates for card and routing numbers, length
//! gates for phones, and a context heuristic for bank accounts. Validators
//! are a closed enum rather than bare function pointers so the catalog stays
//! plain data with static dispatch; callers hook in with [`Validator::Custom`].

use std::fmt;
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::sync::Arc;

/// Caller-supplied validation callback for custom patterns.
pub type CustomValidatorFn = Arc<dyn Fn(&str) -> bool + Send + Sync>;

/// Domain check applied to a raw pattern match.
#[derive(Clone)]
pub enum Validator {
    /// Accept every match.
    None,
    /// Luhn mod-10 checksum over the digits, digit count in [13, 19].
    Luhn,
    /// Stripped digit count in [10, 15].
    PhoneLength,
    /// Bank-account heuristic: digit count in [8, 17], year and zip-code
    /// look-alikes rejected, context keyword or a ten-digit floor required.
    BankAccount,
    /// Exactly 9 digits, accepted on a context keyword or the ABA mod-10
    /// weighted checksum.
    RoutingChecksum,
    /// Caller-supplied callback. A panicking callback rejects the one
    /// candidate under test; it never aborts the scan.
    Custom(CustomValidatorFn),
}

impl Validator {
    /// Returns true when the matched text passes this validator.
    #[must_use]
    pub fn accept(&self, matched: &str) -> bool {
        match self {
            Validator::None => true,
            Validator::Luhn => luhn_check(matched),
            Validator::PhoneLength => {
                let count = digits(matched).len();
                (10..=15).contains(&count)
            }
            Validator::BankAccount => bank_account_check(matched),
            Validator::RoutingChecksum => routing_check(matched),
            Validator::Custom(callback) => {
                catch_unwind(AssertUnwindSafe(|| callback(matched))).unwrap_or(false)
            }
        }
    }
}

impl fmt::Debug for Validator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Validator::None => "None",
            Validator::Luhn => "Luhn",
            Validator::PhoneLength => "PhoneLength",
            Validator::BankAccount => "BankAccount",
            Validator::RoutingChecksum => "RoutingChecksum",
            Validator::Custom(_) => "Custom(..)",
        };
        write!(f, "Validator::{name}")
    }
}

/// Extracts the decimal digits of `text` in order.
fn digits(text: &str) -> Vec<u32> {
    text.chars().filter_map(|c| c.to_digit(10)).collect()
}

/// Luhn mod-10 checksum with a card-number length gate.
fn luhn_check(matched: &str) -> bool {
    let digits = digits(matched);
    if !(13..=19).contains(&digits.len()) {
        return false;
    }
    let mut sum = 0u32;
    // Double every second digit from the right.
    for (i, &d) in digits.iter().rev().enumerate() {
        let mut d = d;
        if i % 2 == 1 {
            d *= 2;
            if d > 9 {
                d -= 9;
            }
        }
        sum += d;
    }
    sum % 10 == 0
}

fn bank_account_check(matched: &str) -> bool {
    let digits = digits(matched);
    let count = digits.len();
    if !(8..=17).contains(&count) {
        return false;
    }
    // Year and zip-code look-alikes are noise, not account numbers.
    if count == 4 {
        let value: u32 = digits.iter().fold(0, |acc, &d| acc * 10 + d);
        if (1900..=2100).contains(&value) {
            return false;
        }
    }
    if count == 5 {
        return false;
    }
    let context = matched.to_lowercase();
    if context.contains("account") || context.contains("acct") {
        return true;
    }
    // Without a context keyword, short digit runs are too ambiguous.
    count >= 10
}

fn routing_check(matched: &str) -> bool {
    let digits = digits(matched);
    if digits.len() != 9 {
        return false;
    }
    let context = matched.to_lowercase();
    if context.contains("routing") || context.contains("aba") {
        return true;
    }
    aba_checksum(&digits)
}

/// ABA mod-10 weighted checksum:
/// `3(d1+d4+d7) + 7(d2+d5+d8) + (d3+d6+d9) ≡ 0 (mod 10)`.
fn aba_checksum(d: &[u32]) -> bool {
    debug_assert_eq!(d.len(), 9);
    let sum = 3 * (d[0] + d[3] + d[6]) + 7 * (d[1] + d[4] + d[7]) + (d[2] + d[5] + d[8]);
    sum % 10 == 0
}
