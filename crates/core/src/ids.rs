//! Best-effort unique ids for locally created records.

use chrono::Utc;
use rand::distr::{Alphanumeric, SampleString};

const SUFFIX_LEN: usize = 8;

/// Generate an opaque record id: the current millisecond timestamp in
/// base 36, plus a random alphanumeric suffix.
///
/// Uniqueness is probabilistic, not guaranteed; at point-of-sale volumes a
/// collision within the same millisecond is vanishingly unlikely.
#[must_use]
pub fn generate_id() -> String {
    #[allow(clippy::cast_sign_loss)] // clock is well past the epoch
    let millis = Utc::now().timestamp_millis().max(0) as u64;
    let suffix = Alphanumeric
        .sample_string(&mut rand::rng(), SUFFIX_LEN)
        .to_lowercase();
    format!("{}-{suffix}", to_base36(millis))
}

fn to_base36(mut value: u64) -> String {
    if value == 0 {
        return "0".to_string();
    }
    let mut out = String::new();
    while value > 0 {
        #[allow(clippy::cast_possible_truncation)]
        let digit = (value % 36) as u8;
        let c = if digit < 10 { b'0' + digit } else { b'a' + digit - 10 };
        out.push(char::from(c));
        value /= 36;
    }
    out.chars().rev().collect()
}
