//! Arithmetic captcha challenges.
//!
//! A challenge is a random key plus a one-operation arithmetic question
//! whose expected answer is stored alongside it. Generation is pure; the
//! store/consume lifecycle lives in `vitrina-db`.

use rand::Rng;

/// Default challenge lifetime in seconds.
pub const DEFAULT_TTL_SECS: i64 = 300;

/// A freshly generated captcha challenge.
#[derive(Debug, Clone)]
pub struct Challenge {
    /// Opaque lookup key handed to the client.
    pub key: String,
    /// Human-readable question shown next to the form field.
    pub question: String,
    /// Expected answer, kept server-side.
    pub response: String,
}

/// Generate a new challenge: single-digit addition or subtraction.
///
/// Subtraction always puts the larger operand first so the answer is
/// never negative.
pub fn generate() -> Challenge {
    let mut rng = rand::rng();
    let a: i32 = rng.random_range(1..=9);
    let b: i32 = rng.random_range(1..=9);

    let (question, answer) = if rng.random_bool(0.5) {
        (format!("\u{00bf}Cu\u{00e1}nto es {a} + {b}?"), a + b)
    } else {
        let (hi, lo) = if a >= b { (a, b) } else { (b, a) };
        (format!("\u{00bf}Cu\u{00e1}nto es {hi} - {lo}?"), hi - lo)
    };

    Challenge {
        key: uuid::Uuid::new_v4().simple().to_string(),
        question,
        response: answer.to_string(),
    }
}

/// Compare a submitted captcha response against the stored one.
///
/// Both sides are trimmed and compared case-insensitively.
pub fn responses_match(expected: &str, submitted: &str) -> bool {
    expected.trim().eq_ignore_ascii_case(submitted.trim())
}
