//! Burgerservicenummer (BSN) checks and generation.
//!
//! A BSN is nine decimal digits `d0..d8`. It passes the 11-proef when
//!
//! ```text
//! 9*d0 + 8*d1 + 7*d2 + 6*d3 + 5*d4 + 4*d5 + 3*d6 + 2*d7 - 1*d8 ≡ 0 (mod 11)
//! ```
//!
//! Shorter inputs are left zero-padded to nine digits; longer ones are
//! rejected rather than truncated.

use crate::domain::ports::{DigitSource, NoopTelemetry, Telemetry};
use crate::utils::error::{Result, TestDataError};
use std::fmt;
use std::str::FromStr;

pub const BSN_LENGTH: usize = 9;

/// Retry ceiling for [`BsnValidator::generate`] unless configured otherwise.
pub const DEFAULT_MAX_ATTEMPTS: usize = 1000;

const WEIGHTS: [i32; BSN_LENGTH] = [9, 8, 7, 6, 5, 4, 3, 2, -1];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Bsn {
    digits: [u8; BSN_LENGTH],
}

impl Bsn {
    /// Parses a numeral of at most nine ASCII digits, zero-padding on the left.
    pub fn parse(numeral: &str) -> Result<Self> {
        if numeral.is_empty() {
            return Err(invalid(numeral, "empty input"));
        }
        if let Some(c) = numeral.chars().find(|c| !c.is_ascii_digit()) {
            return Err(invalid(
                numeral,
                &format!("contains non-digit character '{}'", c),
            ));
        }
        if numeral.len() > BSN_LENGTH {
            return Err(invalid(
                numeral,
                &format!("has {} digits, at most {} allowed", numeral.len(), BSN_LENGTH),
            ));
        }

        let mut digits = [0u8; BSN_LENGTH];
        let offset = BSN_LENGTH - numeral.len();
        for (slot, byte) in digits[offset..].iter_mut().zip(numeral.bytes()) {
            *slot = byte - b'0';
        }
        Ok(Self { digits })
    }

    pub fn from_number(number: u64) -> Result<Self> {
        Self::parse(&number.to_string())
    }

    pub fn from_digits(digits: [u8; BSN_LENGTH]) -> Result<Self> {
        if let Some(d) = digits.iter().find(|d| **d > 9) {
            return Err(invalid(
                &format!("{:?}", digits),
                &format!("digit value {} out of range 0-9", d),
            ));
        }
        Ok(Self { digits })
    }

    pub fn digits(&self) -> &[u8; BSN_LENGTH] {
        &self.digits
    }

    /// Weighted sum used by the 11-proef. Negative when only the last digit
    /// is non-zero.
    pub fn checksum_total(&self) -> i32 {
        self.digits
            .iter()
            .zip(WEIGHTS)
            .map(|(d, w)| i32::from(*d) * w)
            .sum()
    }

    /// Mathematical remainder of the checksum total, always in `0..11`.
    pub fn remainder(&self) -> i32 {
        self.checksum_total().rem_euclid(11)
    }

    pub fn is_valid(&self) -> bool {
        self.remainder() == 0
    }
}

impl fmt::Display for Bsn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for d in self.digits {
            write!(f, "{}", d)?;
        }
        Ok(())
    }
}

impl FromStr for Bsn {
    type Err = TestDataError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

fn invalid(value: &str, reason: &str) -> TestDataError {
    TestDataError::InvalidInput {
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Anything that can be read as a BSN candidate: numerals and integers.
pub trait IntoBsn {
    fn into_bsn(self) -> Result<Bsn>;
}

impl IntoBsn for Bsn {
    fn into_bsn(self) -> Result<Bsn> {
        Ok(self)
    }
}

impl IntoBsn for &str {
    fn into_bsn(self) -> Result<Bsn> {
        Bsn::parse(self)
    }
}

impl IntoBsn for &String {
    fn into_bsn(self) -> Result<Bsn> {
        Bsn::parse(self)
    }
}

impl IntoBsn for String {
    fn into_bsn(self) -> Result<Bsn> {
        Bsn::parse(&self)
    }
}

impl IntoBsn for u64 {
    fn into_bsn(self) -> Result<Bsn> {
        Bsn::from_number(self)
    }
}

impl IntoBsn for u32 {
    fn into_bsn(self) -> Result<Bsn> {
        Bsn::from_number(u64::from(self))
    }
}

pub struct BsnValidator<T: Telemetry = NoopTelemetry> {
    telemetry: T,
    max_attempts: usize,
}

impl BsnValidator<NoopTelemetry> {
    pub fn new() -> Self {
        Self::with_telemetry(NoopTelemetry)
    }
}

impl Default for BsnValidator<NoopTelemetry> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Telemetry> BsnValidator<T> {
    pub fn with_telemetry(telemetry: T) -> Self {
        Self {
            telemetry,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }

    pub fn with_max_attempts(mut self, max_attempts: usize) -> Self {
        self.max_attempts = max_attempts;
        self
    }

    pub fn max_attempts(&self) -> usize {
        self.max_attempts
    }

    /// Runs the 11-proef on `candidate`.
    ///
    /// Errors only for malformed input; a well-formed number that fails the
    /// checksum yields `Ok(false)`.
    pub fn validate<C: IntoBsn>(&self, candidate: C) -> Result<bool> {
        let bsn = candidate.into_bsn()?;
        Ok(self.check(&bsn))
    }

    fn check(&self, bsn: &Bsn) -> bool {
        let total = bsn.checksum_total();
        if bsn.is_valid() {
            self.telemetry
                .info(&format!("BSN {} passes the 11-proef (total {})", bsn, total));
            true
        } else {
            self.telemetry.warn(&format!(
                "BSN {} fails the 11-proef (total {}, remainder {})",
                bsn,
                total,
                bsn.remainder()
            ));
            false
        }
    }

    /// Draws random nine-digit candidates until one passes, giving up after
    /// `max_attempts` candidates.
    pub fn generate_bsn<D: DigitSource + ?Sized>(&self, source: &mut D) -> Result<Bsn> {
        for attempt in 1..=self.max_attempts {
            let mut digits = [0u8; BSN_LENGTH];
            for slot in digits.iter_mut() {
                *slot = source.next_digit();
            }
            let candidate = Bsn::from_digits(digits)?;
            if self.check(&candidate) {
                tracing::debug!("Generated BSN after {} attempt(s)", attempt);
                return Ok(candidate);
            }
        }

        Err(TestDataError::GenerationExhausted {
            attempts: self.max_attempts,
        })
    }

    /// Like [`generate_bsn`](Self::generate_bsn), rendered as a zero-padded
    /// nine-character string.
    pub fn generate<D: DigitSource + ?Sized>(&self, source: &mut D) -> Result<String> {
        self.generate_bsn(source).map(|bsn| bsn.to_string())
    }
}
