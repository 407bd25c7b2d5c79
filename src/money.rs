//! Amounts of money.
//!
//! Every wallet, bet and payout in this crate is a whole number of cents.

use core::fmt;

use crate::error::BetError;

/// Cents per currency unit.
pub const CENTS_PER_UNIT: usize = 100;

/// Parses a user-entered amount such as `10`, `10.5` or `$7.25` into cents.
///
/// # Errors
///
/// Returns [`BetError::InvalidAmount`] for anything that is not a
/// non-negative number with at most two decimals.
///
/// ```
/// use bj21::money::parse_amount;
///
/// assert_eq!(parse_amount("10"), Ok(1000));
/// assert_eq!(parse_amount("2.5"), Ok(250));
/// assert!(parse_amount("-3").is_err());
/// assert!(parse_amount("ten").is_err());
/// ```
pub fn parse_amount(input: &str) -> Result<usize, BetError> {
    let input = input.trim();
    let input = input.strip_prefix('$').unwrap_or(input);
    let (whole, fraction) = input.split_once('.').unwrap_or((input, ""));

    let digits = |s: &str| s.bytes().all(|b| b.is_ascii_digit());
    if (whole.is_empty() && fraction.is_empty())
        || !digits(whole)
        || !digits(fraction)
        || fraction.len() > 2
    {
        return Err(BetError::InvalidAmount);
    }

    let whole: usize = if whole.is_empty() {
        0
    } else {
        whole.parse().map_err(|_| BetError::InvalidAmount)?
    };
    let cents: usize = match fraction.len() {
        0 => 0,
        1 => fraction.parse::<usize>().map_err(|_| BetError::InvalidAmount)? * 10,
        _ => fraction.parse().map_err(|_| BetError::InvalidAmount)?,
    };

    whole
        .checked_mul(CENTS_PER_UNIT)
        .and_then(|w| w.checked_add(cents))
        .ok_or(BetError::InvalidAmount)
}

/// Displays a number of cents as `$units.cents`.
///
/// ```
/// use bj21::money::Amount;
///
/// assert_eq!(Amount(10_050).to_string(), "$100.50");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Amount(pub usize);

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "${}.{:02}",
            self.0 / CENTS_PER_UNIT,
            self.0 % CENTS_PER_UNIT
        )
    }
}
