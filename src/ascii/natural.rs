use crate::ParseError;
use crate::parser::{ParseOutcome, Parser};
use crate::repeat::at_least1;
use crate::utf8::digit::digit;

/// Parser that matches one or more ASCII digits and returns them as a u64
///
/// Leading zeros are accepted. A digit run whose value does not fit a u64 is a
/// failure rather than a wrapped or saturated value.
#[derive(Debug, Clone, Copy)]
pub struct Natural;

impl<'code> Parser<'code> for Natural {
    type Output = u64;

    fn parse(&self, input: &'code str) -> ParseOutcome<'code, Self::Output> {
        let (digits, remaining) = at_least1(digit()).parse(input)?;

        let value = digits
            .iter()
            .try_fold(0u64, |acc, ch| {
                let digit_value = ch.to_digit(10)?;
                acc.checked_mul(10)?.checked_add(u64::from(digit_value))
            })
            .ok_or_else(|| ParseError::custom("natural number out of range"))?;

        Ok((value, remaining))
    }
}

/// Convenience function to create a Natural parser
pub fn natural() -> Natural {
    Natural
}
