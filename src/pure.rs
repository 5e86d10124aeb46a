use super::parser::{ParseOutcome, Parser};
use crate::ParseError;
use std::borrow::Cow;
use std::marker::PhantomData;

/// Parser that always succeeds with a copy of its value without consuming input
#[derive(Clone)]
pub struct Pure<T> {
    value: T,
}

impl<T> Pure<T> {
    pub fn new(value: T) -> Self {
        Pure { value }
    }
}

impl<'code, T> Parser<'code> for Pure<T>
where
    T: Clone,
{
    type Output = T;

    fn parse(&self, input: &'code str) -> ParseOutcome<'code, Self::Output> {
        Ok((self.value.clone(), input))
    }
}

/// Convenience function to create a Pure parser
pub fn pure<T>(value: T) -> Pure<T>
where
    T: Clone,
{
    Pure::new(value)
}

/// Parser that always fails with the same error without consuming input
pub struct Fail<T> {
    error: ParseError,
    _phantom: PhantomData<fn() -> T>,
}

impl<T> Fail<T> {
    pub fn new(error: ParseError) -> Self {
        Fail {
            error,
            _phantom: PhantomData,
        }
    }
}

impl<T> Clone for Fail<T> {
    fn clone(&self) -> Self {
        Fail::new(self.error.clone())
    }
}

impl<'code, T> Parser<'code> for Fail<T> {
    type Output = T;

    fn parse(&self, _input: &'code str) -> ParseOutcome<'code, Self::Output> {
        Err(self.error.clone())
    }
}

/// Parser that always fails with a generic "Parse failed" error
pub fn fail<T>() -> Fail<T> {
    Fail::new(ParseError::custom("Parse failed"))
}

/// Parser that always fails with a custom message
pub fn fail_with<T>(message: impl Into<Cow<'static, str>>) -> Fail<T> {
    Fail::new(ParseError::custom(message))
}

/// Parser that always fails reporting `c` as the unexpected character
pub fn unexpected_char<T>(c: char) -> Fail<T> {
    Fail::new(ParseError::UnexpectedCharacter(c))
}
