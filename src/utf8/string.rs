use crate::ParseError;
use crate::parser::{ParseOutcome, Parser};
use crate::utf8::char::any_char;
use std::borrow::Cow;

/// Parser that matches an exact string character by character
///
/// Fails on the first character that differs, reporting it as unexpected, or with
/// [`ParseError::UnexpectedEndOfInput`] if the input stops short.
#[derive(Clone)]
pub struct IsStringParser {
    expected: Cow<'static, str>,
}

impl IsStringParser {
    pub fn new(expected: impl Into<Cow<'static, str>>) -> Self {
        Self {
            expected: expected.into(),
        }
    }
}

impl<'code> Parser<'code> for IsStringParser {
    type Output = Cow<'static, str>;

    fn parse(&self, input: &'code str) -> ParseOutcome<'code, Self::Output> {
        let mut remaining = input;

        for expected_char in self.expected.chars() {
            let (parsed_char, rest) = any_char().parse(remaining)?;
            if parsed_char != expected_char {
                return Err(ParseError::UnexpectedCharacter(parsed_char));
            }
            remaining = rest;
        }

        Ok((self.expected.clone(), remaining))
    }
}

/// Convenience function to create an IsStringParser
pub fn is_string(expected: impl Into<Cow<'static, str>>) -> IsStringParser {
    IsStringParser::new(expected)
}
