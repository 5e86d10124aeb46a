use crate::ParseError;
use crate::parser::{ParseOutcome, Parser};

/// Parser that consumes and returns a single character
#[derive(Debug, Clone, Copy)]
pub struct AnyChar;

impl<'code> Parser<'code> for AnyChar {
    type Output = char;

    fn parse(&self, input: &'code str) -> ParseOutcome<'code, Self::Output> {
        let mut chars = input.chars();
        match chars.next() {
            Some(c) => Ok((c, chars.as_str())),
            None => Err(ParseError::UnexpectedEndOfInput),
        }
    }
}

/// Convenience function to create an AnyChar parser
pub fn any_char() -> AnyChar {
    AnyChar
}

/// Parser that consumes a single character accepted by a predicate
///
/// A rejected character is reported as [`ParseError::UnexpectedCharacter`] and is
/// not consumed, so an alternative can still read it.
#[derive(Clone)]
pub struct Satisfy<F> {
    predicate: F,
}

impl<F> Satisfy<F> {
    pub fn new(predicate: F) -> Self {
        Satisfy { predicate }
    }
}

impl<'code, F> Parser<'code> for Satisfy<F>
where
    F: Fn(char) -> bool,
{
    type Output = char;

    fn parse(&self, input: &'code str) -> ParseOutcome<'code, Self::Output> {
        let (ch, remaining) = any_char().parse(input)?;
        if (self.predicate)(ch) {
            Ok((ch, remaining))
        } else {
            Err(ParseError::UnexpectedCharacter(ch))
        }
    }
}

/// Convenience function to create a Satisfy parser
pub fn satisfy<F>(predicate: F) -> Satisfy<F>
where
    F: Fn(char) -> bool,
{
    Satisfy::new(predicate)
}

/// Parser that matches a specific character
pub fn char_is(expected: char) -> Satisfy<impl Fn(char) -> bool + Clone> {
    satisfy(move |c| c == expected)
}

/// A single-character parser defined by a classification function
pub type CharClass = Satisfy<fn(char) -> bool>;

pub(crate) fn class(predicate: fn(char) -> bool) -> CharClass {
    satisfy(predicate)
}

pub(crate) fn chars_to_string(chars: Vec<char>) -> String {
    chars.into_iter().collect()
}
