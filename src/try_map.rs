use super::parser::{ParseOutcome, Parser};
use crate::ParseError;

/// Parser that converts the output of another parser with a fallible function
///
/// When the conversion fails its error is reported and, like any failure,
/// no input is consumed.
#[derive(Clone)]
pub struct TryMap<P, F> {
    parser: P,
    mapper: F,
}

impl<P, F> TryMap<P, F> {
    pub fn new(parser: P, mapper: F) -> Self {
        Self { parser, mapper }
    }
}

impl<'code, P, F, T, U> Parser<'code> for TryMap<P, F>
where
    P: Parser<'code, Output = T>,
    F: Fn(T) -> Result<U, ParseError>,
{
    type Output = U;

    fn parse(&self, input: &'code str) -> ParseOutcome<'code, Self::Output> {
        let (value, remaining) = self.parser.parse(input)?;
        let converted = (self.mapper)(value)?;
        Ok((converted, remaining))
    }
}

/// Extension trait to add try_map method to all parsers
pub trait TryMapExt<'code>: Parser<'code> {
    fn try_map<F, U>(self, mapper: F) -> TryMap<Self, F>
    where
        Self: Sized,
        F: Fn(Self::Output) -> Result<U, ParseError>,
    {
        TryMap::new(self, mapper)
    }
}

impl<'code, P: Parser<'code>> TryMapExt<'code> for P {}

/// Convenience function to create a TryMap parser
pub fn try_map<'code, P, F, U>(parser: P, mapper: F) -> TryMap<P, F>
where
    P: Parser<'code>,
    F: Fn(P::Output) -> Result<U, ParseError>,
{
    TryMap::new(parser, mapper)
}
