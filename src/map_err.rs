use super::parser::{ParseOutcome, Parser};
use crate::ParseError;

/// Parser combinator that transforms the error of a parser using a mapping function
#[derive(Clone)]
pub struct MapErr<P, F> {
    parser: P,
    mapper: F,
}

impl<P, F> MapErr<P, F> {
    pub fn new(parser: P, mapper: F) -> Self {
        MapErr { parser, mapper }
    }
}

impl<'code, P, F> Parser<'code> for MapErr<P, F>
where
    P: Parser<'code>,
    F: Fn(ParseError) -> ParseError,
{
    type Output = P::Output;

    fn parse(&self, input: &'code str) -> ParseOutcome<'code, Self::Output> {
        self.parser.parse(input).map_err(&self.mapper)
    }
}

/// Extension trait to add .map_err() method support for parsers
pub trait MapErrExt<'code>: Parser<'code> + Sized {
    fn map_err<F>(self, mapper: F) -> MapErr<Self, F>
    where
        F: Fn(ParseError) -> ParseError,
    {
        MapErr::new(self, mapper)
    }
}

/// Implement MapErrExt for all parsers
impl<'code, P> MapErrExt<'code> for P where P: Parser<'code> {}

/// Convenience function to create a MapErr parser
pub fn map_err<'code, P, F>(parser: P, mapper: F) -> MapErr<P, F>
where
    P: Parser<'code>,
    F: Fn(ParseError) -> ParseError,
{
    MapErr::new(parser, mapper)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utf8::char::char_is;

    #[test]
    fn test_map_err_rewrites_failure() {
        let parser = char_is('#').map_err(|e| match e {
            ParseError::UnexpectedEndOfInput => ParseError::custom("missing terminator"),
            other => other,
        });

        assert_eq!(
            parser.parse(""),
            Err(ParseError::custom("missing terminator"))
        );
        assert_eq!(parser.parse("x"), Err(ParseError::UnexpectedCharacter('x')));
    }

    #[test]
    fn test_map_err_leaves_success_alone() {
        let parser = map_err(char_is('#'), |_| ParseError::custom("unreachable"));

        assert_eq!(parser.parse("#rest"), Ok(('#', "rest")));
    }
}
