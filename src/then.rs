use super::parser::{ParseOutcome, Parser};

/// Parser combinator that runs two parsers in sequence and keeps only the second value
///
/// The first parser's value is discarded, but a failure of the first parser
/// still stops the sequence.
#[derive(Clone)]
pub struct Then<P1, P2> {
    first: P1,
    second: P2,
}

impl<P1, P2> Then<P1, P2> {
    pub fn new(first: P1, second: P2) -> Self {
        Then { first, second }
    }
}

impl<'code, P1, P2> Parser<'code> for Then<P1, P2>
where
    P1: Parser<'code>,
    P2: Parser<'code>,
{
    type Output = P2::Output;

    fn parse(&self, input: &'code str) -> ParseOutcome<'code, Self::Output> {
        let (_, remaining) = self.first.parse(input)?;
        self.second.parse(remaining)
    }
}

/// Convenience function to run `first`, drop its value, then run `second`
pub fn skip<'code, P1, P2>(first: P1, second: P2) -> Then<P1, P2>
where
    P1: Parser<'code>,
    P2: Parser<'code>,
{
    Then::new(first, second)
}

/// Extension trait to add .then() method support for parsers
pub trait ThenExt<'code>: Parser<'code> + Sized {
    fn then<P>(self, second: P) -> Then<Self, P>
    where
        P: Parser<'code>,
    {
        Then::new(self, second)
    }
}

/// Implement ThenExt for all parsers
impl<'code, P> ThenExt<'code> for P where P: Parser<'code> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ParseError;
    use crate::flat_map::FlatMapExt;
    use crate::pure::pure;
    use crate::utf8::char::{any_char, char_is};

    #[test]
    fn test_then() {
        let parser = any_char().then(pure("x"));

        assert_eq!(parser.parse("abc"), Ok(("x", "bc")));
    }

    #[test]
    fn test_then_when_first_fails() {
        let parser = any_char().then(pure("x"));

        assert_eq!(parser.parse(""), Err(ParseError::UnexpectedEndOfInput));
    }

    #[test]
    fn test_skip_function_syntax() {
        let parser = skip(char_is('#'), any_char());

        assert_eq!(parser.parse("#!?"), Ok(('!', "?")));
        assert_eq!(parser.parse("!?"), Err(ParseError::UnexpectedCharacter('!')));
    }

    #[test]
    fn test_then_matches_flat_map_ignoring_value() {
        for input in ["", "a", "ab"] {
            let via_then = any_char().then(any_char());
            let via_flat_map = any_char().flat_map(|_| any_char());
            assert_eq!(via_then.parse(input), via_flat_map.parse(input));
        }
    }
}
