use super::parser::{ParseOutcome, Parser};

/// Parser combinator that sequences two parsers and returns both results as a tuple
///
/// Note: When chaining multiple `.and()` calls, this produces nested tuples like
/// `(((a, b), c), d)` rather than flat tuples like `(a, b, c, d)`.
///
/// Example:
/// ```
/// use charcomb::{and::AndExt, char_is, natural, Parser};
///
/// let (((whole, _), fraction), rest) = natural()
///     .and(char_is('.'))
///     .and(natural())
///     .parse("123.456 m")
///     .unwrap();
/// assert_eq!(whole, 123);
/// assert_eq!(fraction, 456);
/// assert_eq!(rest, " m");
/// ```
#[derive(Clone)]
pub struct And<P1, P2> {
    parser1: P1,
    parser2: P2,
}

impl<P1, P2> And<P1, P2> {
    pub fn new(parser1: P1, parser2: P2) -> Self {
        And { parser1, parser2 }
    }
}

impl<'code, P1, P2> Parser<'code> for And<P1, P2>
where
    P1: Parser<'code>,
    P2: Parser<'code>,
{
    type Output = (P1::Output, P2::Output);

    fn parse(&self, input: &'code str) -> ParseOutcome<'code, Self::Output> {
        let (result1, remaining) = self.parser1.parse(input)?;
        let (result2, remaining) = self.parser2.parse(remaining)?;
        Ok(((result1, result2), remaining))
    }
}

/// Convenience function to create an And parser
pub fn and<'code, P1, P2>(parser1: P1, parser2: P2) -> And<P1, P2>
where
    P1: Parser<'code>,
    P2: Parser<'code>,
{
    And::new(parser1, parser2)
}

/// Extension trait to add .and() method support for parsers
pub trait AndExt<'code>: Parser<'code> + Sized {
    fn and<P>(self, other: P) -> And<Self, P>
    where
        P: Parser<'code>,
    {
        And::new(self, other)
    }
}

/// Implement AndExt for all parsers
impl<'code, P> AndExt<'code> for P where P: Parser<'code> {}
