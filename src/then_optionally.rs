use super::parser::{ParseOutcome, Parser};

/// Parser that runs another parser zero or one times
///
/// Never fails: when the inner parser fails the result is `None` and the input
/// is left untouched.
#[derive(Clone)]
pub struct Optional<P> {
    parser: P,
}

impl<P> Optional<P> {
    pub fn new(parser: P) -> Self {
        Optional { parser }
    }
}

impl<'code, P> Parser<'code> for Optional<P>
where
    P: Parser<'code>,
{
    type Output = Option<P::Output>;

    fn parse(&self, input: &'code str) -> ParseOutcome<'code, Self::Output> {
        match self.parser.parse(input) {
            Ok((value, remaining)) => Ok((Some(value), remaining)),
            Err(_) => Ok((None, input)),
        }
    }
}

/// Convenience function to create an Optional parser
pub fn optional<'code, P>(parser: P) -> Optional<P>
where
    P: Parser<'code>,
{
    Optional::new(parser)
}

/// Parser combinator that sequences two parsers where the second is optional
///
/// Returns a tuple with the first parser's result and an Option containing the second
/// parser's result (Some if it succeeded, None if it failed).
///
/// Example:
/// ```
/// use charcomb::{char_is, natural, Parser};
/// use charcomb::then_optionally::ThenOptionallyExt;
///
/// let parser = natural().then_optionally(char_is('.'));
///
/// let ((number, dot), rest) = parser.parse("123.456").unwrap();
/// assert_eq!(number, 123);
/// assert_eq!(dot, Some('.'));
/// assert_eq!(rest, "456");
///
/// let ((number, dot), rest) = parser.parse("123xyz").unwrap();
/// assert_eq!(number, 123);
/// assert_eq!(dot, None);
/// assert_eq!(rest, "xyz");
/// ```
#[derive(Clone)]
pub struct ThenOptionally<P1, P2> {
    parser1: P1,
    parser2: Optional<P2>,
}

impl<P1, P2> ThenOptionally<P1, P2> {
    pub fn new(parser1: P1, parser2: P2) -> Self {
        ThenOptionally {
            parser1,
            parser2: Optional::new(parser2),
        }
    }
}

impl<'code, P1, P2> Parser<'code> for ThenOptionally<P1, P2>
where
    P1: Parser<'code>,
    P2: Parser<'code>,
{
    type Output = (P1::Output, Option<P2::Output>);

    fn parse(&self, input: &'code str) -> ParseOutcome<'code, Self::Output> {
        let (result1, input) = self.parser1.parse(input)?;
        let (result2, input) = self.parser2.parse(input)?;
        Ok(((result1, result2), input))
    }
}

/// Convenience function to create a ThenOptionally parser
pub fn then_optionally<'code, P1, P2>(parser1: P1, parser2: P2) -> ThenOptionally<P1, P2>
where
    P1: Parser<'code>,
    P2: Parser<'code>,
{
    ThenOptionally::new(parser1, parser2)
}

/// Extension trait to add .then_optionally() method support for parsers
pub trait ThenOptionallyExt<'code>: Parser<'code> + Sized {
    fn then_optionally<P>(self, other: P) -> ThenOptionally<Self, P>
    where
        P: Parser<'code>,
    {
        ThenOptionally::new(self, other)
    }
}

/// Implement ThenOptionallyExt for all parsers
impl<'code, P> ThenOptionallyExt<'code> for P where P: Parser<'code> {}
