use crate::ParseError;
use crate::parser::{ParseOutcome, Parser};

/// Parser that succeeds only at the end of the input
#[derive(Debug, Clone, Copy)]
pub struct Eof;

impl<'code> Parser<'code> for Eof {
    type Output = ();

    fn parse(&self, input: &'code str) -> ParseOutcome<'code, Self::Output> {
        if input.is_empty() {
            Ok(((), input))
        } else {
            Err(ParseError::ExpectedEndOfInput(input.to_owned()))
        }
    }
}

/// Convenience function to create an Eof parser
pub fn eof() -> Eof {
    Eof
}

/// Parser that requires another parser to consume all of its input
///
/// ```
/// use charcomb::{complete, natural, ParseError, Parser};
///
/// assert_eq!(complete(natural()).parse("42"), Ok((42, "")));
/// assert_eq!(
///     complete(natural()).parse("42 apples"),
///     Err(ParseError::ExpectedEndOfInput(" apples".to_string()))
/// );
/// ```
#[derive(Clone)]
pub struct Complete<P> {
    parser: P,
}

impl<P> Complete<P> {
    pub fn new(parser: P) -> Self {
        Complete { parser }
    }
}

impl<'code, P> Parser<'code> for Complete<P>
where
    P: Parser<'code>,
{
    type Output = P::Output;

    fn parse(&self, input: &'code str) -> ParseOutcome<'code, Self::Output> {
        let (value, remaining) = self.parser.parse(input)?;
        if let Err(error) = eof().parse(remaining) {
            log::trace!("complete: {} characters left over", remaining.chars().count());
            return Err(error);
        }
        Ok((value, remaining))
    }
}

/// Convenience function to create a Complete parser
pub fn complete<'code, P>(parser: P) -> Complete<P>
where
    P: Parser<'code>,
{
    Complete::new(parser)
}
