use super::parser::{ParseOutcome, Parser};

/// Parser combinator that chooses the next parser from the value of the previous one
///
/// This is the sequencing primitive of the library: the first parser runs, its
/// value is handed to `binder` to build a second parser, and that parser runs on
/// whatever input the first one left behind. A failure of the first parser is
/// returned as-is and `binder` is never called.
///
/// Example:
/// ```
/// use charcomb::{any_char, pure, BoxedExt, FlatMapExt, Parser};
///
/// // skip an 'x' and return the character after it
/// let skip_one_x = any_char().flat_map(|c| {
///     if c == 'x' { any_char().boxed() } else { pure(c).boxed() }
/// });
///
/// assert_eq!(skip_one_x.parse("xabc"), Ok(('a', "bc")));
/// assert_eq!(skip_one_x.parse("abcd"), Ok(('a', "bcd")));
/// ```
#[derive(Clone)]
pub struct FlatMap<P, F> {
    parser: P,
    binder: F,
}

impl<P, F> FlatMap<P, F> {
    pub fn new(parser: P, binder: F) -> Self {
        FlatMap { parser, binder }
    }
}

impl<'code, P, F, Q> Parser<'code> for FlatMap<P, F>
where
    P: Parser<'code>,
    F: Fn(P::Output) -> Q,
    Q: Parser<'code>,
{
    type Output = Q::Output;

    fn parse(&self, input: &'code str) -> ParseOutcome<'code, Self::Output> {
        let (value, remaining) = self.parser.parse(input)?;
        (self.binder)(value).parse(remaining)
    }
}

/// Convenience function to create a FlatMap parser
pub fn flat_map<'code, P, F, Q>(parser: P, binder: F) -> FlatMap<P, F>
where
    P: Parser<'code>,
    F: Fn(P::Output) -> Q,
    Q: Parser<'code>,
{
    FlatMap::new(parser, binder)
}

/// Extension trait to add .flat_map() method support for parsers
pub trait FlatMapExt<'code>: Parser<'code> + Sized {
    fn flat_map<F, Q>(self, binder: F) -> FlatMap<Self, F>
    where
        F: Fn(Self::Output) -> Q,
        Q: Parser<'code>,
    {
        FlatMap::new(self, binder)
    }
}

/// Implement FlatMapExt for all parsers
impl<'code, P> FlatMapExt<'code> for P where P: Parser<'code> {}
