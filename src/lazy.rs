use crate::parser::{ParseOutcome, Parser};

/// A lazy parser that defers the construction of the actual parser until parse time.
/// This is useful for breaking recursion between parsers.
#[derive(Clone)]
pub struct Lazy<F> {
    factory: F,
}

impl<F> Lazy<F> {
    /// Create a new lazy parser with the given factory function
    pub fn new(factory: F) -> Self {
        Self { factory }
    }
}

impl<'code, F, P> Parser<'code> for Lazy<F>
where
    F: Fn() -> P,
    P: Parser<'code>,
{
    type Output = P::Output;

    fn parse(&self, input: &'code str) -> ParseOutcome<'code, Self::Output> {
        let parser = (self.factory)();
        parser.parse(input)
    }
}

/// Create a lazy parser from a factory function
pub fn lazy<'code, F, P>(factory: F) -> Lazy<F>
where
    F: Fn() -> P,
    P: Parser<'code>,
{
    Lazy::new(factory)
}
