use super::parser::{ParseOutcome, Parser};

/// Parser combinator that runs a list of parsers one after another and collects their values
///
/// Each parser starts where the previous one stopped. The first failure is returned
/// immediately; the parsers after it are never run.
#[derive(Clone)]
pub struct Sequence<P> {
    parsers: Vec<P>,
}

impl<P> Sequence<P> {
    pub fn new(parsers: Vec<P>) -> Self {
        Sequence { parsers }
    }
}

impl<'code, P> Parser<'code> for Sequence<P>
where
    P: Parser<'code>,
{
    type Output = Vec<P::Output>;

    fn parse(&self, mut input: &'code str) -> ParseOutcome<'code, Self::Output> {
        let mut results = Vec::with_capacity(self.parsers.len());

        for (index, parser) in self.parsers.iter().enumerate() {
            match parser.parse(input) {
                Ok((value, remaining)) => {
                    results.push(value);
                    input = remaining;
                }
                Err(error) => {
                    log::trace!("sequence failed at parser {index}: {error}");
                    return Err(error);
                }
            }
        }

        Ok((results, input))
    }
}

/// Convenience function to create a Sequence parser
///
/// Parsers of different concrete types can be mixed by boxing them first:
/// ```
/// use charcomb::{any_char, char_is, sequence, upper, BoxedExt, Parser};
///
/// let parser = sequence(vec![any_char().boxed(), char_is('x').boxed(), upper().boxed()]);
/// assert_eq!(parser.parse("axCdef"), Ok((vec!['a', 'x', 'C'], "def")));
/// ```
pub fn sequence<'code, P>(parsers: Vec<P>) -> Sequence<P>
where
    P: Parser<'code>,
{
    Sequence::new(parsers)
}

/// Exactly `count` applications of `parser`
pub fn exactly<'code, P>(count: usize, parser: P) -> Sequence<P>
where
    P: Parser<'code> + Clone,
{
    Sequence::new(vec![parser; count])
}
