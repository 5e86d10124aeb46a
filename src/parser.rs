use crate::error::ParseError;
use std::rc::Rc;

/// Result of running a parser: the produced value and the remaining input,
/// or the error that stopped it.
///
/// On success the remaining input is always a suffix of the input that was
/// handed to the parser.
pub type ParseOutcome<'code, T> = Result<(T, &'code str), ParseError>;

/// Core parser trait for parser combinators
pub trait Parser<'code> {
    type Output;

    /// Attempt to parse from the start of `input`
    ///
    /// Returns Ok with the parsed value and the unconsumed rest of the input on success,
    /// or Err if the parse fails. Failures carry no input, so they never consume any.
    fn parse(&self, input: &'code str) -> ParseOutcome<'code, Self::Output>;
}

/// Any function from input to outcome is a parser
impl<'code, T, F> Parser<'code> for F
where
    F: Fn(&'code str) -> ParseOutcome<'code, T>,
{
    type Output = T;

    fn parse(&self, input: &'code str) -> ParseOutcome<'code, Self::Output> {
        self(input)
    }
}

/// A type-erased, cheaply clonable parser
///
/// Useful when parsers of different concrete types need to be stored together,
/// e.g. in the list handed to [`crate::sequence()`], or returned from the
/// branches of a [`crate::flat_map::FlatMapExt::flat_map`] closure.
pub struct BoxedParser<'code, T> {
    inner: Rc<dyn Parser<'code, Output = T> + 'code>,
}

impl<'code, T> BoxedParser<'code, T> {
    pub fn new<P>(parser: P) -> Self
    where
        P: Parser<'code, Output = T> + 'code,
    {
        BoxedParser {
            inner: Rc::new(parser),
        }
    }
}

impl<'code, T> Clone for BoxedParser<'code, T> {
    fn clone(&self) -> Self {
        BoxedParser {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<'code, T> Parser<'code> for BoxedParser<'code, T> {
    type Output = T;

    fn parse(&self, input: &'code str) -> ParseOutcome<'code, Self::Output> {
        self.inner.parse(input)
    }
}

/// Extension trait to add .boxed() method support for parsers
pub trait BoxedExt<'code>: Parser<'code> + Sized {
    fn boxed(self) -> BoxedParser<'code, Self::Output>
    where
        Self: 'code,
    {
        BoxedParser::new(self)
    }
}

/// Implement BoxedExt for all parsers
impl<'code, P> BoxedExt<'code> for P where P: Parser<'code> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pure::pure;
    use crate::utf8::char::any_char;

    fn first_two(input: &str) -> ParseOutcome<'_, (char, char)> {
        let mut chars = input.chars();
        match (chars.next(), chars.next()) {
            (Some(a), Some(b)) => Ok(((a, b), chars.as_str())),
            _ => Err(ParseError::UnexpectedEndOfInput),
        }
    }

    #[test]
    fn test_function_is_parser() {
        assert_eq!(first_two.parse("abc"), Ok((('a', 'b'), "c")));
        assert_eq!(first_two.parse("a"), Err(ParseError::UnexpectedEndOfInput));
    }

    #[test]
    fn test_closure_is_parser() {
        let parser = |input: &'static str| -> ParseOutcome<'static, usize> { Ok((input.len(), "")) };

        assert_eq!(parser.parse("four"), Ok((4, "")));
    }

    #[test]
    fn test_boxed_parsers_share_a_type() {
        let parsers: Vec<BoxedParser<'_, char>> = vec![any_char().boxed(), pure('z').boxed()];

        assert_eq!(parsers[0].parse("ab"), Ok(('a', "b")));
        assert_eq!(parsers[1].parse("ab"), Ok(('z', "ab")));
    }

    #[test]
    fn test_boxed_clone_runs_same_parser() {
        let parser = any_char().boxed();
        let copy = parser.clone();

        assert_eq!(parser.parse("xy"), copy.parse("xy"));
    }
}
