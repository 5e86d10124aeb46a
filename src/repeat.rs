use super::parser::{ParseOutcome, Parser};

/// Parser combinator that applies a parser as many times as it can
///
/// The first `min` applications are required: if one of them fails, its error is
/// returned. After that the first failure simply ends the repetition and the input
/// it was given is left untouched.
///
/// A successful application that consumes nothing ends the repetition after its
/// value is recorded, so a parser that can succeed on empty input cannot loop forever.
#[derive(Clone)]
pub struct Repeat<P> {
    parser: P,
    min: usize,
}

impl<P> Repeat<P> {
    pub fn new(parser: P, min: usize) -> Self {
        Repeat { parser, min }
    }
}

impl<'code, P> Parser<'code> for Repeat<P>
where
    P: Parser<'code>,
{
    type Output = Vec<P::Output>;

    fn parse(&self, mut input: &'code str) -> ParseOutcome<'code, Self::Output> {
        let mut results = Vec::new();

        loop {
            match self.parser.parse(input) {
                Ok((value, remaining)) => {
                    results.push(value);
                    let consumed = remaining.len() < input.len();
                    input = remaining;
                    if !consumed && results.len() >= self.min {
                        log::trace!("repetition stopped: parser consumed no input");
                        break;
                    }
                }
                Err(error) if results.len() < self.min => return Err(error),
                Err(error) => {
                    log::trace!("repetition stopped after {} items: {error}", results.len());
                    break;
                }
            }
        }

        Ok((results, input))
    }
}

/// Zero or more applications of `parser`; never fails
pub fn list<'code, P>(parser: P) -> Repeat<P>
where
    P: Parser<'code>,
{
    Repeat::new(parser, 0)
}

/// One or more applications of `parser`; fails only if the first application fails
pub fn at_least1<'code, P>(parser: P) -> Repeat<P>
where
    P: Parser<'code>,
{
    Repeat::new(parser, 1)
}

/// Extension trait to add .list() and .at_least1() method support for parsers
pub trait RepeatExt<'code>: Parser<'code> + Sized {
    fn list(self) -> Repeat<Self> {
        Repeat::new(self, 0)
    }

    fn at_least1(self) -> Repeat<Self> {
        Repeat::new(self, 1)
    }
}

/// Implement RepeatExt for all parsers
impl<'code, P> RepeatExt<'code> for P where P: Parser<'code> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ParseError;
    use crate::pure::pure;
    use crate::utf8::char::{any_char, char_is};
    use crate::utf8::digit::digit;

    #[test]
    fn test_list() {
        let parser = list(any_char());

        assert_eq!(parser.parse("abc"), Ok((vec!['a', 'b', 'c'], "")));
    }

    #[test]
    fn test_list_with_no_input() {
        let parser = list(any_char());

        assert_eq!(parser.parse(""), Ok((vec![], "")));
    }

    #[test]
    fn test_list_zero_matches_keeps_input() {
        let parser = list(char_is('a'));

        assert_eq!(parser.parse("xyz"), Ok((vec![], "xyz")));
    }

    #[test]
    fn test_list_stops_at_first_mismatch() {
        let parser = digit().list();

        assert_eq!(parser.parse("12ab3"), Ok((vec!['1', '2'], "ab3")));
    }

    #[test]
    fn test_at_least1() {
        let parser = at_least1(any_char());

        assert_eq!(parser.parse("abc"), Ok((vec!['a', 'b', 'c'], "")));
    }

    #[test]
    fn test_at_least1_with_no_input() {
        let parser = at_least1(any_char());

        assert_eq!(parser.parse(""), Err(ParseError::UnexpectedEndOfInput));
    }

    #[test]
    fn test_at_least1_reports_first_error() {
        let parser = char_is('a').at_least1();

        assert_eq!(parser.parse("bcd"), Err(ParseError::UnexpectedCharacter('b')));
    }

    #[test]
    fn test_zero_width_parser_terminates() {
        let parser = list(pure(1));

        assert_eq!(parser.parse("abc"), Ok((vec![1], "abc")));
    }

    #[test]
    fn test_long_input_does_not_overflow() {
        let input = "a".repeat(200_000);
        let parser = list(char_is('a'));

        let (items, rest) = parser.parse(&input).unwrap();
        assert_eq!(items.len(), 200_000);
        assert_eq!(rest, "");
    }
}
