use super::parser::{ParseOutcome, Parser};

/// Parser combinator that tries the first parser, and if it fails, tries the second parser
///
/// The second parser always starts from the original input. Since failing parsers
/// never consume input, no extra backtracking state is needed. When both fail the
/// second parser's error is reported.
#[derive(Clone)]
pub struct Or<P1, P2> {
    parser1: P1,
    parser2: P2,
}

impl<P1, P2> Or<P1, P2> {
    pub fn new(parser1: P1, parser2: P2) -> Self {
        Or { parser1, parser2 }
    }
}

impl<'code, P1, P2, O> Parser<'code> for Or<P1, P2>
where
    P1: Parser<'code, Output = O>,
    P2: Parser<'code, Output = O>,
{
    type Output = O;

    fn parse(&self, input: &'code str) -> ParseOutcome<'code, Self::Output> {
        match self.parser1.parse(input) {
            Ok(result) => Ok(result),
            Err(error) => {
                log::trace!("first alternative failed ({error}), trying second");
                self.parser2.parse(input)
            }
        }
    }
}

/// Extension trait to add .or() method support for parsers
pub trait OrExt<'code>: Parser<'code> + Sized {
    fn or<P>(self, other: P) -> Or<Self, P>
    where
        P: Parser<'code, Output = Self::Output>,
    {
        Or::new(self, other)
    }
}

/// Implement OrExt for all parsers
impl<'code, P> OrExt<'code> for P where P: Parser<'code> {}

/// Convenience function to create an Or parser
pub fn or<'code, P1, P2, O>(parser1: P1, parser2: P2) -> Or<P1, P2>
where
    P1: Parser<'code, Output = O>,
    P2: Parser<'code, Output = O>,
{
    Or::new(parser1, parser2)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ParseError;
    use crate::pure::{fail, pure};
    use crate::utf8::char::{any_char, char_is, satisfy};

    #[test]
    fn test_or_first_succeeds() {
        let parser = or(any_char(), pure('v'));

        assert_eq!(parser.parse("abc"), Ok(('a', "bc")));
    }

    #[test]
    fn test_or_first_fails() {
        let parser = or(fail(), pure('v'));

        assert_eq!(parser.parse(""), Ok(('v', "")));
    }

    #[test]
    fn test_or_first_fails_due_to_lack_of_input() {
        let parser = any_char().or(pure('v'));

        assert_eq!(parser.parse(""), Ok(('v', "")));
    }

    #[test]
    fn test_or_second_starts_from_original_input() {
        let parser = satisfy(|_| false).or(any_char());

        // the rejected 'a' is still there for the second branch
        assert_eq!(parser.parse("abc"), Ok(('a', "bc")));
    }

    #[test]
    fn test_or_both_fail_reports_second_error() {
        let parser = char_is('a').or(char_is('b'));

        assert_eq!(parser.parse("xyz"), Err(ParseError::UnexpectedCharacter('x')));
        assert_eq!(parser.parse(""), Err(ParseError::UnexpectedEndOfInput));
    }

    #[test]
    fn test_or_method_chain() {
        let parser = char_is('a').or(char_is('b')).or(char_is('c'));

        assert_eq!(parser.parse("c"), Ok(('c', "")));
    }

    #[test]
    fn test_or_logs_fallback() {
        let _ = env_logger::builder().is_test(true).try_init();

        let parser = char_is('a').or(char_is('b'));
        assert_eq!(parser.parse("b!"), Ok(('b', "!")));
    }
}
