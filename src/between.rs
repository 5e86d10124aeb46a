use super::parser::{ParseOutcome, Parser};

/// Parser that matches content between opening and closing delimiters
///
/// This is a generic combinator that parses: `open + content + close`
/// and returns just the `content` value with the delimiters discarded.
/// Whitespace is not skipped around any of the three parts.
///
/// # Examples
/// - `"[content]"` → `"content"`
/// - `"(value)"` → `"value"`
/// - `"{data}"` → `"data"`
#[derive(Clone)]
pub struct Between<P1, P2, P3> {
    open: P1,
    content: P2,
    close: P3,
}

impl<P1, P2, P3> Between<P1, P2, P3> {
    pub fn new(open: P1, content: P2, close: P3) -> Self {
        Between {
            open,
            content,
            close,
        }
    }
}

impl<'code, P1, P2, P3> Parser<'code> for Between<P1, P2, P3>
where
    P1: Parser<'code>,
    P2: Parser<'code>,
    P3: Parser<'code>,
{
    type Output = P2::Output;

    fn parse(&self, input: &'code str) -> ParseOutcome<'code, Self::Output> {
        let (_, input) = self.open.parse(input)?;
        let (content, input) = self.content.parse(input)?;
        let (_, input) = self.close.parse(input)?;

        Ok((content, input))
    }
}

/// Convenience function to create a Between parser
pub fn between<'code, P1, P2, P3>(open: P1, content: P2, close: P3) -> Between<P1, P2, P3>
where
    P1: Parser<'code>,
    P2: Parser<'code>,
    P3: Parser<'code>,
{
    Between::new(open, content, close)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ParseError;
    use crate::ascii::natural;
    use crate::map::MapExt;
    use crate::repeat::list;
    use crate::utf8::char::{char_is, satisfy};

    #[test]
    fn test_between_brackets() {
        let parser = between(char_is('['), natural(), char_is(']'));

        assert_eq!(parser.parse("[42] rest"), Ok((42, " rest")));
    }

    #[test]
    fn test_between_text_content() {
        let content = list(satisfy(|c| c != ')')).map(|chars| chars.into_iter().collect::<String>());
        let parser = between(char_is('('), content, char_is(')'));

        assert_eq!(parser.parse("(value)"), Ok(("value".to_string(), "")));
        assert_eq!(parser.parse("()"), Ok((String::new(), "")));
    }

    #[test]
    fn test_between_missing_open() {
        let parser = between(char_is('{'), natural(), char_is('}'));

        assert_eq!(parser.parse("1}"), Err(ParseError::UnexpectedCharacter('1')));
    }

    #[test]
    fn test_between_bad_content() {
        let parser = between(char_is('{'), natural(), char_is('}'));

        assert_eq!(parser.parse("{x}"), Err(ParseError::UnexpectedCharacter('x')));
    }

    #[test]
    fn test_between_missing_close() {
        let parser = between(char_is('{'), natural(), char_is('}'));

        assert_eq!(parser.parse("{12"), Err(ParseError::UnexpectedEndOfInput));
        assert_eq!(parser.parse("{12]"), Err(ParseError::UnexpectedCharacter(']')));
    }

    #[test]
    fn test_between_does_not_skip_whitespace() {
        let parser = between(char_is('['), natural(), char_is(']'));

        assert_eq!(parser.parse("[ 1]"), Err(ParseError::UnexpectedCharacter(' ')));
    }
}
