use super::parser::{ParseOutcome, Parser};

/// Parser combinator for applicative application
///
/// Runs a parser that produces a function, then runs the argument parser on the
/// remaining input and calls the function with its value. Chaining `.apply()` over
/// a curried constructor builds a record parser one field at a time without nesting
/// closures.
///
/// Example:
/// ```
/// use charcomb::{apply::ApplyExt, char_is, natural, pure, then::ThenExt, Parser};
///
/// let pair = pure(|x: u64| move |y: u64| (x, y))
///     .apply(natural())
///     .apply(char_is(',').then(natural()));
///
/// assert_eq!(pair.parse("3,4;"), Ok(((3, 4), ";")));
/// ```
#[derive(Clone)]
pub struct Apply<PF, PA> {
    function: PF,
    argument: PA,
}

impl<PF, PA> Apply<PF, PA> {
    pub fn new(function: PF, argument: PA) -> Self {
        Apply { function, argument }
    }
}

impl<'code, PF, PA, B> Parser<'code> for Apply<PF, PA>
where
    PF: Parser<'code>,
    PA: Parser<'code>,
    PF::Output: FnOnce(PA::Output) -> B,
{
    type Output = B;

    fn parse(&self, input: &'code str) -> ParseOutcome<'code, Self::Output> {
        let (function, remaining) = self.function.parse(input)?;
        let (argument, remaining) = self.argument.parse(remaining)?;
        Ok((function(argument), remaining))
    }
}

/// Convenience function to create an Apply parser
pub fn apply<'code, PF, PA, B>(function: PF, argument: PA) -> Apply<PF, PA>
where
    PF: Parser<'code>,
    PA: Parser<'code>,
    PF::Output: FnOnce(PA::Output) -> B,
{
    Apply::new(function, argument)
}

/// Extension trait to add .apply() method support for parsers that produce functions
pub trait ApplyExt<'code>: Parser<'code> + Sized {
    fn apply<PA, B>(self, argument: PA) -> Apply<Self, PA>
    where
        PA: Parser<'code>,
        Self::Output: FnOnce(PA::Output) -> B,
    {
        Apply::new(self, argument)
    }
}

/// Implement ApplyExt for all parsers
impl<'code, P> ApplyExt<'code> for P where P: Parser<'code> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ParseError;
    use crate::flat_map::FlatMapExt;
    use crate::map::MapExt;
    use crate::pure::{fail, pure};
    use crate::utf8::char::any_char;
    use crate::utf8::digit::digit;

    #[test]
    fn test_apply_pure_function() {
        let parser = apply(pure(|c: char| c.to_ascii_uppercase()), any_char());

        assert_eq!(parser.parse("abc"), Ok(('A', "bc")));
    }

    #[test]
    fn test_apply_function_from_input() {
        // a digit selects how much to add to the following character's code point
        let offset = digit().map(|d| move |c: char| c as u32 + d.to_digit(10).unwrap_or(0));
        let parser = offset.apply(any_char());

        assert_eq!(parser.parse("2a!"), Ok(('a' as u32 + 2, "!")));
    }

    #[test]
    fn test_apply_function_parser_fails() {
        let parser = fail::<fn(char) -> char>().apply(any_char());

        assert_eq!(parser.parse("abc"), Err(ParseError::custom("Parse failed")));
    }

    #[test]
    fn test_apply_argument_parser_fails() {
        let parser = pure(|c: char| c).apply(any_char());

        assert_eq!(parser.parse(""), Err(ParseError::UnexpectedEndOfInput));
    }

    #[test]
    fn test_apply_agrees_with_flat_map() {
        for input in ["", "a", "ab"] {
            let via_apply = pure(|a: char| move |b: char| (a, b))
                .apply(any_char())
                .apply(any_char());
            let via_flat_map = any_char().flat_map(|a| any_char().map(move |b| (a, b)));
            assert_eq!(via_apply.parse(input), via_flat_map.parse(input));
        }
    }
}
