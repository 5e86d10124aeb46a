use super::parser::{ParseOutcome, Parser};

/// Parser for zero or more items separated by a separator
///
/// Separator values are discarded. A separator that is not followed by an item
/// is left unconsumed, so `"1,2,"` yields `[1, 2]` with `","` remaining.
#[derive(Clone)]
pub struct SeparatedList<P, PS> {
    parser: P,
    separator: PS,
}

impl<P, PS> SeparatedList<P, PS> {
    pub fn new(parser: P, separator: PS) -> Self {
        SeparatedList { parser, separator }
    }
}

impl<'code, P, PS> Parser<'code> for SeparatedList<P, PS>
where
    P: Parser<'code>,
    PS: Parser<'code>,
{
    type Output = Vec<P::Output>;

    fn parse(&self, input: &'code str) -> ParseOutcome<'code, Self::Output> {
        let mut results = Vec::new();

        let mut input = match self.parser.parse(input) {
            Ok((first, remaining)) => {
                results.push(first);
                remaining
            }
            Err(_) => return Ok((results, input)),
        };

        loop {
            let Ok((_, after_separator)) = self.separator.parse(input) else {
                break;
            };
            let Ok((item, remaining)) = self.parser.parse(after_separator) else {
                log::trace!("separated_list: separator without item after {} items", results.len());
                break;
            };

            // separator and item both matched empty: repeating would never end
            if remaining.len() == input.len() {
                break;
            }

            results.push(item);
            input = remaining;
        }

        Ok((results, input))
    }
}

/// Convenience function to create a SeparatedList parser
pub fn separated_list<'code, P, PS>(parser: P, separator: PS) -> SeparatedList<P, PS>
where
    P: Parser<'code>,
    PS: Parser<'code>,
{
    SeparatedList::new(parser, separator)
}
