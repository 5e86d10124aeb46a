use crate::utf8::char::{CharClass, class};

/// Parser for a single decimal digit `0`-`9`
///
/// Only ASCII digits are accepted, since [`crate::natural()`] converts the digits
/// it collects as a base-10 number.
pub fn digit() -> CharClass {
    class(|c| c.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ParseError;
    use crate::parser::Parser;

    #[test]
    fn test_digit() {
        assert_eq!(digit().parse("123"), Ok(('1', "23")));
    }

    #[test]
    fn test_digit_when_it_isnt() {
        assert_eq!(digit().parse("abc"), Err(ParseError::UnexpectedCharacter('a')));
    }

    #[test]
    fn test_ascii_digits() {
        for digit_char in '0'..='9' {
            let input = digit_char.to_string();
            let (ch, rest) = digit().parse(&input).unwrap();
            assert_eq!(ch, digit_char, "Failed for ASCII digit: {}", digit_char);
            assert_eq!(rest, "");
        }
    }

    #[test]
    fn test_non_ascii_digits_rejected() {
        let test_cases = [
            ('٠', "٠"), // U+0660 Arabic-Indic digit zero
            ('०', "०"), // U+0966 Devanagari digit zero
            ('５', "５"), // U+FF15 Fullwidth digit five
        ];

        for (expected, input) in test_cases {
            assert_eq!(
                digit().parse(input),
                Err(ParseError::UnexpectedCharacter(expected)),
                "Expected rejection for U+{:04X}",
                expected as u32
            );
        }
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(digit().parse(""), Err(ParseError::UnexpectedEndOfInput));
    }
}
