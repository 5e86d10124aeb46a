//! Parser for a whitespace-separated person record
//!
//! A record has five fields separated by one or more spaces:
//!
//! ```text
//! 123 Fred Clarkson y 123-456.789#
//! ^   ^    ^        ^ ^
//! |   |    |        | phone: starts with a digit, digits / '.' / '-', ends with '#'
//! |   |    |        smoker: 'y' or 'n'
//! |   |    surname: capital letter followed by at least five lower-case letters
//! |   first name: capital letter followed by any lower-case letters
//! age: natural number
//! ```

use crate::and::AndExt;
use crate::apply::ApplyExt;
use crate::ascii::natural;
use crate::map::MapExt;
use crate::or::OrExt;
use crate::parser::Parser;
use crate::pure::pure;
use crate::repeat::list;
use crate::sequence::exactly;
use crate::then::ThenExt;
use crate::utf8::char::{chars_to_string, char_is};
use crate::utf8::digit::digit;
use crate::utf8::letter::{lower, upper};
use crate::utf8::whitespace::spaces;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Person {
    pub age: u64,
    pub first_name: String,
    pub surname: String,
    pub is_smoker: bool,
    pub phone: String,
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Person {{ age: {}, first_name: {}, surname: {}, is_smoker: {}, phone: {} }}",
            self.age, self.first_name, self.surname, self.is_smoker, self.phone
        )
    }
}

/// Parser for the age field
pub fn age<'code>() -> impl Parser<'code, Output = u64> {
    natural()
}

/// Parser for a first name: one upper-case letter, then any lower-case letters
pub fn first_name<'code>() -> impl Parser<'code, Output = String> {
    upper()
        .and(list(lower()))
        .map(|(initial, rest)| std::iter::once(initial).chain(rest).collect::<String>())
}

/// Parser for a surname: one upper-case letter, then at least five lower-case letters
pub fn surname<'code>() -> impl Parser<'code, Output = String> {
    upper()
        .and(exactly(5, lower()))
        .and(list(lower()))
        .map(|((initial, required), rest)| {
            std::iter::once(initial)
                .chain(required)
                .chain(rest)
                .collect::<String>()
        })
}

/// Parser for the smoker flag: `y` is true, `n` is false
pub fn is_smoker<'code>() -> impl Parser<'code, Output = bool> {
    char_is('y')
        .then(pure(true))
        .or(char_is('n').then(pure(false)))
}

/// Parser for the characters allowed inside a phone number; may match nothing
pub fn phone_body<'code>() -> impl Parser<'code, Output = String> {
    list(digit().or(char_is('.')).or(char_is('-'))).map(chars_to_string)
}

/// Parser for a phone number: a digit, the body, and a terminating `#`
///
/// The `#` is consumed but not part of the value.
pub fn phone<'code>() -> impl Parser<'code, Output = String> {
    digit()
        .and(phone_body())
        .and(char_is('#'))
        .map(|((first, body), _)| format!("{first}{body}"))
}

/// Parser for a full person record
///
/// Fields are read left to right and the first field that fails decides the error.
/// Input after the phone's `#` is left unconsumed.
///
/// ```
/// use charcomb::{person, Parser};
///
/// let (person, rest) = person().parse("123 Fred Clarkson y 123-456.789# rest").unwrap();
/// assert_eq!(person.first_name, "Fred");
/// assert_eq!(person.phone, "123-456.789");
/// assert_eq!(rest, " rest");
/// ```
pub fn person<'code>() -> impl Parser<'code, Output = Person> {
    let build = |age: u64| {
        move |first_name: String| {
            move |surname: String| {
                move |is_smoker: bool| {
                    move |phone: String| Person {
                        age,
                        first_name,
                        surname,
                        is_smoker,
                        phone,
                    }
                }
            }
        }
    };

    pure(build)
        .apply(age())
        .apply(spaces().then(first_name()))
        .apply(spaces().then(surname()))
        .apply(spaces().then(is_smoker()))
        .apply(spaces().then(phone()))
        .map(|person: Person| {
            log::debug!("parsed {person}");
            person
        })
}
