//! # charcomb - Character Parser Combinators
//!
//! A parser combinator library over `&str` input, built around a person-record
//! grammar as its worked example.
//!
//! A parser is a value that, given the remaining input, either produces a value
//! together with the unconsumed suffix or fails with a [`ParseError`]. Parsers
//! combine into larger ones through small combinators:
//!
//! - **No consumption on failure**: a failed parser leaves the input untouched, so
//!   [`or()`] can retry its second branch without backtracking state
//! - **Monadic composition**: [`pure()`] and [`FlatMapExt::flat_map`] obey the monad laws,
//!   and [`ApplyExt::apply`] threads a curried constructor over field parsers
//! - **Iterative repetition**: [`list()`] and [`at_least1()`] loop instead of recursing,
//!   so long inputs do not grow the stack
//!
//! ```
//! use charcomb::{complete, person, Parser};
//!
//! let (record, _) = complete(person()).parse("42 Ada Lovelace n 555-0100#").unwrap();
//! assert_eq!(record.age, 42);
//! assert_eq!(record.surname, "Lovelace");
//! ```

pub mod and;
pub mod apply;
pub mod ascii;
pub mod between;
pub mod eof;
pub mod error;
pub mod flat_map;
pub mod lazy;
pub mod map;
pub mod map_err;
pub mod or;
pub mod parser;
pub mod person;
pub mod pure;
pub mod repeat;
pub mod separated_list;
pub mod sequence;
pub mod then;
pub mod then_optionally;
pub mod try_map;
pub mod utf8;

pub use and::{AndExt, and};
pub use apply::{ApplyExt, apply};
pub use ascii::natural;
pub use between::between;
pub use eof::{complete, eof};
pub use error::ParseError;
pub use flat_map::{FlatMapExt, flat_map};
pub use lazy::lazy;
pub use map::{MapExt, map};
pub use map_err::{MapErrExt, map_err};
pub use or::{OrExt, or};
pub use parser::{BoxedExt, BoxedParser, ParseOutcome, Parser};
pub use person::{Person, person};
pub use pure::{fail, fail_with, pure, unexpected_char};
pub use repeat::{RepeatExt, at_least1, list};
pub use separated_list::separated_list;
pub use sequence::{exactly, sequence};
pub use then::{ThenExt, skip};
pub use then_optionally::{ThenOptionallyExt, optional, then_optionally};
pub use try_map::{TryMapExt, try_map};
pub use utf8::{
    alpha, any_char, char_is, digit, is_string, lower, satisfy, space, spaces, upper,
};
