pub mod char;
pub mod digit;
pub mod letter;
pub mod string;
pub mod whitespace;

pub use char::{AnyChar, CharClass, Satisfy, any_char, char_is, satisfy};
pub use digit::digit;
pub use letter::{alpha, lower, upper};
pub use string::is_string;
pub use whitespace::{space, spaces};
