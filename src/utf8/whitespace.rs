use crate::map::{Map, MapExt};
use crate::repeat::{Repeat, at_least1};
use crate::utf8::char::{CharClass, chars_to_string, class};

/// Parser for a single whitespace character (Unicode `White_Space` property)
pub fn space() -> CharClass {
    class(char::is_whitespace)
}

/// Parser for a run of one or more whitespace characters, returned as written
pub fn spaces() -> Map<Repeat<CharClass>, fn(Vec<char>) -> String> {
    at_least1(space()).map(chars_to_string as fn(Vec<char>) -> String)
}
