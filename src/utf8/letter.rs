use crate::utf8::char::{CharClass, class};

/// Parser for a lower-case letter (Unicode `Lowercase` property)
pub fn lower() -> CharClass {
    class(char::is_lowercase)
}

/// Parser for an upper-case letter (Unicode `Uppercase` property)
pub fn upper() -> CharClass {
    class(char::is_uppercase)
}

/// Parser for any letter (Unicode `Alphabetic` property)
pub fn alpha() -> CharClass {
    class(char::is_alphabetic)
}
