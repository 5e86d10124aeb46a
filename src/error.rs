use std::borrow::Cow;
use thiserror::Error;

/// Reasons a parser can fail.
///
/// Errors carry only the offending character or condition. There is no
/// position tracking: the remaining input at the point of failure is not kept.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The parser needed another character but the input was exhausted
    #[error("unexpected end of input")]
    UnexpectedEndOfInput,
    /// Input was left over where none was allowed
    #[error("expected end of input, but got >{0}<")]
    ExpectedEndOfInput(String),
    /// A character was read that the parser does not accept
    #[error("unexpected character: '{0}'")]
    UnexpectedCharacter(char),
    #[error("{0}")]
    Custom(Cow<'static, str>),
}

impl ParseError {
    pub fn custom(message: impl Into<Cow<'static, str>>) -> Self {
        ParseError::Custom(message.into())
    }
}
