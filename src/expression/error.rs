/// Lexing failure: an input character outside the allow-list, or a malformed
/// numeric literal. Carries the byte offset of the offending character.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid input at byte {offset}: {message}")]
pub struct LexError {
    pub offset: usize,
    pub message: String,
}

impl LexError {
    pub(crate) fn new(offset: usize, message: impl Into<String>) -> Self {
        Self {
            offset,
            message: message.into(),
        }
    }
}

/// Grammar violation. Terminal for a given equation: callers store the reason
/// on the zone and do not retry.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error(transparent)]
    Lex(#[from] LexError),

    #[error("parse error at byte {offset}: {message}")]
    Syntax { offset: usize, message: String },
}

impl ParseError {
    pub(crate) fn syntax(offset: usize, message: impl Into<String>) -> Self {
        Self::Syntax {
            offset,
            message: message.into(),
        }
    }

    /// Byte offset where parsing failed.
    pub fn offset(&self) -> usize {
        match self {
            Self::Lex(e) => e.offset,
            Self::Syntax { offset, .. } => *offset,
        }
    }
}

/// Evaluation failure. The grammar is well-typed by construction, so the only
/// runtime failure is a zero divisor.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum EvalError {
    #[error("division by zero")]
    DivisionByZero,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_carries_offset() {
        let err = LexError::new(7, "unexpected character 'z'");
        assert!(err.to_string().contains("byte 7"));
        assert!(err.to_string().contains('z'));
    }

    #[test]
    fn lex_error_converts_to_parse_error() {
        let err: ParseError = LexError::new(0, "boom").into();
        assert!(matches!(err, ParseError::Lex(_)));
    }
}
