use crate::expression::ast::Var;
use crate::expression::error::LexError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Span {
    pub(crate) start: usize,
    pub(crate) end: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Token {
    pub(crate) kind: TokenKind,
    pub(crate) span: Span,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum TokenKind {
    Number(f64),
    Var(Var),

    LParen,
    RParen,

    Plus,
    Minus,
    Star,
    Slash,

    EqEq,
    Ne,
    Lt,
    Le,
    Gt,
    Ge,

    AndAnd,
    OrOr,

    Eof,
}

/// Tokenize an equation string against the fixed allow-list.
///
/// The only identifiers accepted are `x` and `y` (case-sensitive); everything
/// outside the operator set fails immediately. This allow-listing is the
/// security boundary for user-typed equations.
pub(crate) fn lex(input: &str) -> Result<Vec<Token>, LexError> {
    let mut out = Vec::new();
    let bytes = input.as_bytes();
    let mut i = 0usize;

    while i < bytes.len() {
        let c = bytes[i] as char;
        if c.is_whitespace() {
            i += 1;
            continue;
        }

        let start = i;

        // Number: [0-9]+(.[0-9]+)?
        if c.is_ascii_digit() {
            while i < bytes.len() && (bytes[i] as char).is_ascii_digit() {
                i += 1;
            }
            if i < bytes.len() && (bytes[i] as char) == '.' {
                i += 1;
                let frac_start = i;
                while i < bytes.len() && (bytes[i] as char).is_ascii_digit() {
                    i += 1;
                }
                if frac_start == i {
                    return Err(LexError::new(
                        start,
                        "malformed number (expected digits after '.')",
                    ));
                }
            }

            let s = &input[start..i];
            let v: f64 = s
                .parse()
                .map_err(|_| LexError::new(start, "malformed number"))?;
            out.push(Token {
                kind: TokenKind::Number(v),
                span: Span { start, end: i },
            });
            continue;
        }

        // Variables: exactly 'x' or 'y'. Any other letter is rejected, and a
        // variable must not run into a longer identifier ("xy", "x2").
        if c.is_ascii_alphabetic() || c == '_' {
            let var = match c {
                'x' => Var::X,
                'y' => Var::Y,
                _ => {
                    return Err(LexError::new(
                        start,
                        format!("unknown identifier '{c}' (only 'x' and 'y' are allowed)"),
                    ));
                }
            };
            i += 1;
            if i < bytes.len() {
                let next = bytes[i] as char;
                if next.is_ascii_alphanumeric() || next == '_' {
                    return Err(LexError::new(
                        start,
                        "unknown identifier (only 'x' and 'y' are allowed)",
                    ));
                }
            }
            out.push(Token {
                kind: TokenKind::Var(var),
                span: Span { start, end: i },
            });
            continue;
        }

        // Two-char operators
        if i + 1 < bytes.len() {
            let two = &input[i..i + 2];
            let kind = match two {
                "&&" => Some(TokenKind::AndAnd),
                "||" => Some(TokenKind::OrOr),
                "==" => Some(TokenKind::EqEq),
                "!=" => Some(TokenKind::Ne),
                "<=" => Some(TokenKind::Le),
                ">=" => Some(TokenKind::Ge),
                _ => None,
            };
            if let Some(kind) = kind {
                i += 2;
                out.push(Token {
                    kind,
                    span: Span { start, end: i },
                });
                continue;
            }
        }

        // Single-char tokens. Lone '&', '|', '=' and '!' are not operators in
        // this language and fall through to the rejection arm.
        let kind = match c {
            '(' => TokenKind::LParen,
            ')' => TokenKind::RParen,
            '+' => TokenKind::Plus,
            '-' => TokenKind::Minus,
            '*' => TokenKind::Star,
            '/' => TokenKind::Slash,
            '<' => TokenKind::Lt,
            '>' => TokenKind::Gt,
            _ => {
                return Err(LexError::new(start, format!("unexpected character '{c}'")));
            }
        };
        i += 1;
        out.push(Token {
            kind,
            span: Span { start, end: i },
        });
    }

    out.push(Token {
        kind: TokenKind::Eof,
        span: Span {
            start: input.len(),
            end: input.len(),
        },
    });

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(input: &str) -> Vec<TokenKind> {
        lex(input).unwrap().into_iter().map(|t| t.kind).collect()
    }

    #[test]
    fn lexes_variables_numbers_and_operators() {
        assert_eq!(
            kinds("x >= 12.5 && y < 3"),
            vec![
                TokenKind::Var(Var::X),
                TokenKind::Ge,
                TokenKind::Number(12.5),
                TokenKind::AndAnd,
                TokenKind::Var(Var::Y),
                TokenKind::Lt,
                TokenKind::Number(3.0),
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn skips_whitespace() {
        assert_eq!(kinds("  x\t<\n1 "), kinds("x<1"));
    }

    #[test]
    fn rejects_unknown_identifiers() {
        let err = lex("z > 0").unwrap_err();
        assert_eq!(err.offset, 0);
        assert!(err.to_string().contains('z'));

        assert!(lex("x2 > 0").is_err());
        assert!(lex("xy > 0").is_err());
        assert!(lex("X > 0").is_err()); // case-sensitive
    }

    #[test]
    fn rejects_disallowed_characters() {
        for bad in ["x > 0;", "x > [0]", "x ^ 2 > 0", "x > 0 # hi"] {
            assert!(lex(bad).is_err(), "expected lex failure for {bad:?}");
        }
    }

    #[test]
    fn rejects_lone_logical_and_equality_chars() {
        assert!(lex("x > 0 & y > 0").is_err());
        assert!(lex("x > 0 | y > 0").is_err());
        assert!(lex("x = 0").is_err());
        assert!(lex("!x").is_err());
    }

    #[test]
    fn rejects_trailing_dot_number() {
        assert!(lex("1. > 0").is_err());
    }

    #[test]
    fn span_points_at_offending_byte() {
        let err = lex("x > q").unwrap_err();
        assert_eq!(err.offset, 4);
    }
}
