use crate::expression::ast::{ArithExpr, ArithOp, BoolExpr, CmpOp, LogicOp};
use crate::expression::error::ParseError;
use crate::expression::lexer::{Token, TokenKind, lex};

/// Parse an equation string into a boolean AST.
///
/// The top level must be boolean: a zone equation decides membership, so pure
/// arithmetic with no comparison is a parse error.
pub(crate) fn parse_bool_expr(src: &str) -> Result<BoolExpr, ParseError> {
    let src = src.trim();
    if src.is_empty() {
        return Err(ParseError::syntax(0, "empty equation"));
    }
    let tokens = lex(src)?;
    let mut p = Parser {
        tokens,
        pos: 0,
        depth: 0,
    };
    let expr = p.parse_logical()?;
    p.expect_end()?;
    Ok(expr)
}

// Nesting cap for parens and unary minus chains. Equations are user-pasted
// text, so recursion depth (and the depth of the resulting AST) must stay
// bounded no matter what comes in.
const MAX_NESTING_DEPTH: usize = 256;

struct Parser {
    tokens: Vec<Token>,
    pos: usize,
    depth: usize,
}

impl Parser {
    fn peek(&self) -> &Token {
        &self.tokens[self.pos]
    }

    fn bump(&mut self) -> &Token {
        let t = &self.tokens[self.pos];
        self.pos += 1;
        t
    }

    fn consume(&mut self, kind: TokenKind) -> bool {
        if self.peek().kind == kind {
            self.bump();
            true
        } else {
            false
        }
    }

    fn offset(&self) -> usize {
        self.peek().span.start
    }

    fn enter(&mut self, offset: usize) -> Result<(), ParseError> {
        self.depth += 1;
        if self.depth > MAX_NESTING_DEPTH {
            return Err(ParseError::syntax(offset, "expression nesting too deep"));
        }
        Ok(())
    }

    fn leave(&mut self) {
        self.depth -= 1;
    }

    fn expect_end(&mut self) -> Result<(), ParseError> {
        match self.peek().kind {
            TokenKind::Eof => Ok(()),
            kind if cmp_op(kind).is_some() => Err(ParseError::syntax(
                self.offset(),
                "chained comparisons are not allowed",
            )),
            _ => Err(ParseError::syntax(
                self.offset(),
                "unexpected trailing input",
            )),
        }
    }

    // logical := bool_atom (('&&'|'||') bool_atom)*
    //
    // '&&' and '||' share one precedence level and associate left, matching
    // the original tool's left-to-right reading of mixed logical operators.
    fn parse_logical(&mut self) -> Result<BoolExpr, ParseError> {
        let mut e = self.parse_bool_atom()?;
        loop {
            let op = if self.consume(TokenKind::AndAnd) {
                LogicOp::And
            } else if self.consume(TokenKind::OrOr) {
                LogicOp::Or
            } else {
                break;
            };
            let r = self.parse_bool_atom()?;
            e = BoolExpr::Logical {
                op,
                left: Box::new(e),
                right: Box::new(r),
            };
        }
        Ok(e)
    }

    // bool_atom := '(' logical ')' | comparison
    //
    // An opening paren is ambiguous: it may group a boolean sub-expression
    // ("(x > 0 && y > 0)") or an arithmetic operand ("(y - y) > 0"). Try the
    // boolean reading first and rewind the token index when it does not pan
    // out; when both readings fail, report whichever error got further into
    // the input.
    fn parse_bool_atom(&mut self) -> Result<BoolExpr, ParseError> {
        let mut bool_err = None;
        if self.peek().kind == TokenKind::LParen {
            let checkpoint = self.pos;
            let depth_checkpoint = self.depth;
            self.enter(self.offset())?;
            self.bump();
            match self.parse_logical() {
                Ok(inner) => {
                    if self.consume(TokenKind::RParen) {
                        if cmp_op(self.peek().kind).is_none() {
                            self.depth = depth_checkpoint;
                            return Ok(inner);
                        }
                        // "(bool) COMPOP ..." only reads as an arithmetic
                        // group; let the comparison path report it.
                    } else {
                        bool_err = Some(ParseError::syntax(self.offset(), "expected ')'"));
                    }
                }
                Err(err) => bool_err = Some(err),
            }
            self.pos = checkpoint;
            self.depth = depth_checkpoint;
        }
        match self.parse_comparison() {
            Ok(e) => Ok(e),
            Err(arith_err) => Err(further_error(bool_err, arith_err)),
        }
    }

    // comparison := arithmetic COMPOP arithmetic — exactly one, mandatory.
    fn parse_comparison(&mut self) -> Result<BoolExpr, ParseError> {
        let left = self.parse_arithmetic()?;
        let Some(op) = cmp_op(self.peek().kind) else {
            return Err(ParseError::syntax(
                self.offset(),
                "expected a comparison operator (a zone equation must evaluate to true/false)",
            ));
        };
        self.bump();
        let right = self.parse_arithmetic()?;
        Ok(BoolExpr::Compare { op, left, right })
    }

    // arithmetic := term (('+'|'-') term)*
    fn parse_arithmetic(&mut self) -> Result<ArithExpr, ParseError> {
        let mut e = self.parse_term()?;
        loop {
            let op = if self.consume(TokenKind::Plus) {
                ArithOp::Add
            } else if self.consume(TokenKind::Minus) {
                ArithOp::Sub
            } else {
                break;
            };
            let r = self.parse_term()?;
            e = ArithExpr::Binary {
                op,
                left: Box::new(e),
                right: Box::new(r),
            };
        }
        Ok(e)
    }

    // term := unary (('*'|'/') unary)*
    fn parse_term(&mut self) -> Result<ArithExpr, ParseError> {
        let mut e = self.parse_unary()?;
        loop {
            let op = if self.consume(TokenKind::Star) {
                ArithOp::Mul
            } else if self.consume(TokenKind::Slash) {
                ArithOp::Div
            } else {
                break;
            };
            let r = self.parse_unary()?;
            e = ArithExpr::Binary {
                op,
                left: Box::new(e),
                right: Box::new(r),
            };
        }
        Ok(e)
    }

    // unary := ['-'] primary
    fn parse_unary(&mut self) -> Result<ArithExpr, ParseError> {
        if self.peek().kind == TokenKind::Minus {
            self.enter(self.offset())?;
            self.bump();
            let e = self.parse_unary()?;
            self.leave();
            return Ok(ArithExpr::Neg(Box::new(e)));
        }
        self.parse_primary()
    }

    // primary := NUMBER | VARIABLE | '(' arithmetic ')'
    fn parse_primary(&mut self) -> Result<ArithExpr, ParseError> {
        let t = self.bump().clone();
        match t.kind {
            TokenKind::Number(v) => Ok(ArithExpr::Number(v)),
            TokenKind::Var(v) => Ok(ArithExpr::Var(v)),
            TokenKind::LParen => {
                self.enter(t.span.start)?;
                let e = self.parse_arithmetic()?;
                if !self.consume(TokenKind::RParen) {
                    return Err(ParseError::syntax(self.offset(), "expected ')'"));
                }
                self.leave();
                Ok(e)
            }
            TokenKind::Eof => Err(ParseError::syntax(
                t.span.start,
                "unexpected end of equation",
            )),
            other => Err(ParseError::syntax(
                t.span.start,
                format!("unexpected token {other:?}"),
            )),
        }
    }
}

fn further_error(bool_err: Option<ParseError>, arith_err: ParseError) -> ParseError {
    match bool_err {
        Some(b) if b.offset() >= arith_err.offset() => b,
        _ => arith_err,
    }
}

fn cmp_op(kind: TokenKind) -> Option<CmpOp> {
    match kind {
        TokenKind::EqEq => Some(CmpOp::Eq),
        TokenKind::Ne => Some(CmpOp::Ne),
        TokenKind::Lt => Some(CmpOp::Lt),
        TokenKind::Le => Some(CmpOp::Le),
        TokenKind::Gt => Some(CmpOp::Gt),
        TokenKind::Ge => Some(CmpOp::Ge),
        _ => None,
    }
}
