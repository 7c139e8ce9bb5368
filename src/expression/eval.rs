use crate::expression::ast::{ArithExpr, ArithOp, BoolExpr, CmpOp, LogicOp, Var};
use crate::expression::error::EvalError;

/// Evaluate a boolean AST at a concrete point.
///
/// Both logical operands are always evaluated (they are cheap and
/// side-effect-free); the combination is strict boolean AND/OR.
pub(crate) fn eval_bool(expr: &BoolExpr, x: f64, y: f64) -> Result<bool, EvalError> {
    match expr {
        BoolExpr::Compare { op, left, right } => {
            let a = eval_arith(left, x, y)?;
            let b = eval_arith(right, x, y)?;
            Ok(compare(*op, a, b))
        }
        BoolExpr::Logical { op, left, right } => {
            let a = eval_bool(left, x, y)?;
            let b = eval_bool(right, x, y)?;
            Ok(match op {
                LogicOp::And => a && b,
                LogicOp::Or => a || b,
            })
        }
    }
}

fn eval_arith(expr: &ArithExpr, x: f64, y: f64) -> Result<f64, EvalError> {
    match expr {
        ArithExpr::Number(v) => Ok(*v),
        ArithExpr::Var(Var::X) => Ok(x),
        ArithExpr::Var(Var::Y) => Ok(y),
        ArithExpr::Neg(e) => Ok(-eval_arith(e, x, y)?),
        ArithExpr::Binary { op, left, right } => {
            let a = eval_arith(left, x, y)?;
            let b = eval_arith(right, x, y)?;
            match op {
                ArithOp::Add => Ok(a + b),
                ArithOp::Sub => Ok(a - b),
                ArithOp::Mul => Ok(a * b),
                ArithOp::Div => {
                    // A zero divisor is an error rather than inf/NaN, so a bad
                    // sub-expression cannot silently pin a zone to one answer.
                    if b == 0.0 {
                        return Err(EvalError::DivisionByZero);
                    }
                    Ok(a / b)
                }
            }
        }
    }
}

// NaN operands compare to false for every operator, including '!='. The
// division guard makes NaN unreachable from well-formed input, but the
// comparison layer does not rely on that.
fn compare(op: CmpOp, a: f64, b: f64) -> bool {
    if a.is_nan() || b.is_nan() {
        return false;
    }
    match op {
        CmpOp::Eq => a == b,
        CmpOp::Ne => a != b,
        CmpOp::Lt => a < b,
        CmpOp::Le => a <= b,
        CmpOp::Gt => a > b,
        CmpOp::Ge => a >= b,
    }
}
