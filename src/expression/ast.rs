/// The two free variables of the equation language.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Var {
    X,
    Y,
}

/// Arithmetic sub-expression. Reduces to `f64`.
#[derive(Debug, Clone, PartialEq)]
pub enum ArithExpr {
    Number(f64),
    Var(Var),
    Neg(Box<ArithExpr>),
    Binary {
        op: ArithOp,
        left: Box<ArithExpr>,
        right: Box<ArithExpr>,
    },
}

/// Boolean sub-expression. Reduces to `bool`.
///
/// Arithmetic and boolean sorts are separate types, so an arithmetic node can
/// never appear where a boolean is required (and vice versa) — the tree is
/// well-typed by construction, not checked at evaluation time.
#[derive(Debug, Clone, PartialEq)]
pub enum BoolExpr {
    Compare {
        op: CmpOp,
        left: ArithExpr,
        right: ArithExpr,
    },
    Logical {
        op: LogicOp,
        left: Box<BoolExpr>,
        right: Box<BoolExpr>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArithOp {
    Add,
    Sub,
    Mul,
    Div,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CmpOp {
    Eq,
    Ne,
    Lt,
    Le,
    Gt,
    Ge,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogicOp {
    And,
    Or,
}
