use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Expr {
    Num(f64),
    /// The free variable bound per evaluation (`x`).
    Var,
    Neg(Box<Expr>),
    Binary {
        op: BinaryOp,
        left: Box<Expr>,
        right: Box<Expr>,
    },
    Call {
        func: String,
        args: Vec<Expr>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
    Mod,
    Pow,
}

impl BinaryOp {
    fn symbol(self) -> &'static str {
        match self {
            BinaryOp::Add => "+",
            BinaryOp::Sub => "-",
            BinaryOp::Mul => "*",
            BinaryOp::Div => "/",
            BinaryOp::Mod => "%",
            BinaryOp::Pow => "^",
        }
    }

    fn precedence(self) -> u8 {
        match self {
            BinaryOp::Add | BinaryOp::Sub => 1,
            BinaryOp::Mul | BinaryOp::Div | BinaryOp::Mod => 2,
            BinaryOp::Pow => 4,
        }
    }

    /// Whether `a op (b op c)` differs from `(a op b) op c`.
    fn right_needs_parens_at_equal_prec(self) -> bool {
        matches!(self, BinaryOp::Sub | BinaryOp::Div | BinaryOp::Mod)
    }
}

impl Expr {
    fn precedence(&self) -> u8 {
        match self {
            // Negative literals print with a leading '-'.
            Expr::Num(v) if *v < 0.0 => 3,
            Expr::Num(_) | Expr::Var | Expr::Call { .. } => 5,
            Expr::Neg(_) => 3,
            Expr::Binary { op, .. } => op.precedence(),
        }
    }
}

/// Emits text that parses back to an equivalent expression.
impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Num(v) => write!(f, "{v}"),
            Expr::Var => write!(f, "x"),
            Expr::Neg(e) => {
                if e.precedence() <= 2 {
                    write!(f, "-({e})")
                } else {
                    write!(f, "-{e}")
                }
            }
            Expr::Binary { op, left, right } => {
                let p = op.precedence();
                // '^' is right-associative; everything else is left-associative.
                let left_parens = if *op == BinaryOp::Pow {
                    left.precedence() <= p
                } else {
                    left.precedence() < p
                };
                let right_parens = if *op == BinaryOp::Pow {
                    right.precedence() < p
                } else {
                    right.precedence() < p
                        || (right.precedence() == p && op.right_needs_parens_at_equal_prec())
                };

                if left_parens {
                    write!(f, "({left})")?;
                } else {
                    write!(f, "{left}")?;
                }
                write!(f, " {} ", op.symbol())?;
                if right_parens {
                    write!(f, "({right})")
                } else {
                    write!(f, "{right}")
                }
            }
            Expr::Call { func, args } => {
                write!(f, "{func}(")?;
                for (i, a) in args.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{a}")?;
                }
                write!(f, ")")
            }
        }
    }
}
