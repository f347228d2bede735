use crate::expression::ast::{BinaryOp, Expr};
use crate::expression::error::ExprError;

/// Symbolic derivative of `e` with respect to the free variable.
///
/// Fails when no closed-form derivative exists for a node (`abs`,
/// `floor`, `ceil`, `min`, `max`, `%`); callers treat that as "no
/// derivative expression available", not as a fatal error.
pub(crate) fn differentiate(e: &Expr) -> Result<Expr, ExprError> {
    let raw = d(e)?;
    Ok(simplify(raw))
}

fn d(e: &Expr) -> Result<Expr, ExprError> {
    match e {
        Expr::Num(_) => Ok(num(0.0)),
        Expr::Var => Ok(num(1.0)),
        Expr::Neg(u) => Ok(neg(d(u)?)),
        Expr::Binary { op, left, right } => d_binary(*op, left, right),
        Expr::Call { func, args } => d_call(func, args),
    }
}

fn d_binary(op: BinaryOp, u: &Expr, v: &Expr) -> Result<Expr, ExprError> {
    match op {
        BinaryOp::Add => Ok(bin(BinaryOp::Add, d(u)?, d(v)?)),
        BinaryOp::Sub => Ok(bin(BinaryOp::Sub, d(u)?, d(v)?)),
        BinaryOp::Mul => {
            // u'v + uv'
            Ok(bin(
                BinaryOp::Add,
                bin(BinaryOp::Mul, d(u)?, v.clone()),
                bin(BinaryOp::Mul, u.clone(), d(v)?),
            ))
        }
        BinaryOp::Div => {
            // (u'v - uv') / v^2
            Ok(bin(
                BinaryOp::Div,
                bin(
                    BinaryOp::Sub,
                    bin(BinaryOp::Mul, d(u)?, v.clone()),
                    bin(BinaryOp::Mul, u.clone(), d(v)?),
                ),
                bin(BinaryOp::Pow, v.clone(), num(2.0)),
            ))
        }
        BinaryOp::Mod => Err(ExprError::new(0, "no closed-form derivative for \"%\"")),
        BinaryOp::Pow => d_pow(u, v),
    }
}

fn d_pow(u: &Expr, v: &Expr) -> Result<Expr, ExprError> {
    match (u, v) {
        // c^(...) : c^v * ln(c) * v'
        (Expr::Num(base), _) => Ok(bin(
            BinaryOp::Mul,
            bin(
                BinaryOp::Mul,
                bin(BinaryOp::Pow, u.clone(), v.clone()),
                num(base.ln()),
            ),
            d(v)?,
        )),
        // (...)^c : c * u^(c-1) * u'
        (_, Expr::Num(exp)) => Ok(bin(
            BinaryOp::Mul,
            bin(
                BinaryOp::Mul,
                num(*exp),
                bin(BinaryOp::Pow, u.clone(), num(exp - 1.0)),
            ),
            d(u)?,
        )),
        // u^v : u^v * (v' * ln(u) + v * u' / u)
        _ => Ok(bin(
            BinaryOp::Mul,
            bin(BinaryOp::Pow, u.clone(), v.clone()),
            bin(
                BinaryOp::Add,
                bin(BinaryOp::Mul, d(v)?, call("ln", u.clone())),
                bin(
                    BinaryOp::Div,
                    bin(BinaryOp::Mul, v.clone(), d(u)?),
                    u.clone(),
                ),
            ),
        )),
    }
}

fn d_call(func: &str, args: &[Expr]) -> Result<Expr, ExprError> {
    let u = match args {
        [only] => only,
        _ => {
            return Err(ExprError::new(
                0,
                format!("no closed-form derivative for \"{func}\""),
            ));
        }
    };
    let du = d(u)?;

    // Chain rule: outer'(u) * u'.
    let outer = match func {
        "sin" => call("cos", u.clone()),
        "cos" => neg(call("sin", u.clone())),
        "tan" => bin(
            BinaryOp::Div,
            num(1.0),
            bin(BinaryOp::Pow, call("cos", u.clone()), num(2.0)),
        ),
        "asin" => bin(
            BinaryOp::Div,
            num(1.0),
            call(
                "sqrt",
                bin(
                    BinaryOp::Sub,
                    num(1.0),
                    bin(BinaryOp::Pow, u.clone(), num(2.0)),
                ),
            ),
        ),
        "acos" => neg(bin(
            BinaryOp::Div,
            num(1.0),
            call(
                "sqrt",
                bin(
                    BinaryOp::Sub,
                    num(1.0),
                    bin(BinaryOp::Pow, u.clone(), num(2.0)),
                ),
            ),
        )),
        "atan" => bin(
            BinaryOp::Div,
            num(1.0),
            bin(
                BinaryOp::Add,
                num(1.0),
                bin(BinaryOp::Pow, u.clone(), num(2.0)),
            ),
        ),
        "sinh" => call("cosh", u.clone()),
        "cosh" => call("sinh", u.clone()),
        "tanh" => bin(
            BinaryOp::Div,
            num(1.0),
            bin(BinaryOp::Pow, call("cosh", u.clone()), num(2.0)),
        ),
        "exp" => call("exp", u.clone()),
        "ln" => bin(BinaryOp::Div, num(1.0), u.clone()),
        "log" => bin(
            BinaryOp::Div,
            num(1.0),
            bin(BinaryOp::Mul, u.clone(), num(std::f64::consts::LN_10)),
        ),
        "sqrt" => bin(
            BinaryOp::Div,
            num(1.0),
            bin(BinaryOp::Mul, num(2.0), call("sqrt", u.clone())),
        ),
        other => {
            return Err(ExprError::new(
                0,
                format!("no closed-form derivative for \"{other}\""),
            ));
        }
    };

    Ok(bin(BinaryOp::Mul, outer, du))
}

/// Bottom-up constant folding and identity elimination.
///
/// Keeps derivative text readable; this is deliberately not a CAS
/// simplifier, only the rewrites needed to strip the zeros and ones the
/// product/chain rules introduce.
pub(crate) fn simplify(e: Expr) -> Expr {
    match e {
        Expr::Num(_) | Expr::Var => e,
        Expr::Neg(inner) => match simplify(*inner) {
            Expr::Num(v) => Expr::Num(-v),
            Expr::Neg(nested) => *nested,
            other => neg(other),
        },
        Expr::Binary { op, left, right } => {
            let l = simplify(*left);
            let r = simplify(*right);
            simplify_binary(op, l, r)
        }
        Expr::Call { func, args } => {
            let args: Vec<Expr> = args.into_iter().map(simplify).collect();
            Expr::Call { func, args }
        }
    }
}

fn simplify_binary(op: BinaryOp, l: Expr, r: Expr) -> Expr {
    if let (Expr::Num(a), Expr::Num(b)) = (&l, &r) {
        let folded = match op {
            BinaryOp::Add => a + b,
            BinaryOp::Sub => a - b,
            BinaryOp::Mul => a * b,
            BinaryOp::Div => a / b,
            BinaryOp::Mod => a % b,
            BinaryOp::Pow => a.powf(*b),
        };
        if folded.is_finite() {
            return Expr::Num(folded);
        }
    }

    match (op, &l, &r) {
        (BinaryOp::Add, Expr::Num(z), _) if *z == 0.0 => r,
        (BinaryOp::Add, _, Expr::Num(z)) if *z == 0.0 => l,
        (BinaryOp::Sub, _, Expr::Num(z)) if *z == 0.0 => l,
        (BinaryOp::Sub, Expr::Num(z), _) if *z == 0.0 => neg(r),
        (BinaryOp::Mul, Expr::Num(z), _) | (BinaryOp::Mul, _, Expr::Num(z)) if *z == 0.0 => {
            num(0.0)
        }
        (BinaryOp::Mul, Expr::Num(one), _) if *one == 1.0 => r,
        (BinaryOp::Mul, _, Expr::Num(one)) if *one == 1.0 => l,
        (BinaryOp::Div, Expr::Num(z), _) if *z == 0.0 => num(0.0),
        (BinaryOp::Div, _, Expr::Num(one)) if *one == 1.0 => l,
        (BinaryOp::Pow, _, Expr::Num(one)) if *one == 1.0 => l,
        (BinaryOp::Pow, _, Expr::Num(z)) if *z == 0.0 => num(1.0),
        _ => bin(op, l, r),
    }
}

fn num(v: f64) -> Expr {
    Expr::Num(v)
}

fn neg(e: Expr) -> Expr {
    Expr::Neg(Box::new(e))
}

fn bin(op: BinaryOp, left: Expr, right: Expr) -> Expr {
    Expr::Binary {
        op,
        left: Box::new(left),
        right: Box::new(right),
    }
}

fn call(func: &str, arg: Expr) -> Expr {
    Expr::Call {
        func: func.to_owned(),
        args: vec![arg],
    }
}
