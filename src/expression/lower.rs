use crate::expression::ast::{BinaryOp, Expr};
use crate::expression::bytecode::{BuiltinId, Op, Program};
use crate::expression::error::ExprError;

/// Flatten an AST into a stack program.
pub(crate) fn lower_to_program(expr: &Expr) -> Result<Program, ExprError> {
    let mut p = Program::new();
    let mut depth = Depth::default();
    lower_expr(expr, &mut p, &mut depth)?;
    p.max_stack = depth.max;
    Ok(p)
}

#[derive(Default)]
struct Depth {
    cur: usize,
    max: usize,
}

impl Depth {
    fn push(&mut self) {
        self.cur += 1;
        self.max = self.max.max(self.cur);
    }

    fn pop(&mut self, n: usize) {
        self.cur = self.cur.saturating_sub(n);
    }
}

fn lower_expr(e: &Expr, out: &mut Program, depth: &mut Depth) -> Result<(), ExprError> {
    match e {
        Expr::Num(v) => {
            let idx = out.push_const(*v);
            out.ops.push(Op::PushConst(idx));
            depth.push();
            Ok(())
        }
        Expr::Var => {
            out.ops.push(Op::LoadX);
            depth.push();
            Ok(())
        }
        Expr::Neg(inner) => {
            lower_expr(inner, out, depth)?;
            out.ops.push(Op::Neg);
            Ok(())
        }
        Expr::Binary { op, left, right } => {
            lower_expr(left, out, depth)?;
            lower_expr(right, out, depth)?;
            out.ops.push(match op {
                BinaryOp::Add => Op::Add,
                BinaryOp::Sub => Op::Sub,
                BinaryOp::Mul => Op::Mul,
                BinaryOp::Div => Op::Div,
                BinaryOp::Mod => Op::Mod,
                BinaryOp::Pow => Op::Pow,
            });
            depth.pop(1);
            Ok(())
        }
        Expr::Call { func, args } => {
            let (id, arity) = resolve_builtin(func)?;
            if args.len() != arity {
                return Err(ExprError::new(
                    0,
                    format!("{func} expects {arity} argument(s), got {}", args.len()),
                ));
            }
            for a in args {
                lower_expr(a, out, depth)?;
            }
            out.ops.push(Op::CallBuiltin(id));
            depth.pop(arity - 1);
            Ok(())
        }
    }
}

pub(crate) fn resolve_builtin(name: &str) -> Result<(BuiltinId, usize), ExprError> {
    let resolved = match name {
        "abs" => (BuiltinId::Abs, 1),
        "sin" => (BuiltinId::Sin, 1),
        "cos" => (BuiltinId::Cos, 1),
        "tan" => (BuiltinId::Tan, 1),
        "asin" => (BuiltinId::Asin, 1),
        "acos" => (BuiltinId::Acos, 1),
        "atan" => (BuiltinId::Atan, 1),
        "sinh" => (BuiltinId::Sinh, 1),
        "cosh" => (BuiltinId::Cosh, 1),
        "tanh" => (BuiltinId::Tanh, 1),
        "exp" => (BuiltinId::Exp, 1),
        "ln" => (BuiltinId::Ln, 1),
        "log" => (BuiltinId::Log, 1),
        "sqrt" => (BuiltinId::Sqrt, 1),
        "floor" => (BuiltinId::Floor, 1),
        "ceil" => (BuiltinId::Ceil, 1),
        "min" => (BuiltinId::Min, 2),
        "max" => (BuiltinId::Max, 2),
        other => {
            return Err(ExprError::new(
                0,
                format!("unknown function \"{other}\""),
            ));
        }
    };
    Ok(resolved)
}
