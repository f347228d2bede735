use crate::expression::bytecode::{BuiltinId, Op, Program};

/// Evaluate a compiled program with the free variable bound to `x`.
///
/// Domain errors (division by zero, log of a negative, even roots of
/// negatives) follow IEEE semantics and surface as non-finite values;
/// callers treat any non-finite result as "undefined at this sample".
pub(crate) fn eval_program(p: &Program, x: f64) -> f64 {
    let mut stack: Vec<f64> = Vec::with_capacity(p.max_stack.max(1));

    for &op in &p.ops {
        match op {
            Op::PushConst(idx) => {
                let v = p.consts.get(idx.0 as usize).copied().unwrap_or(f64::NAN);
                stack.push(v);
            }
            Op::LoadX => stack.push(x),

            Op::Neg => {
                let v = pop(&mut stack);
                stack.push(-v);
            }
            Op::Add => bin(&mut stack, |a, b| a + b),
            Op::Sub => bin(&mut stack, |a, b| a - b),
            Op::Mul => bin(&mut stack, |a, b| a * b),
            Op::Div => bin(&mut stack, |a, b| a / b),
            Op::Mod => bin(&mut stack, |a, b| a % b),
            Op::Pow => bin(&mut stack, f64::powf),

            Op::CallBuiltin(id) => call_builtin(&mut stack, id),
        }
    }

    pop(&mut stack)
}

// Programs are produced by lowering, which guarantees stack discipline;
// an underflow can only mean a corrupted program, so it degrades to NaN.
fn pop(stack: &mut Vec<f64>) -> f64 {
    stack.pop().unwrap_or(f64::NAN)
}

fn bin(stack: &mut Vec<f64>, f: impl FnOnce(f64, f64) -> f64) {
    let b = pop(stack);
    let a = pop(stack);
    stack.push(f(a, b));
}

fn call_builtin(stack: &mut Vec<f64>, id: BuiltinId) {
    match id {
        BuiltinId::Abs => un(stack, f64::abs),
        BuiltinId::Sin => un(stack, f64::sin),
        BuiltinId::Cos => un(stack, f64::cos),
        BuiltinId::Tan => un(stack, f64::tan),
        BuiltinId::Asin => un(stack, f64::asin),
        BuiltinId::Acos => un(stack, f64::acos),
        BuiltinId::Atan => un(stack, f64::atan),
        BuiltinId::Sinh => un(stack, f64::sinh),
        BuiltinId::Cosh => un(stack, f64::cosh),
        BuiltinId::Tanh => un(stack, f64::tanh),
        BuiltinId::Exp => un(stack, f64::exp),
        BuiltinId::Ln => un(stack, f64::ln),
        BuiltinId::Log => un(stack, f64::log10),
        BuiltinId::Sqrt => un(stack, f64::sqrt),
        BuiltinId::Floor => un(stack, f64::floor),
        BuiltinId::Ceil => un(stack, f64::ceil),
        BuiltinId::Min => bin(stack, f64::min),
        BuiltinId::Max => bin(stack, f64::max),
    }
}

fn un(stack: &mut Vec<f64>, f: impl FnOnce(f64) -> f64) {
    let v = pop(stack);
    stack.push(f(v));
}
