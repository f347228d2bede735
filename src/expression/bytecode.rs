#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct ConstIdx(pub(crate) u32);

/// Builtin functions with a fixed arity, resolved at lowering time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum BuiltinId {
    Abs,
    Sin,
    Cos,
    Tan,
    Asin,
    Acos,
    Atan,
    Sinh,
    Cosh,
    Tanh,
    Exp,
    Ln,
    Log,
    Sqrt,
    Floor,
    Ceil,
    Min,
    Max,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum Op {
    PushConst(ConstIdx),
    /// Push the per-evaluation binding of the free variable.
    LoadX,

    Neg,
    Add,
    Sub,
    Mul,
    Div,
    Mod,
    Pow,

    CallBuiltin(BuiltinId),
}

/// Flat, immutable compiled form of one expression.
///
/// Programs are pure data: evaluating one never mutates it, so a single
/// program may be shared across callers without locking.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Program {
    pub(crate) ops: Vec<Op>,
    pub(crate) consts: Vec<f64>,
    /// Upper bound on evaluation stack depth, sized at lowering time.
    pub(crate) max_stack: usize,
}

impl Program {
    pub(crate) fn new() -> Self {
        Self {
            ops: Vec::new(),
            consts: Vec::new(),
            max_stack: 0,
        }
    }

    pub(crate) fn push_const(&mut self, v: f64) -> ConstIdx {
        let idx = ConstIdx(self.consts.len() as u32);
        self.consts.push(v);
        idx
    }
}
