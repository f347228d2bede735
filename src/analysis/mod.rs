pub(crate) mod engine;
pub(crate) mod extrema;
pub(crate) mod intersect;
