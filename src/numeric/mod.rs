pub(crate) mod diff;
pub(crate) mod integral;
pub(crate) mod root;
