pub(crate) mod ast;
pub(crate) mod bytecode;
pub(crate) mod deriv;
pub(crate) mod error;
pub(crate) mod lexer;
pub(crate) mod lower;
pub(crate) mod parser;
pub(crate) mod provider;
pub(crate) mod vm;
