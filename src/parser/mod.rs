//! The IPPcode24 front end: a single-pass pipeline from raw source lines
//! to a validated, order-numbered program and its XML rendering.
//!
//! Data flows strictly forward: physical lines are stripped and split
//! (`lexer`), each token sequence is checked against the opcode signature
//! table (`optable`, `validate`), validated instructions are numbered and
//! collected (`assemble`), and the finished program is serialized (`xml`).
//! The first classified failure aborts the whole run.

pub mod assemble;
pub mod ast;
pub mod error;
pub mod grammar;
pub mod lexer;
pub mod optable;
pub mod validate;
pub mod xml;
