//! The opcode signature table: every opcode of the language mapped to its
//! required operand count and the operand spec for each position. Built
//! once on first use and shared read-only for the life of the process.
//!
//! Lookup folds case; adding an opcode means adding one table entry.

use std::collections::HashMap;

/// What one operand position accepts.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum ArgSpec {
    /// A frame-qualified variable.
    Var,
    /// A variable or any constant literal.
    Symb,
    /// A bare label identifier.
    Label,
    /// A type name.
    Type,
}

use ArgSpec::{Label, Symb, Type, Var};

const NULLARY: &[ArgSpec] = &[];
const V: &[ArgSpec] = &[Var];
const S: &[ArgSpec] = &[Symb];
const L: &[ArgSpec] = &[Label];
const VS: &[ArgSpec] = &[Var, Symb];
const VT: &[ArgSpec] = &[Var, Type];
const VSS: &[ArgSpec] = &[Var, Symb, Symb];
const LSS: &[ArgSpec] = &[Label, Symb, Symb];

lazy_static! {
    static ref SIGNATURES: HashMap<&'static str, &'static [ArgSpec]> = {
        let mut table: HashMap<&'static str, &'static [ArgSpec]> = HashMap::new();

        // Frames and variables
        table.insert("move", VS);
        table.insert("createframe", NULLARY);
        table.insert("pushframe", NULLARY);
        table.insert("popframe", NULLARY);
        table.insert("defvar", V);
        table.insert("call", L);
        table.insert("return", NULLARY);

        // Data stack
        table.insert("pushs", S);
        table.insert("pops", V);

        // Arithmetic, relational, boolean
        table.insert("add", VSS);
        table.insert("sub", VSS);
        table.insert("mul", VSS);
        table.insert("idiv", VSS);
        table.insert("div", VSS);
        table.insert("lt", VSS);
        table.insert("gt", VSS);
        table.insert("eq", VSS);
        table.insert("and", VSS);
        table.insert("or", VSS);
        table.insert("not", VS);

        // Conversions
        table.insert("int2char", VS);
        table.insert("stri2int", VSS);
        table.insert("int2float", VS);
        table.insert("float2int", VS);

        // I/O
        table.insert("read", VT);
        table.insert("write", S);

        // Strings
        table.insert("concat", VSS);
        table.insert("strlen", VS);
        table.insert("getchar", VSS);
        table.insert("setchar", VSS);

        // Types
        table.insert("type", VS);

        // Control flow
        table.insert("label", L);
        table.insert("jump", L);
        table.insert("jumpifeq", LSS);
        table.insert("jumpifneq", LSS);
        table.insert("exit", S);

        // Debugging
        table.insert("dprint", S);
        table.insert("break", NULLARY);

        table
    };
}

/// Looks up the signature for an opcode token, folding case. `None` means
/// the opcode does not exist in the language, which callers report as a
/// syntactic error.
pub fn signature(opcode: &str) -> Option<&'static [ArgSpec]> {
    SIGNATURES.get(opcode.to_ascii_lowercase().as_str()).copied()
}
