//! Data model for a validated IPPcode24 program.
//!
//! An IPPcode24 source file is a header line followed by at most one
//! instruction per line. Comments run from `#` to end of line.
//!
//! ```text
//! .IPPcode24
//! DEFVAR GF@counter       # variables are frame-qualified
//! MOVE GF@counter int@0   # constants are written kind@value
//! LABEL loop
//! WRITE GF@counter
//! ADD GF@counter GF@counter int@1
//! JUMPIFNEQ loop GF@counter int@10
//! ```
//!
//! Everything in this module is immutable once constructed: operands and
//! instructions are built during validation of a single line and owned by
//! the `Program` thereafter.

use std::fmt;

/// The mandatory first logical line of every source file. Compared
/// case-insensitively.
pub const HEADER: &str = ".IPPcode24";

/// Language identifier stamped on the root element of the output tree.
pub const LANGUAGE: &str = "IPPcode24";

/// The three variable-storage frames addressable from source code.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Frame {
    Global,
    Local,
    Temporary,
}

impl Frame {
    /// Resolves the two-letter prefix of a variable token. Prefixes are
    /// case-sensitive: `gf` is not a frame.
    pub fn from_prefix(prefix: &str) -> Option<Frame> {
        match prefix {
            "GF" => Some(Frame::Global),
            "LF" => Some(Frame::Local),
            "TF" => Some(Frame::Temporary),
            _ => None,
        }
    }

    pub fn prefix(&self) -> &'static str {
        match self {
            Frame::Global => "GF",
            Frame::Local => "LF",
            Frame::Temporary => "TF",
        }
    }
}

/// The literal kinds a constant operand may carry.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum ConstKind {
    Int,
    Bool,
    String,
    Nil,
    Float,
}

impl ConstKind {
    /// Resolves the `kind@` marker of a constant token.
    pub fn from_marker(marker: &str) -> Option<ConstKind> {
        match marker {
            "int" => Some(ConstKind::Int),
            "bool" => Some(ConstKind::Bool),
            "string" => Some(ConstKind::String),
            "nil" => Some(ConstKind::Nil),
            "float" => Some(ConstKind::Float),
            _ => None,
        }
    }

    /// Kind tag used by the XML wire format.
    pub fn tag(&self) -> &'static str {
        match self {
            ConstKind::Int => "int",
            ConstKind::Bool => "bool",
            ConstKind::String => "string",
            ConstKind::Nil => "nil",
            ConstKind::Float => "float",
        }
    }
}

/// One operand of an instruction. The kind is fixed at construction and
/// never reinterpreted; illegal kind/value combinations are
/// unrepresentable.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum Operand {
    Var { frame: Frame, name: String },
    Const { kind: ConstKind, value: String },
    Label(String),
    Type(String),
}

impl Operand {
    /// Kind tag used by the XML wire format.
    pub fn tag(&self) -> &'static str {
        match self {
            Operand::Var { .. } => "var",
            Operand::Const { kind, .. } => kind.tag(),
            Operand::Label(_) => "label",
            Operand::Type(_) => "type",
        }
    }

    /// Text content emitted for this operand. Variables render as the
    /// full frame-qualified token; constants render their decoded value.
    pub fn text(&self) -> String {
        match self {
            Operand::Var { frame, name } => format!("{}@{}", frame.prefix(), name),
            Operand::Const { value, .. } => value.clone(),
            Operand::Label(name) | Operand::Type(name) => name.clone(),
        }
    }
}

/// A single validated instruction.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Instruction {
    /// 1-based assembly order, contiguous within a program.
    pub order: u32,
    /// Opcode name, case-normalized to uppercase.
    pub opcode: String,
    /// Operands in declared order; length matches the opcode's signature.
    pub operands: Vec<Operand>,
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}: {}", self.order, self.opcode)?;
        for operand in &self.operands {
            write!(f, " {}", operand.text())?;
        }
        Ok(())
    }
}

/// A fully assembled program. Zero instructions is legal.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Program {
    pub language: String,
    pub instructions: Vec<Instruction>,
}
