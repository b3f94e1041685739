//! The instruction validator: turns one logical line's token sequence
//! into a validated `Instruction` or a classified failure.

use super::ast::{ConstKind, Frame, Instruction, Operand};
use super::error::ParseError;
use super::grammar;
use super::optable::{self, ArgSpec};

/// Validates one logical line worth of tokens. `order` is the sequence
/// number the instruction will carry; `line_no` is the 1-based physical
/// line used in diagnostics.
pub fn validate(tokens: &[&str], order: u32, line_no: usize) -> Result<Instruction, ParseError> {
    let opcode = match tokens.first() {
        Some(token) => *token,
        // The tokenizer never yields an empty sequence.
        None => return Err(ParseError::Internal("validator called with no tokens".to_string())),
    };

    let signature = optable::signature(opcode).ok_or_else(|| {
        ParseError::Syntax(format!("line {}: unknown opcode `{}`", line_no, opcode))
    })?;

    let args = &tokens[1..];
    if args.len() != signature.len() {
        return Err(ParseError::Syntax(format!(
            "line {}: `{}` takes {} operand(s), got {}",
            line_no,
            opcode.to_ascii_uppercase(),
            signature.len(),
            args.len()
        )));
    }

    let mut operands = Vec::with_capacity(args.len());
    for (position, (token, spec)) in args.iter().zip(signature.iter()).enumerate() {
        match classify(token, *spec) {
            Ok(operand) => operands.push(operand),
            Err(reason) => {
                return Err(ParseError::Syntax(format!(
                    "line {}: operand {} of `{}`: {}",
                    line_no,
                    position + 1,
                    opcode.to_ascii_uppercase(),
                    reason
                )))
            }
        }
    }

    Ok(Instruction {
        order,
        opcode: opcode.to_ascii_uppercase(),
        operands,
    })
}

/// Classifies one operand token against what the signature permits at its
/// position. Grammars are tried in a fixed order: the variable grammar
/// first, then the tagged constant forms, then bare identifiers.
fn classify(token: &str, spec: ArgSpec) -> Result<Operand, String> {
    match spec {
        ArgSpec::Var => variable(token),
        ArgSpec::Symb => variable(token).or_else(|_| constant(token)),
        ArgSpec::Label => {
            if grammar::is_identifier(token) {
                Ok(Operand::Label(token.to_string()))
            } else {
                Err(format!("`{}` is not a valid label", token))
            }
        }
        ArgSpec::Type => {
            if grammar::is_type_name(token) {
                Ok(Operand::Type(token.to_string()))
            } else {
                Err(format!("`{}` is not a type name", token))
            }
        }
    }
}

fn variable(token: &str) -> Result<Operand, String> {
    let (prefix, name) = match token.split_once('@') {
        Some(parts) => parts,
        None => return Err(format!("`{}` is not frame-qualified", token)),
    };
    let frame = match Frame::from_prefix(prefix) {
        Some(frame) => frame,
        None => return Err(format!("`{}` is not a variable frame", prefix)),
    };
    if !grammar::is_identifier(name) {
        return Err(format!("`{}` is not a valid variable name", name));
    }
    Ok(Operand::Var {
        frame,
        name: name.to_string(),
    })
}

fn constant(token: &str) -> Result<Operand, String> {
    let (marker, body) = match token.split_once('@') {
        Some(parts) => parts,
        None => return Err(format!("`{}` is neither a variable nor a constant", token)),
    };
    let kind = match ConstKind::from_marker(marker) {
        Some(kind) => kind,
        None => return Err(format!("`{}` is neither a frame nor a constant kind", marker)),
    };
    let value = match kind {
        ConstKind::String => grammar::decode_string(body)?,
        ConstKind::Int if grammar::is_int_literal(body) => body.to_string(),
        ConstKind::Bool if grammar::is_bool_literal(body) => body.to_string(),
        ConstKind::Nil if grammar::is_nil_literal(body) => body.to_string(),
        ConstKind::Float if grammar::is_float_literal(body) => body.to_string(),
        _ => return Err(format!("`{}` is not a valid {} literal", body, kind.tag())),
    };
    Ok(Operand::Const { kind, value })
}
