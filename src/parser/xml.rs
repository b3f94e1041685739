//! The tree serializer: renders an assembled program as an indented,
//! entity-escaped XML document. Output is deterministic byte for byte for
//! a given program: element order follows instruction order, attribute
//! order is fixed, and escaping is total.

use super::ast::{Instruction, Program};
use super::error::ParseError;
use super::optable;

const INDENT: &str = "  ";

pub fn serialize(program: &Program) -> Result<String, ParseError> {
    let mut out = String::new();
    out.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");

    if program.instructions.is_empty() {
        out.push_str(&format!(
            "<program language=\"{}\"/>\n",
            escape_attr(&program.language)
        ));
        return Ok(out);
    }

    out.push_str(&format!(
        "<program language=\"{}\">\n",
        escape_attr(&program.language)
    ));
    for instruction in &program.instructions {
        write_instruction(&mut out, instruction)?;
    }
    out.push_str("</program>\n");
    Ok(out)
}

fn write_instruction(out: &mut String, instruction: &Instruction) -> Result<(), ParseError> {
    // A stored operand count that disagrees with the signature table means
    // the validator let something through: our bug, not the input's.
    let arity = match optable::signature(&instruction.opcode) {
        Some(signature) => signature.len(),
        None => {
            return Err(ParseError::Internal(format!(
                "instruction {} has unknown opcode `{}`",
                instruction.order, instruction.opcode
            )))
        }
    };
    if instruction.operands.len() != arity {
        return Err(ParseError::Internal(format!(
            "instruction {} `{}` carries {} operand(s), signature says {}",
            instruction.order,
            instruction.opcode,
            instruction.operands.len(),
            arity
        )));
    }

    if instruction.operands.is_empty() {
        out.push_str(&format!(
            "{}<instruction order=\"{}\" opcode=\"{}\"/>\n",
            INDENT,
            instruction.order,
            escape_attr(&instruction.opcode)
        ));
        return Ok(());
    }

    out.push_str(&format!(
        "{}<instruction order=\"{}\" opcode=\"{}\">\n",
        INDENT,
        instruction.order,
        escape_attr(&instruction.opcode)
    ));
    for (position, operand) in instruction.operands.iter().enumerate() {
        out.push_str(&format!(
            "{0}{0}<arg{1} type=\"{2}\">{3}</arg{1}>\n",
            INDENT,
            position + 1,
            operand.tag(),
            escape_text(&operand.text())
        ));
    }
    out.push_str(&format!("{}</instruction>\n", INDENT));
    Ok(())
}

/// Entity-escapes text content.
fn escape_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
    out
}

/// Attribute values additionally escape quotes.
fn escape_attr(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}
