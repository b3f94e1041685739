//! The program assembler: enforces the mandatory leading header, numbers
//! validated instructions in input order, and aborts on the first
//! classified failure. The sequence counter and the append-only
//! instruction list live here and nowhere else.

use std::io::BufRead;

use super::ast::{Instruction, Program, HEADER, LANGUAGE};
use super::error::ParseError;
use super::lexer;
use super::validate;

pub struct Assembler {
    instructions: Vec<Instruction>,
    next_order: u32,
}

impl Assembler {
    pub fn new() -> Self {
        Assembler {
            instructions: Vec::new(),
            next_order: 1,
        }
    }

    /// Runs the pipeline over an ordered line source, consuming the
    /// assembler and yielding the validated program. Fail-fast: the first
    /// classified failure aborts with no partial result.
    pub fn run<R: BufRead>(mut self, reader: R) -> Result<Program, ParseError> {
        let mut header_seen = false;

        for (index, line) in reader.lines().enumerate() {
            let line = line
                .map_err(|err| ParseError::Internal(format!("failed to read input: {}", err)))?;
            let content = match lexer::logical_line(&line) {
                Some(content) => content,
                None => continue,
            };

            if !header_seen {
                if content.eq_ignore_ascii_case(HEADER) {
                    header_seen = true;
                    continue;
                }
                return Err(ParseError::Header(format!(
                    "line {}: expected `{}`, found `{}`",
                    index + 1,
                    HEADER,
                    content
                )));
            }

            let tokens = lexer::tokenize(content);
            let instruction = validate::validate(&tokens, self.next_order, index + 1)?;
            debug!("line {}: {}", index + 1, instruction);
            self.instructions.push(instruction);
            self.next_order += 1;
        }

        // Covers completely empty input as well.
        if !header_seen {
            return Err(ParseError::Header(format!("missing `{}` header", HEADER)));
        }

        Ok(Program {
            language: LANGUAGE.to_string(),
            instructions: self.instructions,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{self, Read};

    fn assemble(source: &str) -> Result<Program, ParseError> {
        Assembler::new().run(source.as_bytes())
    }

    /// A line source whose every read fails, standing in for an
    /// unreadable input.
    struct FailingReader;

    impl Read for FailingReader {
        fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::Other, "device gone"))
        }
    }

    impl BufRead for FailingReader {
        fn fill_buf(&mut self) -> io::Result<&[u8]> {
            Err(io::Error::new(io::ErrorKind::Other, "device gone"))
        }

        fn consume(&mut self, _amt: usize) {}
    }

    #[test]
    fn test_minimal_program() {
        let program = assemble(".IPPcode24\nMOVE GF@x int@42\n").unwrap();
        assert_eq!(program.language, "IPPcode24");
        assert_eq!(program.instructions.len(), 1);
        assert_eq!(program.instructions[0].order, 1);
        assert_eq!(program.instructions[0].opcode, "MOVE");
    }

    #[test]
    fn test_header_only_program_is_valid() {
        let program = assemble(".IPPcode24\n").unwrap();
        assert!(program.instructions.is_empty());
    }

    #[test]
    fn test_header_compare_folds_case() {
        assert!(assemble(".ippCODE24\nBREAK\n").is_ok());
    }

    #[test]
    fn test_header_may_carry_comment() {
        assert!(assemble(".IPPcode24 # language header\n").is_ok());
    }

    #[test]
    fn test_comments_and_blanks_may_precede_header() {
        let program = assemble("# prologue\n\n   \n.IPPcode24\nBREAK\n").unwrap();
        assert_eq!(program.instructions.len(), 1);
    }

    #[test]
    fn test_missing_header() {
        assert!(matches!(
            assemble("MOVE GF@x int@42\n"),
            Err(ParseError::Header(_))
        ));
        assert!(matches!(
            assemble(".IPPcode25\nBREAK\n"),
            Err(ParseError::Header(_))
        ));
        // No header means no validation: even a malformed body line is
        // reported as a header error.
        assert!(matches!(
            assemble("FOO BAR BAZ\n"),
            Err(ParseError::Header(_))
        ));
    }

    #[test]
    fn test_empty_input_is_a_header_error() {
        assert!(matches!(assemble(""), Err(ParseError::Header(_))));
        assert!(matches!(
            assemble("# only comments\n\n"),
            Err(ParseError::Header(_))
        ));
    }

    #[test]
    fn test_sequence_numbers_ignore_comment_lines() {
        let source = "\
.IPPcode24
DEFVAR GF@x    # first
# a comment between instructions

MOVE GF@x int@1
WRITE GF@x
";
        let program = assemble(source).unwrap();
        let orders: Vec<u32> = program.instructions.iter().map(|i| i.order).collect();
        assert_eq!(orders, vec![1, 2, 3]);

        // Inserting more noise must not change numbering or content.
        let noisy = "\
# header below
.IPPcode24

DEFVAR GF@x    # first
# a comment between instructions


MOVE GF@x int@1
# trailing
WRITE GF@x
# done
";
        assert_eq!(assemble(noisy).unwrap(), program);
    }

    #[test]
    fn test_fail_fast_on_first_bad_line() {
        let result = assemble(".IPPcode24\nMOVE GF@x\nWRITE GF@x\n");
        match result {
            Err(ParseError::Syntax(message)) => assert!(message.contains("line 2")),
            other => panic!("expected syntax error, got {:?}", other),
        }
    }

    #[test]
    fn test_unreadable_source_is_internal() {
        match Assembler::new().run(FailingReader) {
            Err(ParseError::Internal(message)) => {
                assert!(message.contains("failed to read input"))
            }
            other => panic!("expected internal error, got {:?}", other),
        }
    }

    #[test]
    fn test_unknown_opcode_in_body() {
        assert!(matches!(
            assemble(".IPPcode24\nFOO GF@x\n"),
            Err(ParseError::Syntax(_))
        ));
    }
}
