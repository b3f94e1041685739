//! The line tokenizer: comment stripping, blank skipping, and whitespace
//! splitting. Pure functions over text, so the stages above are testable
//! without a real input stream.

/// Strips the `#` comment and surrounding whitespace from one physical
/// line. `None` means the line carries no content and is not counted as
/// an instruction.
pub fn logical_line(line: &str) -> Option<&str> {
    let content = match line.find('#') {
        Some(index) => &line[..index],
        None => line,
    };
    let content = content.trim();
    if content.is_empty() {
        None
    } else {
        Some(content)
    }
}

/// Splits a logical line into its tokens: the candidate opcode first,
/// candidate operands after.
pub fn tokenize(content: &str) -> Vec<&str> {
    content.split_whitespace().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_logical_line() {
        assert_eq!(logical_line("MOVE GF@x int@42"), Some("MOVE GF@x int@42"));
        assert_eq!(logical_line("  MOVE GF@x int@42  "), Some("MOVE GF@x int@42"));
        assert_eq!(logical_line("MOVE GF@x int@42 # copy"), Some("MOVE GF@x int@42"));
        assert_eq!(logical_line(".IPPcode24 # header"), Some(".IPPcode24"));

        assert_eq!(logical_line(""), None);
        assert_eq!(logical_line("   \t  "), None);
        assert_eq!(logical_line("# just a comment"), None);
        assert_eq!(logical_line("   # indented comment"), None);
    }

    #[test]
    fn test_comment_swallows_rest_of_line() {
        assert_eq!(logical_line("WRITE GF@x # WRITE GF@y"), Some("WRITE GF@x"));
        // Only the first marker matters.
        assert_eq!(logical_line("BREAK # a # b # c"), Some("BREAK"));
    }

    #[test]
    fn test_tokenize() {
        assert_eq!(tokenize("BREAK"), vec!["BREAK"]);
        assert_eq!(
            tokenize("MOVE GF@x int@42"),
            vec!["MOVE", "GF@x", "int@42"]
        );
        assert_eq!(
            tokenize("ADD\tGF@x \t GF@y  int@1"),
            vec!["ADD", "GF@x", "GF@y", "int@1"]
        );
    }
}
