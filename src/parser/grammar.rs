//! Pure token grammar for IPPcode24: identifiers, literal syntaxes, and
//! string-escape decoding. Everything here is a predicate over a single
//! token with no I/O and no state beyond the lazily compiled patterns.

use regex::Regex;

lazy_static! {
    // Identifiers may contain letters, digits, and a fixed set of
    // punctuation, and must not start with a digit.
    static ref IDENT: Regex =
        Regex::new(r"^[A-Za-z_\-$&%*!?][A-Za-z0-9_\-$&%*!?]*$").unwrap();
    // `-` is allowed on any radix, `+` on decimal only; radix prefixes
    // are lowercase.
    static ref INT: Regex =
        Regex::new(r"^(-?(0x[0-9a-fA-F]+|0o[0-7]+|[0-9]+)|\+[0-9]+)$").unwrap();
    // Decimal floating point carrying a fraction or exponent, or C99
    // hexadecimal floating point with its mandatory binary exponent
    // (0x1.8p+1). Integer shapes are not float literals.
    static ref FLOAT: Regex = Regex::new(
        r"^[+-]?(0x([0-9a-fA-F]+(\.[0-9a-fA-F]*)?|\.[0-9a-fA-F]+)[pP][+-]?[0-9]+|[0-9]+(\.[0-9]*([eE][+-]?[0-9]+)?|[eE][+-]?[0-9]+)|\.[0-9]+([eE][+-]?[0-9]+)?)$",
    )
    .unwrap();
}

/// Bare identifier: labels, type names, and the name part of a variable.
pub fn is_identifier(token: &str) -> bool {
    IDENT.is_match(token)
}

pub fn is_int_literal(token: &str) -> bool {
    INT.is_match(token)
}

pub fn is_float_literal(token: &str) -> bool {
    FLOAT.is_match(token)
}

pub fn is_bool_literal(token: &str) -> bool {
    token == "true" || token == "false"
}

pub fn is_nil_literal(token: &str) -> bool {
    token == "nil"
}

/// Type-name operands name one of the language's value types.
pub fn is_type_name(token: &str) -> bool {
    matches!(token, "int" | "bool" | "string" | "nil" | "float")
}

/// Decodes the `\ddd` escapes of a string literal body. Raw whitespace
/// cannot reach this function (tokens are split on whitespace), so the
/// only rejection is a backslash not followed by exactly three decimal
/// digits.
pub fn decode_string(body: &str) -> Result<String, String> {
    let mut out = String::with_capacity(body.len());
    let mut chars = body.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        let mut code: u32 = 0;
        for _ in 0..3 {
            match chars.next().and_then(|d| d.to_digit(10)) {
                Some(digit) => code = code * 10 + digit,
                None => {
                    return Err(format!(
                        "malformed escape sequence in string literal `{}`",
                        body
                    ))
                }
            }
        }
        match std::char::from_u32(code) {
            Some(decoded) => out.push(decoded),
            None => return Err(format!("escape `\\{:03}` is not a valid character", code)),
        }
    }
    Ok(out)
}
