//! Hex text helpers for frames typed on the command line or pasted from
//! serial captures.

use crate::exit::{CliError, CliResult, USAGE};

/// Parse hex text into bytes.
///
/// Whitespace and `:`, `,`, `-` separators are ignored, as are `0x`
/// prefixes, so `aa aa aa`, `AA:AA:AA`, `0xaa,0xaa,0xaa` and `aaaaaa` all
/// parse the same.
pub fn parse_hex(input: &str) -> CliResult<Vec<u8>> {
    let mut digits = Vec::with_capacity(input.len());
    for token in input.split(|c: char| c.is_whitespace() || matches!(c, ':' | ',' | '-')) {
        let token = token
            .strip_prefix("0x")
            .or_else(|| token.strip_prefix("0X"))
            .unwrap_or(token);
        for c in token.chars() {
            let nibble = c
                .to_digit(16)
                .ok_or_else(|| CliError::new(USAGE, format!("invalid hex digit {c:?}")))?;
            digits.push(nibble as u8);
        }
        if digits.len() % 2 != 0 {
            return Err(CliError::new(
                USAGE,
                format!("hex token {token:?} has an odd number of digits"),
            ));
        }
    }
    Ok(digits.chunks(2).map(|pair| (pair[0] << 4) | pair[1]).collect())
}

/// Format bytes as space-separated lowercase hex.
pub fn to_hex(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|b| format!("{b:02x}"))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Parse an unsigned integer given in decimal or with a `0x` prefix.
pub fn parse_uint(input: &str) -> Result<u64, String> {
    let input = input.trim();
    let parsed = match input
        .strip_prefix("0x")
        .or_else(|| input.strip_prefix("0X"))
    {
        Some(hex) => u64::from_str_radix(hex, 16),
        None => input.parse(),
    };
    parsed.map_err(|_| format!("invalid number: {input}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_common_spellings() {
        let expected = vec![0xAA, 0xAA, 0x05];
        assert_eq!(parse_hex("aaaa05").unwrap(), expected);
        assert_eq!(parse_hex("aa aa 05").unwrap(), expected);
        assert_eq!(parse_hex("AA:AA:05").unwrap(), expected);
        assert_eq!(parse_hex("0xaa, 0xAA, 0x05").unwrap(), expected);
        assert_eq!(parse_hex("aa-aa\n05\n").unwrap(), expected);
    }

    #[test]
    fn empty_input_is_empty() {
        assert!(parse_hex("").unwrap().is_empty());
        assert!(parse_hex("  \n").unwrap().is_empty());
    }

    #[test]
    fn rejects_bad_digits() {
        let err = parse_hex("aa zz").unwrap_err();
        assert_eq!(err.code, USAGE);
    }

    #[test]
    fn rejects_split_bytes() {
        assert!(parse_hex("a aa").is_err());
        assert!(parse_hex("aaa").is_err());
    }

    #[test]
    fn formats_lowercase_spaced() {
        assert_eq!(to_hex(&[0xAA, 0x05, 0x00]), "aa 05 00");
        assert_eq!(to_hex(&[]), "");
    }

    #[test]
    fn parses_uints() {
        assert_eq!(parse_uint("14"), Ok(14));
        assert_eq!(parse_uint("0x20"), Ok(32));
        assert_eq!(parse_uint("0X1F"), Ok(31));
        assert!(parse_uint("x1").is_err());
    }
}
