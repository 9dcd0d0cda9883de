const HEX: &[u8; 16] = b"0123456789abcdef";

/// Appends `value` with standard JSON string escaping (quotes not included).
pub fn escape_string_into(out: &mut Vec<u8>, value: &str) {
    let bytes = value.as_bytes();
    let mut start = 0;
    for (idx, &byte) in bytes.iter().enumerate() {
        let escaped: &[u8] = match byte {
            b'"' => b"\\\"",
            b'\\' => b"\\\\",
            b'\n' => b"\\n",
            b'\r' => b"\\r",
            b'\t' => b"\\t",
            0x08 => b"\\b",
            0x0c => b"\\f",
            0x00..=0x1f => {
                if start < idx {
                    out.extend_from_slice(&bytes[start..idx]);
                }
                out.extend_from_slice(b"\\u00");
                out.push(HEX[(byte >> 4) as usize]);
                out.push(HEX[(byte & 0x0f) as usize]);
                start = idx + 1;
                continue;
            }
            _ => continue,
        };
        if start < idx {
            out.extend_from_slice(&bytes[start..idx]);
        }
        out.extend_from_slice(escaped);
        start = idx + 1;
    }
    if start < bytes.len() {
        out.extend_from_slice(&bytes[start..]);
    }
}

pub fn quote(value: &str) -> String {
    let mut out = Vec::with_capacity(value.len() + 2);
    out.push(b'"');
    escape_string_into(&mut out, value);
    out.push(b'"');
    String::from_utf8(out).unwrap_or_default()
}

/// Resolves JSON escape sequences in the body of a quoted string.
///
/// The error is a short description of the first malformed escape.
pub fn unquote(raw: &str) -> Result<String, String> {
    if !raw.contains('\\') {
        return Ok(raw.to_string());
    }

    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.chars();
    while let Some(ch) = chars.next() {
        if ch != '\\' {
            out.push(ch);
            continue;
        }
        let escaped = chars
            .next()
            .ok_or_else(|| "unterminated escape sequence".to_string())?;
        match escaped {
            '"' => out.push('"'),
            '\\' => out.push('\\'),
            '/' => out.push('/'),
            'b' => out.push('\u{08}'),
            'f' => out.push('\u{0c}'),
            'n' => out.push('\n'),
            'r' => out.push('\r'),
            't' => out.push('\t'),
            'u' => {
                let high = read_hex4(&mut chars)?;
                let code = if (0xD800..0xDC00).contains(&high) {
                    if chars.next() != Some('\\') || chars.next() != Some('u') {
                        return Err(format!("unpaired surrogate \\u{high:04x}"));
                    }
                    let low = read_hex4(&mut chars)?;
                    if !(0xDC00..0xE000).contains(&low) {
                        return Err(format!("invalid low surrogate \\u{low:04x}"));
                    }
                    0x10000 + ((high - 0xD800) << 10) + (low - 0xDC00)
                } else {
                    high
                };
                let ch = char::from_u32(code)
                    .ok_or_else(|| format!("invalid code point \\u{code:04x}"))?;
                out.push(ch);
            }
            other => return Err(format!("invalid escape '\\{other}'")),
        }
    }
    Ok(out)
}

fn read_hex4(chars: &mut std::str::Chars<'_>) -> Result<u32, String> {
    let mut code = 0u32;
    for _ in 0..4 {
        let digit = chars
            .next()
            .and_then(|ch| ch.to_digit(16))
            .ok_or_else(|| "invalid \\u escape".to_string())?;
        code = code * 16 + digit;
    }
    Ok(code)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[rstest::rstest]
    #[case("plain", r#""plain""#)]
    #[case("say \"hi\"", r#""say \"hi\"""#)]
    #[case("back\\slash", r#""back\\slash""#)]
    #[case("line\nbreak\ttab\r", r#""line\nbreak\ttab\r""#)]
    #[case("\u{1}", r#""\u0001""#)]
    #[case("\u{8}\u{c}", r#""\b\f""#)]
    #[case("žluťoučký kůň", "\"žluťoučký kůň\"")]
    fn test_quote(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(quote(input), expected);
    }

    #[rstest::rstest]
    #[case(r#"say \"hi\""#, "say \"hi\"")]
    #[case(r"a\\b\/c", "a\\b/c")]
    #[case(r"\n\r\t\b\f", "\n\r\t\u{8}\u{c}")]
    #[case(r"é", "é")]
    #[case(r"😀", "😀")]
    fn test_unquote(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(unquote(input).unwrap(), expected);
    }

    #[rstest::rstest]
    #[case(r"\x")]
    #[case(r"\u12")]
    #[case(r"\ud83d")]
    #[case(r"\ud83dA")]
    fn test_unquote_rejects_malformed(#[case] input: &str) {
        assert!(unquote(input).is_err());
    }

    #[rstest::rstest]
    fn test_quote_then_unquote() {
        let original = "mixed \"quotes\" \\ and \u{7} bell";
        let quoted = quote(original);
        assert_eq!(unquote(&quoted[1..quoted.len() - 1]).unwrap(), original);
    }
}
