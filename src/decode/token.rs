use crate::value::Value;

/// Classifies an unquoted token. Tried in order: `null`, integer, float,
/// boolean; the first form that parses wins.
pub(crate) fn classify(token: &str) -> Option<Value> {
    if token == "null" {
        return Some(Value::Null);
    }
    if is_numeric_like(token) {
        if let Ok(int) = token.parse::<i64>() {
            return Some(Value::Int(int));
        }
        if let Ok(float) = token.parse::<f64>() {
            if float.is_finite() {
                return Some(Value::Float(float));
            }
        }
        return None;
    }
    match token {
        "true" => Some(Value::Bool(true)),
        "false" => Some(Value::Bool(false)),
        _ => None,
    }
}

/// Decimal digits with an optional sign, fraction and exponent. Rejects
/// `inf`/`nan` spellings that `f64::from_str` would otherwise accept.
fn is_numeric_like(token: &str) -> bool {
    let bytes = token.as_bytes();
    let mut i = 0;
    if matches!(bytes.first(), Some(b'-' | b'+')) {
        i += 1;
    }
    if i >= bytes.len() || !bytes[i].is_ascii_digit() {
        return false;
    }
    bytes[i..]
        .iter()
        .all(|&byte| byte.is_ascii_digit() || matches!(byte, b'.' | b'e' | b'E' | b'+' | b'-'))
}
