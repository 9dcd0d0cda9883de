use crate::constants::{EXP_LOWER, EXP_UPPER};

pub fn write_int_into(out: &mut Vec<u8>, value: i64) {
    let mut buffer = itoa::Buffer::new();
    out.extend_from_slice(buffer.format(value).as_bytes());
}

/// Writes the shortest round-trippable form of `value`.
///
/// Magnitudes `>= 1e6`, or nonzero and `<= 1e-6`, use exponential notation
/// (`1.6e-8`, `2.5e6`); everything else is fixed notation and always keeps a
/// fractional part (`3.0`) so the token reads back as a float. Non-finite
/// values have no JSON form and are written as `null`.
pub fn write_float_into(out: &mut Vec<u8>, value: f64) {
    if !value.is_finite() {
        out.extend_from_slice(b"null");
        return;
    }
    if value == 0.0 {
        out.extend_from_slice(b"0.0");
        return;
    }

    let mut buffer = ryu::Buffer::new();
    let raw = buffer.format_finite(value);
    let decimal = Decimal::parse(raw);

    let abs = value.abs();
    if abs >= EXP_UPPER || abs <= EXP_LOWER {
        decimal.write_exponential(out);
    } else {
        decimal.write_fixed(out);
    }
}

pub fn format_float(value: f64) -> String {
    let mut out = Vec::new();
    write_float_into(&mut out, value);
    String::from_utf8(out).unwrap_or_default()
}

/// Significant digits with the decimal point after `point` digits, so that
/// `digits = "16", point = -7` reads `0.000000016`.
struct Decimal {
    negative: bool,
    digits: Vec<u8>,
    point: i32,
}

impl Decimal {
    fn parse(raw: &str) -> Self {
        let bytes = raw.as_bytes();
        let mut i = 0;
        let mut negative = false;
        if bytes.first() == Some(&b'-') {
            negative = true;
            i += 1;
        }

        let mut digits = Vec::with_capacity(bytes.len());
        let mut dot_pos = None;
        while i < bytes.len() {
            match bytes[i] {
                b'0'..=b'9' => digits.push(bytes[i]),
                b'.' => dot_pos = Some(digits.len()),
                b'e' | b'E' => {
                    i += 1;
                    break;
                }
                _ => {}
            }
            i += 1;
        }

        let mut exp_sign = 1i32;
        if i < bytes.len() {
            if bytes[i] == b'-' {
                exp_sign = -1;
                i += 1;
            } else if bytes[i] == b'+' {
                i += 1;
            }
        }
        let mut exp: i32 = 0;
        while i < bytes.len() {
            if bytes[i].is_ascii_digit() {
                exp = exp
                    .saturating_mul(10)
                    .saturating_add((bytes[i] - b'0') as i32);
            }
            i += 1;
        }

        let mut point = dot_pos.unwrap_or(digits.len()) as i32 + exp * exp_sign;

        let leading = digits.iter().take_while(|&&d| d == b'0').count();
        digits.drain(..leading);
        point -= leading as i32;
        while digits.last() == Some(&b'0') {
            digits.pop();
        }
        if digits.is_empty() {
            digits.push(b'0');
            point = 1;
        }

        Self {
            negative,
            digits,
            point,
        }
    }

    fn write_exponential(&self, out: &mut Vec<u8>) {
        if self.negative {
            out.push(b'-');
        }
        out.push(self.digits[0]);
        if self.digits.len() > 1 {
            out.push(b'.');
            out.extend_from_slice(&self.digits[1..]);
        }
        out.push(b'e');
        let mut buffer = itoa::Buffer::new();
        out.extend_from_slice(buffer.format(self.point - 1).as_bytes());
    }

    fn write_fixed(&self, out: &mut Vec<u8>) {
        if self.negative {
            out.push(b'-');
        }
        let len = self.digits.len() as i32;
        if self.point <= 0 {
            out.extend_from_slice(b"0.");
            out.extend(std::iter::repeat_n(b'0', (-self.point) as usize));
            out.extend_from_slice(&self.digits);
        } else if self.point >= len {
            out.extend_from_slice(&self.digits);
            out.extend(std::iter::repeat_n(b'0', (self.point - len) as usize));
            out.extend_from_slice(b".0");
        } else {
            let split = self.point as usize;
            out.extend_from_slice(&self.digits[..split]);
            out.push(b'.');
            out.extend_from_slice(&self.digits[split..]);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[rstest::rstest]
    #[case(1.5, "1.5")]
    #[case(-2.25, "-2.25")]
    #[case(3.0, "3.0")]
    #[case(100.0, "100.0")]
    #[case(0.0, "0.0")]
    #[case(0.001, "0.001")]
    #[case(123456.5, "123456.5")]
    #[case(999999.0, "999999.0")]
    #[case(1e6, "1e6")]
    #[case(2.5e6, "2.5e6")]
    #[case(1.6e-8, "1.6e-8")]
    #[case(1e-6, "1e-6")]
    #[case(1.5e-6, "0.0000015")]
    #[case(-3.2e20, "-3.2e20")]
    #[case(0.1, "0.1")]
    fn test_format_float(#[case] value: f64, #[case] expected: &str) {
        assert_eq!(format_float(value), expected);
    }

    #[rstest::rstest]
    fn test_format_float_round_trips() {
        for value in [0.1, 1.0 / 3.0, 6.02214076e23, 1.6e-8, 123456.789, -1e-300] {
            let text = format_float(value);
            assert_eq!(text.parse::<f64>().unwrap(), value, "{text}");
        }
    }

    #[rstest::rstest]
    fn test_non_finite_is_null() {
        assert_eq!(format_float(f64::NAN), "null");
        assert_eq!(format_float(f64::INFINITY), "null");
    }

    #[rstest::rstest]
    fn test_write_int() {
        let mut out = Vec::new();
        write_int_into(&mut out, i64::MIN);
        assert_eq!(out, i64::MIN.to_string().into_bytes());
    }
}
