//! Number display shared by the evaluator and the AST view.

/// Format a number the way a JavaScript host prints it.
///
/// Integral values have no fraction, `-0` prints as `0`, and magnitudes at or
/// above `1e21` or below `1e-6` switch to exponent form (`1e+21`, `1.5e-7`).
pub fn format_number(n: f64) -> String {
    if n.is_nan() {
        return "NaN".to_string();
    }
    if n == 0.0 {
        return "0".to_string();
    }
    if n.is_infinite() {
        return if n > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }

    // Shortest round-trip digits plus decimal exponent, e.g. `1.2345e-7`.
    let sci = format!("{:e}", n.abs());
    let (mantissa, exponent) = sci.split_once('e').unwrap_or((sci.as_str(), "0"));
    let digits: String = mantissa.chars().filter(|c| *c != '.').collect();
    let len = digits.len() as i32;
    // Position of the decimal point relative to the first digit.
    let point = exponent.parse::<i32>().unwrap_or(0) + 1;

    let body = if len <= point && point <= 21 {
        format!("{digits}{}", "0".repeat((point - len) as usize))
    } else if 0 < point && point <= 21 {
        let (int, frac) = digits.split_at(point as usize);
        format!("{int}.{frac}")
    } else if -6 < point && point <= 0 {
        format!("0.{}{digits}", "0".repeat(point.unsigned_abs() as usize))
    } else {
        let exp = point - 1;
        let exp_sign = if exp >= 0 { '+' } else { '-' };
        match digits.split_at(1) {
            (head, "") => format!("{head}e{exp_sign}{}", exp.abs()),
            (head, tail) => format!("{head}.{tail}e{exp_sign}{}", exp.abs()),
        }
    };

    if n < 0.0 {
        format!("-{body}")
    } else {
        body
    }
}
