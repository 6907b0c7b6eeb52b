use crate::schema::Value;

/// Best-effort scalar inference for one raw field.
///
/// Order: empty → `Text("")`, optional `-` plus ASCII digits → `Integer`,
/// anything `f64` accepts → `Float`, otherwise the trimmed text. A digit run
/// too long for `i64` stays text rather than being rounded.
pub fn convert_scalar(raw: &str) -> Value {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Value::Text(String::new());
    }

    if is_integer_literal(trimmed) {
        return match trimmed.parse::<i64>() {
            Ok(i) => Value::Integer(i),
            Err(_) => Value::Text(trimmed.to_string()),
        };
    }

    if let Ok(f) = trimmed.parse::<f64>() {
        return Value::Float(f);
    }

    Value::Text(trimmed.to_string())
}

fn is_integer_literal(s: &str) -> bool {
    let digits = s.strip_prefix('-').unwrap_or(s);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

/// Convert a whole row, left to right.
pub fn convert_row(values: &[String]) -> Vec<Value> {
    values.iter().map(String::as_str).map(convert_scalar).collect()
}
