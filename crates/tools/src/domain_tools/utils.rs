//! Formatting and argument helpers shared by the lookup tools

use serde_json::Value;

use crate::mcp::ToolError;

/// Capitalize the first letter of each word, lowercase the rest
///
/// Word boundaries are any non-alphabetic character, so "miami-dade" becomes
/// "Miami-Dade".
pub fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut at_word_start = true;
    for ch in s.chars() {
        if ch.is_alphabetic() {
            if at_word_start {
                out.extend(ch.to_uppercase());
            } else {
                out.extend(ch.to_lowercase());
            }
            at_word_start = false;
        } else {
            out.push(ch);
            at_word_start = true;
        }
    }
    out
}

/// Dollar amount with thousands separators, without the `$`
///
/// `format_usd(1300.0, 2)` → `"1,300.00"`, `format_usd(2829.0, 0)` → `"2,829"`.
pub fn format_usd(amount: f64, decimals: usize) -> String {
    let fixed = format!("{:.*}", decimals, amount.abs());
    let (whole, frac) = match fixed.split_once('.') {
        Some((whole, frac)) => (whole, Some(frac)),
        None => (fixed.as_str(), None),
    };

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, ch) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if amount < 0.0 { "-" } else { "" };
    match frac {
        Some(frac) => format!("{}{}.{}", sign, grouped, frac),
        None => format!("{}{}", sign, grouped),
    }
}

/// Required string argument; numbers are accepted and stringified
pub(crate) fn required_str(input: &Value, key: &str) -> Result<String, ToolError> {
    optional_str(input, key).ok_or_else(|| ToolError::invalid_params(format!("{} is required", key)))
}

pub(crate) fn optional_str(input: &Value, key: &str) -> Option<String> {
    match input.get(key)? {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// Required number; JSON numbers or numeric strings
pub(crate) fn required_f64(input: &Value, key: &str) -> Result<f64, ToolError> {
    let value = input
        .get(key)
        .ok_or_else(|| ToolError::invalid_params(format!("{} is required", key)))?;

    let parsed = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().trim_start_matches('$').replace(',', "").parse().ok(),
        _ => None,
    };

    parsed
        .filter(|n: &f64| n.is_finite())
        .ok_or_else(|| ToolError::invalid_params(format!("{} must be a number", key)))
}

/// Required integer; whole JSON numbers or integer strings
pub(crate) fn required_i64(input: &Value, key: &str) -> Result<i64, ToolError> {
    let value = input
        .get(key)
        .ok_or_else(|| ToolError::invalid_params(format!("{} is required", key)))?;

    let parsed = match value {
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().filter(|f| f.fract() == 0.0).map(|f| f as i64)),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    };

    parsed.ok_or_else(|| ToolError::invalid_params(format!("{} must be an integer", key)))
}

/// Optional flag; booleans or "true"/"false"/"yes"/"no"
pub(crate) fn optional_bool(input: &Value, key: &str, default: bool) -> Result<bool, ToolError> {
    match input.get(key) {
        None | Some(Value::Null) => Ok(default),
        Some(Value::Bool(b)) => Ok(*b),
        Some(Value::String(s)) => match s.trim().to_lowercase().as_str() {
            "true" | "yes" => Ok(true),
            "false" | "no" => Ok(false),
            _ => Err(ToolError::invalid_params(format!("{} must be a boolean", key))),
        },
        Some(_) => Err(ToolError::invalid_params(format!("{} must be a boolean", key))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_title_case() {
        assert_eq!(title_case("senior center"), "Senior Center");
        assert_eq!(title_case("MIAMI"), "Miami");
        assert_eq!(title_case("miami-dade"), "Miami-Dade");
        assert_eq!(title_case("advantage"), "Advantage");
    }

    #[test]
    fn test_format_usd() {
        assert_eq!(format_usd(1215.0, 0), "1,215");
        assert_eq!(format_usd(1300.0, 2), "1,300.00");
        assert_eq!(format_usd(999.5, 2), "999.50");
        assert_eq!(format_usd(1_234_567.891, 2), "1,234,567.89");
        assert_eq!(format_usd(0.0, 2), "0.00");
        assert_eq!(format_usd(-2500.0, 2), "-2,500.00");
    }

    #[test]
    fn test_required_f64_accepts_strings() {
        let input = json!({ "a": 1215, "b": "1,300.50", "c": "$2000", "d": "lots", "e": true });
        assert_eq!(required_f64(&input, "a").unwrap(), 1215.0);
        assert_eq!(required_f64(&input, "b").unwrap(), 1300.5);
        assert_eq!(required_f64(&input, "c").unwrap(), 2000.0);
        assert!(required_f64(&input, "d").is_err());
        assert!(required_f64(&input, "e").is_err());
        assert!(required_f64(&input, "missing").is_err());
    }

    #[test]
    fn test_required_i64() {
        let input = json!({ "a": 70, "b": 70.0, "c": " 64 ", "d": 70.5 });
        assert_eq!(required_i64(&input, "a").unwrap(), 70);
        assert_eq!(required_i64(&input, "b").unwrap(), 70);
        assert_eq!(required_i64(&input, "c").unwrap(), 64);
        assert!(required_i64(&input, "d").is_err());
    }

    #[test]
    fn test_optional_bool() {
        let input = json!({ "a": true, "b": "Yes", "c": "no", "d": "maybe", "e": null });
        assert!(optional_bool(&input, "a", false).unwrap());
        assert!(optional_bool(&input, "b", false).unwrap());
        assert!(!optional_bool(&input, "c", true).unwrap());
        assert!(optional_bool(&input, "d", false).is_err());
        assert!(!optional_bool(&input, "e", false).unwrap());
        assert!(optional_bool(&input, "missing", true).unwrap());
    }

    #[test]
    fn test_string_args() {
        let input = json!({ "zip_code": 33101, "city": "Miami", "flag": false });
        assert_eq!(required_str(&input, "zip_code").unwrap(), "33101");
        assert_eq!(required_str(&input, "city").unwrap(), "Miami");
        assert!(required_str(&input, "flag").is_err());
        assert_eq!(optional_str(&input, "missing"), None);
    }
}
