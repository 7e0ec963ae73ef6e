use crate::config::WEIGHT_UNIT_SUFFIX;

/// Read a numeric input field. Empty or unparsable text reads as no value.
///
/// Zero is kept as typed; the conversions treat it as "no value" themselves.
pub fn parse_field(input: &str) -> Option<f64> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Shortest decimal form of a weight: `20`, `12.5`, `3.33`.
pub fn format_weight(value: f64) -> String {
    format!("{}", value)
}

/// Text for an optional numeric field; `None` renders as an empty field.
pub fn format_field(value: Option<f64>) -> String {
    value.map(format_weight).unwrap_or_default()
}

/// Plate weight as shown in the machine table, e.g. `5kg`.
pub fn plate_weight_label(value: f64) -> String {
    format!("{}{}", format_weight(value), WEIGHT_UNIT_SUFFIX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_field() {
        assert_eq!(parse_field("12"), Some(12.0));
        assert_eq!(parse_field(" 2.5 "), Some(2.5));
        assert_eq!(parse_field(""), None);
        assert_eq!(parse_field("   "), None);
        assert_eq!(parse_field("0"), Some(0.0));
        assert_eq!(parse_field("abc"), None);
        assert_eq!(parse_field("NaN"), None);
    }

    #[test]
    fn test_format_weight() {
        assert_eq!(format_weight(20.0), "20");
        assert_eq!(format_weight(12.5), "12.5");
        assert_eq!(format_weight(3.33), "3.33");
        assert_eq!(format_field(None), "");
        assert_eq!(plate_weight_label(5.0), "5kg");
        assert_eq!(plate_weight_label(2.25), "2.25kg");
    }
}
