use polars::prelude::AnyValue;

/// Renders a raw cell as the text it carried in the source table,
/// `None` for null. Integral floats drop the trailing `.0` so a column
/// inferred as Float64 round-trips as its original digits.
pub fn render_any(value: &AnyValue) -> Option<String> {
    match value {
        AnyValue::Null => None,
        AnyValue::String(text) => Some((*text).to_string()),
        AnyValue::StringOwned(text) => Some(text.to_string()),
        AnyValue::Float32(number) => Some(format_numeric(f64::from(*number))),
        AnyValue::Float64(number) => Some(format_numeric(*number)),
        other => Some(other.to_string()),
    }
}

pub fn any_is_null(value: &AnyValue) -> bool {
    matches!(value, AnyValue::Null)
}

pub fn format_numeric(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{}", value as i64)
    } else {
        value.to_string()
    }
}
