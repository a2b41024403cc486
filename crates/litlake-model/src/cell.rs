use chrono::NaiveDate;

/// A typed scalar inside a validated row.
///
/// Raw tables carry untyped values; once a row passes validation every value
/// is one of these variants, matching its column's declared type. `Ord` makes
/// duplicate detection deterministic regardless of input row order.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum Cell {
    Null,
    Str(String),
    Int(i64),
    Date(NaiveDate),
}

impl Cell {
    pub fn is_null(&self) -> bool {
        matches!(self, Cell::Null)
    }

    /// Text rendering for output tables; `None` for null.
    ///
    /// Dates render in the canonical ISO form, which the day-first parser
    /// accepts back unchanged.
    pub fn render(&self) -> Option<String> {
        match self {
            Cell::Null => None,
            Cell::Str(value) => Some(value.clone()),
            Cell::Int(value) => Some(value.to_string()),
            Cell::Date(value) => Some(value.format("%Y-%m-%d").to_string()),
        }
    }
}

impl From<&str> for Cell {
    fn from(value: &str) -> Self {
        Cell::Str(value.to_string())
    }
}

impl From<i64> for Cell {
    fn from(value: i64) -> Self {
        Cell::Int(value)
    }
}

impl From<NaiveDate> for Cell {
    fn from(value: NaiveDate) -> Self {
        Cell::Date(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_forms() {
        assert_eq!(Cell::Null.render(), None);
        assert_eq!(Cell::from("x").render().as_deref(), Some("x"));
        assert_eq!(Cell::from(42).render().as_deref(), Some("42"));
        let date = NaiveDate::from_ymd_opt(2020, 1, 1).unwrap();
        assert_eq!(Cell::from(date).render().as_deref(), Some("2020-01-01"));
    }
}
