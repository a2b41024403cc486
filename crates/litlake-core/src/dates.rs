use chrono::NaiveDate;

/// Source date layouts, tried in order. Day-first layouts come before
/// ISO, so ambiguous `a/b/Y` input reads as day/month/year.
const DATE_FORMATS: [&str; 5] = ["%d/%m/%Y", "%d-%m-%Y", "%Y-%m-%d", "%d %B %Y", "%d %b %Y"];

/// Parses a source date, trying each supported layout against the
/// trimmed input. The canonical ISO rendering (`%Y-%m-%d`) of any
/// parsed date re-parses through this table unchanged.
pub fn parse_date_dayfirst(raw: &str) -> Option<NaiveDate> {
    let trimmed = raw.trim();
    DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(trimmed, format).ok())
}
