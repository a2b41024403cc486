/// Cleans a textual value from a lossily-encoded source: strips `\xHH`
/// escape artifacts, trims surrounding whitespace, and maps an empty
/// result to `None`.
pub fn clean_text(raw: &str) -> Option<String> {
    let stripped = strip_hex_escapes(raw);
    let trimmed = stripped.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Removes every literal `\xHH` sequence (backslash, `x`, two hex
/// digits); everything else passes through unchanged.
fn strip_hex_escapes(raw: &str) -> String {
    let chars: Vec<char> = raw.chars().collect();
    let mut out = String::with_capacity(raw.len());
    let mut index = 0;
    while index < chars.len() {
        if chars[index] == '\\'
            && index + 3 < chars.len()
            && chars[index + 1] == 'x'
            && chars[index + 2].is_ascii_hexdigit()
            && chars[index + 3].is_ascii_hexdigit()
        {
            index += 4;
        } else {
            out.push(chars[index]);
            index += 1;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_escaped_hex_bytes() {
        assert_eq!(
            clean_text("Journal of emergency nursing\\xc3\\x28"),
            Some("Journal of emergency nursing".to_string())
        );
        assert_eq!(clean_text("10\\x1f,"), Some("10,".to_string()));
    }

    #[test]
    fn trims_and_nulls_empty() {
        assert_eq!(
            clean_text("  Tetracycline Use  "),
            Some("Tetracycline Use".to_string())
        );
        assert_eq!(clean_text("   "), None);
        assert_eq!(clean_text(""), None);
        assert_eq!(clean_text("\\xc3\\x28"), None);
    }

    #[test]
    fn keeps_sequences_that_are_not_hex_escapes() {
        assert_eq!(clean_text("a\\xg1b"), Some("a\\xg1b".to_string()));
        assert_eq!(clean_text("tail\\x2"), Some("tail\\x2".to_string()));
        assert_eq!(clean_text("\\\\xab"), Some("\\".to_string()));
    }
}
