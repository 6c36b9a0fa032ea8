//! Single-line CSV splitting.

/// Split one CSV line into trimmed fields.
///
/// A double quote toggles quoted mode, in which commas are literal. Quotes
/// are never emitted and cannot be escaped. The final field is always
/// pushed, so `""` yields `[""]` and `"a,"` yields `["a", ""]`.
pub fn parse_line(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;

    for ch in line.chars() {
        match ch {
            '"' => in_quotes = !in_quotes,
            ',' if !in_quotes => {
                fields.push(current.trim().to_string());
                current.clear();
            }
            _ => current.push(ch),
        }
    }

    fields.push(current.trim().to_string());
    fields
}

/// Split a CSV document into its non-blank lines.
pub fn non_blank_lines(text: &str) -> Vec<&str> {
    text.split('\n').filter(|line| !line.trim().is_empty()).collect()
}
