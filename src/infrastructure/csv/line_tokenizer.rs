// ============================================================
// CSV LINE TOKENIZER
// ============================================================
// Split one line into raw field values, honoring quoted segments

/// Tokenize a single CSV line into field values.
///
/// A `"` toggles the quoted state and is never emitted, so a doubled
/// `""` toggles twice and contributes nothing. Quote escaping is not
/// supported; downstream callers rely on this exact behavior.
/// Always yields at least one field, even for an empty line.
pub fn tokenize_line(line: &str) -> Vec<String> {
    let mut result = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;

    for ch in line.chars() {
        if ch == '"' {
            in_quotes = !in_quotes;
        } else if ch == ',' && !in_quotes {
            result.push(current);
            current = String::new();
        } else {
            current.push(ch);
        }
    }
    result.push(current);

    result.iter().map(|value| clean_field(value)).collect()
}

/// Strip one leading and one trailing quote, then surrounding whitespace
fn clean_field(value: &str) -> String {
    let value = value.strip_prefix('"').unwrap_or(value);
    let value = value.strip_suffix('"').unwrap_or(value);
    value.trim().to_string()
}
