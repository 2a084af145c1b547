/// Split one CSV line into trimmed fields.
///
/// Commas between an opening and closing `"` stay inside the field. Quote
/// characters are kept in the field content; callers strip them where the
/// sheet double-wraps values. An unbalanced quote simply leaves the rest of
/// the line in quoted mode.
pub fn tokenize(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;

    for ch in line.chars() {
        match ch {
            '"' => {
                in_quotes = !in_quotes;
                current.push(ch);
            }
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

/// Remove one leading and one trailing `"` (if present) and trim.
pub fn strip_quotes(field: &str) -> &str {
    let field = field.trim();
    let field = field.strip_prefix('"').unwrap_or(field);
    field.strip_suffix('"').unwrap_or(field).trim()
}
