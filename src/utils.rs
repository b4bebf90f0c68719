/// turns a raw csv header into a bare sql identifier.
/// anything other than ascii alphanumerics and `_` becomes `_`, and a leading digit gets a
/// `col_` prefix.
/// `position` is the 1-based column index, used to name blank headers.
pub fn sanitize_column_name(raw: &str, position: usize) -> String {
    let sanitized: String = raw
        .trim()
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '_' { c } else { '_' })
        .collect();

    match sanitized.chars().next() {
        None => format!("col_{}", position),
        Some(c) if c.is_ascii_digit() => format!("col_{}", sanitized),
        Some(_) => sanitized,
    }
}
