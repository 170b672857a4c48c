// Pull one numeric field out of a delimited line. Lines that do not yield a
// key are skipped by the caller, never treated as errors.
pub(crate) fn extract_key(line: &str, field_separator: char, field_index: usize) -> Option<u32> {
    let mut field = line.split(field_separator).nth(field_index)?.trim();
    field = field.strip_prefix('"').unwrap_or(field);
    field = field.strip_suffix('"').unwrap_or(field);
    if field.is_empty() {
        return None;
    }
    field.parse::<u32>().ok()
}
