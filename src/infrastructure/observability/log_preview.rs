const MAX_VISIBLE_CHARS: usize = 80;

const SECRET_MARKERS: [&str; 4] = ["key=", "api_key=", "token=", "Bearer "];

/// Shortens user-supplied text for log fields.
///
/// Truncates on a char boundary and masks anything that looks like a
/// credential, since request text can carry pasted URLs.
pub fn preview_for_log(text: &str) -> String {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return String::from("[EMPTY]");
    }

    let total = trimmed.chars().count();
    let preview = if total > MAX_VISIBLE_CHARS {
        let head: String = trimmed.chars().take(MAX_VISIBLE_CHARS).collect();
        format!("{head}... ({total} chars total)")
    } else {
        trimmed.to_string()
    };

    mask_secrets(&preview)
}

fn mask_secrets(text: &str) -> String {
    let mut result = text.to_string();
    for marker in SECRET_MARKERS {
        let mut from = 0;
        while let Some(found) = result[from..].find(marker) {
            let start = from + found + marker.len();
            let end = result[start..]
                .find(|c: char| c.is_whitespace() || matches!(c, '&' | '"' | '\''))
                .map_or(result.len(), |i| start + i);
            result.replace_range(start..end, "[REDACTED]");
            from = start + "[REDACTED]".len();
        }
    }
    result
}
