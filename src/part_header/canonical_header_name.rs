/// Canonical MIME form of a header name, i.e. `content-type` becomes `Content-Type`.
///
/// Names containing anything other than letters, digits, and `-`
/// are returned unchanged.
pub fn canonical_header_name(name: &str) -> String {
    let is_token = name
        .bytes()
        .all(|byte| byte.is_ascii_alphanumeric() || byte == b'-');
    if !is_token {
        return name.to_string();
    }

    let mut canonical = String::with_capacity(name.len());
    let mut is_word_start = true;
    for c in name.chars() {
        if is_word_start {
            canonical.push(c.to_ascii_uppercase());
        } else {
            canonical.push(c.to_ascii_lowercase());
        }

        is_word_start = c == '-';
    }

    canonical
}
