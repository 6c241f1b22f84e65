/// Characters from RFC 2045 `tspecials` (plus space) that force quoting.
const QUOTED_BOUNDARY_CHARS: &[char] = &[
    '(', ')', '<', '>', '@', ',', ';', ':', '\\', '"', '/', '[', ']', '?', '=', ' ',
];

/// Renders the `Content-Type` value for a form-data message with this boundary.
pub fn format_form_data_content_type(boundary: &str) -> String {
    if boundary.contains(QUOTED_BOUNDARY_CHARS) {
        format!("multipart/form-data; boundary=\"{boundary}\"")
    } else {
        format!("multipart/form-data; boundary={boundary}")
    }
}
