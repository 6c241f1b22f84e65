/// Escapes a value for use inside a quoted disposition parameter.
///
/// Backslashes are doubled before quotes are escaped,
/// so an existing `\"` becomes `\\\"` rather than being left as is.
pub fn escape_quotes(value: &str) -> String {
    value.replace('\\', "\\\\").replace('"', "\\\"")
}
