use ::mime::Mime;
use ::std::path::Path;

/// Infers the `Content-Type` of a file part from its name's extension.
///
/// Unknown or missing extensions fall back to `application/octet-stream`.
/// Textual types are declared as UTF-8.
pub fn guess_content_type(file_name: &str) -> String {
    let mime_type: Mime = Path::new(file_name)
        .extension()
        .and_then(|extension| extension.to_str())
        .and_then(|extension| ::mime_guess::from_ext(extension).first())
        .unwrap_or(::mime::APPLICATION_OCTET_STREAM);

    let is_text = mime_type.type_() == ::mime::TEXT;
    if is_text && mime_type.get_param(::mime::CHARSET).is_none() {
        format!("{mime_type}; charset=utf-8")
    } else {
        mime_type.to_string()
    }
}
