//!
//! Composes a small form with a field and a file,
//! and prints the request it would send.
//!
//! Run with `RUST_LOG=multipart_composer=debug` to see what the composer does.
//!
//! ```bash
//! cargo run --example=print-request -- [file-to-upload]
//! ```
//!

use ::anyhow::Context;
use ::anyhow::Result;
use ::multipart_composer::Composer;
use ::multipart_composer::http::header;
use ::std::env;
use ::std::io::Read;
use ::std::path::PathBuf;
use ::tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    ::tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(::std::io::stderr)
        .init();

    let file_path = env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/test.txt"));

    let mut composer = Composer::new();
    composer.add_field("comment", "a comment");
    if let Err(err) = composer.add_file("file", &file_path) {
        composer.close()?;
        return Err(err).with_context(|| format!("Failed to add '{}'", file_path.display()));
    }

    let headers = composer.request_headers(None)?;
    let (mut body, content_length) = composer
        .detach_with_size()
        .context("Failed to compute the body length")?;

    let mut body_bytes = Vec::new();
    let read_result = body.read_to_end(&mut body_bytes);
    body.close()?;
    read_result.context("Failed to read the composed body")?;

    if let Some(content_type) = headers.get(header::CONTENT_TYPE) {
        println!("Content-Type: {}", content_type.to_str()?);
    }
    println!("Content-Length: {content_length}");
    println!();
    print!("{}", String::from_utf8_lossy(&body_bytes).replace("\r\n", "\n"));

    Ok(())
}
