use ::multipart_composer::ComposeError;
use ::multipart_composer::Composer;
use ::multipart_composer::ReaderSource;
use ::pretty_assertions::assert_eq;
use ::std::io::Read;
use ::std::path::PathBuf;

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

fn read_len(mut body: impl Read) -> u64 {
    let mut output = Vec::new();
    body.read_to_end(&mut output).unwrap();
    output.len() as u64
}

#[test]
fn it_should_size_empty_message_with_random_boundary() {
    let mut composer = Composer::new();

    let (body, size) = composer.detach_with_size().unwrap();

    // 60 hex characters, framed as `--{boundary}--\r\n`.
    assert_eq!(size, 66);
    assert_eq!(read_len(body), size);
}

#[test]
fn it_should_match_the_length_of_everything_read() {
    let mut composer = Composer::new();
    composer.add_field("comment", "a comment");
    composer.add_file("file", fixture("test.txt")).unwrap();
    composer.add_file("binary", fixture("test.bin")).unwrap();
    composer.add_field_reader("sized", ReaderSource::sized(&b"12345"[..], 5));
    composer.add_file_reader("bytes", "data.json", &b"{\"a\":1}"[..]);

    let (mut body, size) = composer.detach_with_size().unwrap();
    let mut output = Vec::new();
    body.read_to_end(&mut output).unwrap();
    body.close().unwrap();

    assert_eq!(output.len() as u64, size);
}

#[test]
fn it_should_report_the_same_size_before_detaching() {
    let mut composer = Composer::new();
    composer.add_field("foo", "bar");
    let expected = composer.total_size().unwrap();

    let (_body, size) = composer.detach_with_size().unwrap();

    assert_eq!(size, expected);
}

#[test]
fn it_should_fail_for_unsized_source_and_stay_detachable() {
    let mut composer = Composer::new();
    composer.set_boundary("B").unwrap();
    composer.add_field("before", "1");
    composer.add_field_reader("pipe", ReaderSource::new(&[42u8][..]));

    let result = composer.detach_with_size();
    assert!(matches!(
        result,
        Err(ComposeError::SizeUnavailable { position: 2 })
    ));

    let mut body = composer.detach();
    let mut output = String::new();
    body.read_to_string(&mut output).unwrap();

    assert_eq!(
        output,
        "--B\r\nContent-Disposition: form-data; name=\"before\"\r\n\r\n1\
         \r\n--B\r\nContent-Disposition: form-data; name=\"pipe\"\r\n\r\n*\
         \r\n--B--\r\n"
    );
}
