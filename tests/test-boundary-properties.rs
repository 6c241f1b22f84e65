use ::multipart_composer::ComposeError;
use ::multipart_composer::Composer;
use ::proptest::prelude::*;

const VALID_BOUNDARY: &str = "[A-Za-z0-9'()+_,./:=? -]{0,69}[A-Za-z0-9'()+_,./:=?-]";

proptest! {
    #[test]
    fn it_should_accept_any_valid_boundary(boundary in VALID_BOUNDARY) {
        let mut composer = Composer::new();

        prop_assert!(composer.set_boundary(&boundary).is_ok());
        prop_assert_eq!(composer.boundary(), boundary.as_str());
    }

    #[test]
    fn it_should_reject_overlong_boundary_and_keep_previous(boundary in "[a-z0-9]{71,120}") {
        let mut composer = Composer::new();
        composer.set_boundary("previous").unwrap();

        let result = composer.set_boundary(&boundary);

        let is_invalid_boundary = matches!(result, Err(ComposeError::InvalidBoundary { .. }));
        prop_assert!(is_invalid_boundary);
        prop_assert_eq!(composer.boundary(), "previous");
    }

    #[test]
    fn it_should_reject_illegal_characters_and_keep_previous(
        prefix in "[a-z0-9]{0,30}",
        illegal in "[;@<>\\[\\]\"\\\\\t*#!%&]",
        suffix in "[a-z0-9]{0,30}",
    ) {
        let boundary = format!("{prefix}{illegal}{suffix}");
        let mut composer = Composer::new();
        composer.set_boundary("previous").unwrap();

        let result = composer.set_boundary(&boundary);

        let is_invalid_boundary = matches!(result, Err(ComposeError::InvalidBoundary { .. }));
        prop_assert!(is_invalid_boundary);
        prop_assert_eq!(composer.boundary(), "previous");
    }

    #[test]
    fn it_should_always_refuse_boundary_changes_once_populated(boundary in VALID_BOUNDARY) {
        let mut composer = Composer::new();
        composer.add_field("foo", "bar");

        let result = composer.set_boundary(&boundary);

        let is_invalid_state = matches!(result, Err(ComposeError::InvalidState { .. }));
        prop_assert!(is_invalid_state);
    }
}

#[test]
fn it_should_reject_trailing_space() {
    let mut composer = Composer::new();

    let result = composer.set_boundary("foo ");

    assert!(matches!(result, Err(ComposeError::InvalidBoundary { .. })));
}
