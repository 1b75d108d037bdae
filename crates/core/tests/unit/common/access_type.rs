//! Access Type Tests.

use nbcache_core::AccessType;
use nbcache_core::common::ParseAccessTypeError;
use rstest::rstest;

#[rstest]
#[case("read", AccessType::Read)]
#[case("R", AccessType::Read)]
#[case("Read", AccessType::Read)]
#[case("write", AccessType::Write)]
#[case("w", AccessType::Write)]
#[case("WRITE", AccessType::Write)]
fn parses_names_case_insensitively(#[case] text: &str, #[case] expected: AccessType) {
    assert_eq!(text.parse::<AccessType>(), Ok(expected));
}

#[rstest]
#[case("")]
#[case("rw")]
#[case("load")]
fn rejects_unknown_names(#[case] text: &str) {
    let err = text.parse::<AccessType>().unwrap_err();
    assert_eq!(err, ParseAccessTypeError(text.to_owned()));
    assert!(err.to_string().contains("unknown access type"));
}

#[test]
fn display_matches_parse() {
    for kind in AccessType::ALL {
        assert_eq!(kind.to_string().parse::<AccessType>(), Ok(kind));
    }
}

#[test]
fn bucket_indices_follow_all() {
    for (i, kind) in AccessType::ALL.into_iter().enumerate() {
        assert_eq!(kind.index(), i);
    }
    assert!(AccessType::Write.is_write());
    assert!(!AccessType::Read.is_write());
}
