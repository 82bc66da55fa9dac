use docprompt::domain::{BlobName, InvalidBlobName};

#[test]
fn given_blank_name_when_creating_then_returns_empty_error() {
    assert_eq!(BlobName::new("   "), Err(InvalidBlobName::Empty));
}

#[test]
fn given_name_with_surrounding_whitespace_when_creating_then_name_is_trimmed() {
    let name = BlobName::new("  notes.txt ").unwrap();
    assert_eq!(name.as_str(), "notes.txt");
}

#[test]
fn given_name_with_trailing_slash_when_creating_then_returns_malformed() {
    assert!(matches!(
        BlobName::new("folder/"),
        Err(InvalidBlobName::Malformed(_))
    ));
}

#[test]
fn given_txt_extension_in_any_case_when_checking_then_is_text_file() {
    assert!(BlobName::new("a.txt").unwrap().is_text_file());
    assert!(BlobName::new("B.TXT").unwrap().is_text_file());
    assert!(!BlobName::new("report.pdf").unwrap().is_text_file());
    assert!(!BlobName::new("txt").unwrap().is_text_file());
}

#[test]
fn given_dot_segments_when_creating_then_returns_malformed() {
    for raw in ["../secret.txt", "a/./b.txt", "a//b.txt", "."] {
        assert!(
            matches!(BlobName::new(raw), Err(InvalidBlobName::Malformed(_))),
            "{raw} should be rejected"
        );
    }
}

#[test]
fn given_control_character_when_creating_then_returns_malformed() {
    assert!(matches!(
        BlobName::new("bad\u{0007}name.txt"),
        Err(InvalidBlobName::Malformed(_))
    ));
}

#[test]
fn given_reserved_url_characters_when_creating_then_name_is_kept_verbatim() {
    let name = BlobName::new("notes[1] {draft}.txt").unwrap();
    assert_eq!(name.as_str(), "notes[1] {draft}.txt");
}
