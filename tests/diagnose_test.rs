use mailref_extract::*;

#[test]
fn test_valid_text_has_no_rejections() {
    let text = "[www.a.com 1] and [[www.b.com](https://www.b.com) 2] and [plain brackets]";
    assert!(diagnose_mail_refs(text).is_empty());
}

#[test]
fn test_domain_mismatch_reported_once() {
    let rejections = diagnose_mail_refs("[[www.a.com](https://www.b.com) 1]");

    assert_eq!(
        rejections,
        vec![Rejection {
            offset: 0,
            error: ParseError::DomainMismatch {
                display: "www.a.com".into(),
                target: "www.b.com".into(),
            },
        }]
    );
}

#[test]
fn test_missing_number() {
    let rejections = diagnose_mail_refs("[www.a.com x]");

    assert_eq!(rejections.len(), 1);
    assert_eq!(rejections[0].error, ParseError::MissingNumber { offset: 11 });
}

#[test]
fn test_missing_whitespace_after_valid_marker() {
    let rejections = diagnose_mail_refs("[www.a.com 1] [www.b.com]");

    assert_eq!(rejections.len(), 1);
    assert_eq!(rejections[0].offset, 14);
    assert_eq!(
        rejections[0].error,
        ParseError::MissingWhitespace { offset: 24 }
    );
}

#[test]
fn test_unterminated_marker() {
    let rejections = diagnose_mail_refs("[www.a.com 1");

    assert_eq!(
        rejections[0].error,
        ParseError::Expected {
            expected: ']',
            offset: 12
        }
    );
}

#[test]
fn test_invalid_scheme() {
    let rejections = diagnose_mail_refs("[[www.a.com](ftp//www.a.com) 1]");

    assert_eq!(rejections.len(), 1);
    assert_eq!(rejections[0].error, ParseError::InvalidScheme { offset: 13 });
}

#[test]
fn test_failed_link_with_valid_inner_marker() {
    let text = "[[www.a.com 5]";
    let rejections = diagnose_mail_refs(text);

    assert_eq!(rejections.len(), 1);
    assert_eq!(rejections[0].offset, 0);
    assert_eq!(extract_mail_refs(Some(text)).len(), 1);
}
