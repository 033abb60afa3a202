use mailref_extract::*;

#[test]
fn test_segments() {
    let text = "See [www.a.com 1] and [[www.b.com](https://www.b.com) 2].";
    let segments = mail_ref_segments(text);

    assert_eq!(segments.len(), 5);
    assert_eq!(segments[0], Segment::Text("See "));
    assert!(matches!(&segments[1], Segment::Ref(r) if r.prefix_no == 1));
    assert_eq!(segments[2], Segment::Text(" and "));
    assert!(matches!(&segments[3], Segment::Ref(r) if r.form == MarkerForm::Linked));
    assert_eq!(segments[4], Segment::Text("."));
}

#[test]
fn test_segments_cover_input() {
    let text = "[www.a.com 1][[www.a.com 2] tail";
    let rebuilt: String = mail_ref_segments(text)
        .iter()
        .map(|s| match s {
            Segment::Text(t) => (*t).to_string(),
            Segment::Ref(r) => r.raw.clone(),
        })
        .collect();

    assert_eq!(rebuilt, text);
}

#[test]
fn test_segments_without_markers() {
    assert_eq!(mail_ref_segments("plain"), vec![Segment::Text("plain")]);
    assert!(mail_ref_segments("").is_empty());
}

#[test]
fn test_replace_mail_refs() {
    let text = "See [www.a.com 1] and [[www.b.com](https://www.b.com) 2].";
    let html = replace_mail_refs(text, |r| {
        format!("<a href=\"{}\">{} #{}</a>", r.url(), r.domain, r.prefix_no)
    });

    assert_eq!(
        html,
        "See <a href=\"https://www.a.com\">www.a.com #1</a> and \
         <a href=\"https://www.b.com\">www.b.com #2</a>."
    );
}

#[test]
fn test_replace_normalizes_form() {
    let text = "[[www.a.com](http://www.a.com) 4] x";
    let plain = replace_mail_refs(text, |r| r.with_form(MarkerForm::Plain).raw);

    assert_eq!(plain, "[www.a.com 4] x");
}

#[test]
fn test_replace_without_markers_is_identity() {
    let text = "[[www.a.com](https://www.b.com) 1] untouched";
    assert_eq!(replace_mail_refs(text, |_| String::new()), text);
}
