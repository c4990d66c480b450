use svgtrim::{trim_str_default, Error};

#[test]
fn test_error_unclosed_tag() {
    let input = r##"<svg>
    <rect>
    </svg>"##;
    assert!(trim_str_default(input).is_err());

    assert!(trim_str_default("<svg><g>").is_err());
}

#[test]
fn test_error_bad_element() {
    let input = r##"<svg>
    <rect
    </svg>"##;
    assert!(trim_str_default(input).is_err());
}

#[test]
fn test_error_bad_attr_syntax() {
    assert!(trim_str_default(r#"<svg><rect x=y/></svg>"#).is_err());
    assert!(trim_str_default(r#"<svg><rect x="y/></svg>"#).is_err());
}

#[test]
fn test_error_no_root() {
    assert!(matches!(trim_str_default(""), Err(Error::Document(_))));
    assert!(matches!(
        trim_str_default("<!-- just a comment -->"),
        Err(Error::Document(_))
    ));
}

#[test]
fn test_error_multiple_roots() {
    assert!(matches!(
        trim_str_default(r#"<svg/><svg/>"#),
        Err(Error::Document(_))
    ));
}

#[test]
fn test_error_malformed_number() {
    let result = trim_str_default(r#"<svg><rect x="0" y="0" width="abc" height="10"/></svg>"#);
    assert!(matches!(
        result,
        Err(Error::InvalidValue(attr, value)) if attr == "width" && value == "abc"
    ));
}

#[test]
fn test_error_unit_suffix_on_shape() {
    // units are only tolerated on the root width/height
    let result = trim_str_default(r#"<svg><circle cx="10" cy="10" r="5px"/></svg>"#);
    assert!(matches!(result, Err(Error::InvalidValue(..))));
}

#[test]
fn test_error_is_all_or_nothing() {
    let input = r#"<svg>
  <rect width="10" height="10"/>
  <g><ellipse rx="1" ry="?"/></g>
</svg>"#;
    assert!(trim_str_default(input).is_err());
}

#[test]
fn test_bad_path_data_not_fatal() {
    let input = r#"<svg><path d="M 0 0 L 10 10 L oops"/></svg>"#;
    let output = trim_str_default(input).unwrap().unwrap();
    assert!(output.contains(r#"viewBox="-10 -10 30 30""#));
}

#[test]
fn test_error_display() {
    let err = trim_str_default(r#"<svg><rect x="1e"/></svg>"#).unwrap_err();
    assert_eq!(err.to_string(), "Invalid value for 'x': '1e'");
}
