use assertables::{assert_contains, assert_not_contains};
use svgtrim::{trim_str, trim_str_default, TrimConfig, TrimOutcome};

fn no_padding() -> TrimConfig {
    TrimConfig {
        padding: 0.,
        ..Default::default()
    }
}

#[test]
fn test_trim_rect() {
    let input = r#"<svg xmlns="http://www.w3.org/2000/svg" width="500" height="500" viewBox="0 0 500 500">
  <rect x="10" y="10" width="20" height="30"/>
</svg>"#;
    let output = trim_str_default(input).unwrap().unwrap();
    assert_contains!(output, r#"width="40" height="50" viewBox="0 0 40 50""#);
    assert_contains!(output, r#"<rect x="10" y="10" width="20" height="30"/>"#);
}

#[test]
fn test_trim_full_output() {
    let input = r#"<svg width="100" height="100"><circle cx="0" cy="0" r="5"/></svg>"#;
    let expected = r#"<?xml version="1.0" encoding="UTF-8"?>
<svg xmlns="http://www.w3.org/2000/svg" width="30" height="30" viewBox="-15 -15 30 30"><circle cx="0" cy="0" r="5"/></svg>
"#;
    assert_eq!(trim_str_default(input).unwrap().unwrap(), expected);
}

#[test]
fn test_trim_replaces_units() {
    let input = r#"<svg width="210mm" height="297mm"><rect x="5" y="5" width="10" height="10"/></svg>"#;
    let output = trim_str_default(input).unwrap().unwrap();
    assert_contains!(output, r#"width="30" height="30""#);
    assert_not_contains!(output, "mm");
}

#[test]
fn test_trim_mixed_shapes() {
    let input = r#"<svg width="1000" height="1000">
  <rect x="10" y="10" width="20" height="30"/>
  <circle cx="100" cy="100" r="5"/>
  <ellipse cx="50" cy="150" rx="10" ry="20"/>
  <line x1="-5" y1="0" x2="0" y2="-5"/>
  <polygon points="200,0 210,10 200,20"/>
  <polyline points="0 0 20 170"/>
  <path d="M 150 150 l 10 10"/>
</svg>"#;
    let (output, outcome) = trim_str(input, &no_padding()).unwrap();
    assert_contains!(output.unwrap(), r#"viewBox="-5 -5 215 175""#);
    let TrimOutcome::Trimmed(report) = outcome else {
        panic!("expected content");
    };
    assert_eq!(report.shape_count, 7);
}

#[test]
fn test_trim_fractional_values() {
    let input = r#"<svg><rect x="0.25" y="1.5" width="10.125" height="3.3333"/></svg>"#;
    let (output, _) = trim_str(input, &no_padding()).unwrap();
    assert_contains!(
        output.unwrap(),
        r#"viewBox="0.25 1.5 10.125 3.333" width="10.125" height="3.333""#
    );
}

#[test]
fn test_trim_custom_padding() {
    let input = r#"<svg><rect x="0" y="0" width="100" height="100"/></svg>"#;
    let cfg = TrimConfig {
        padding: 2.5,
        ..Default::default()
    };
    let (output, _) = trim_str(input, &cfg).unwrap();
    assert_contains!(output.unwrap(), r#"viewBox="-2.5 -2.5 105 105""#);
}

#[test]
fn test_trim_report() {
    let input = r#"<svg width="500px" height="400px"><rect x="0" y="0" width="100" height="100"/></svg>"#;
    let (_, outcome) = trim_str(input, &TrimConfig::default()).unwrap();
    let TrimOutcome::Trimmed(report) = outcome else {
        panic!("expected content");
    };
    let report = report.to_string();
    assert_contains!(report, "Original viewBox: 0 0 500 400");
    assert_contains!(report, "Trimmed viewBox: -10 -10 120 120");
    assert_contains!(report, "Reduced from 500x400 to 120x120");
}

#[test]
fn test_trim_image() {
    let input = r#"<svg xmlns:xlink="http://www.w3.org/1999/xlink"><image x="20" y="30" width="64" height="32" xlink:href="icon.png"/></svg>"#;
    let (output, _) = trim_str(input, &no_padding()).unwrap();
    assert_contains!(output.unwrap(), r#"viewBox="20 30 64 32""#);
}

#[test]
fn test_trim_ignores_text() {
    // text has no geometry of its own and does not affect the bounds
    let input = r#"<svg><text x="500" y="500">far away</text><rect width="10" height="10"/></svg>"#;
    let (output, _) = trim_str(input, &no_padding()).unwrap();
    let output = output.unwrap();
    assert_contains!(output, r#"viewBox="0 0 10 10""#);
    assert_contains!(output, r#"<text x="500" y="500">far away</text>"#);
}

#[test]
fn test_trim_negative_size_ignored() {
    let input = r#"<svg><rect x="10" y="0" width="-20" height="5"/></svg>"#;
    let (output, outcome) = trim_str(input, &TrimConfig::default()).unwrap();
    assert_eq!(outcome, TrimOutcome::NoContent);
    assert!(output.is_none());

    let input = r#"<svg><rect x="10" y="0" width="-20" height="5"/><circle r="-3"/><rect width="4" height="2"/></svg>"#;
    let (output, _) = trim_str(input, &no_padding()).unwrap();
    assert_contains!(output.unwrap(), r#"viewBox="0 0 4 2" width="4" height="2""#);
}
