use assertables::assert_contains;
use svgtrim::{trim_str, TrimConfig};

fn trimmed(input: &str) -> String {
    let cfg = TrimConfig {
        padding: 0.,
        ..Default::default()
    };
    trim_str(input, &cfg).unwrap().0.unwrap()
}

#[test]
fn test_nested_translate() {
    let input = r#"<svg>
  <g transform="translate(3,0)">
    <rect transform="translate(5,5)" width="10" height="10"/>
  </g>
</svg>"#;
    assert_contains!(trimmed(input), r#"viewBox="8 5 10 10""#);
}

#[test]
fn test_translate_single_arg() {
    let input = r#"<svg><g transform="translate(-20)"><circle r="5"/></g></svg>"#;
    assert_contains!(trimmed(input), r#"viewBox="-25 -5 10 10""#);
}

#[test]
fn test_translate_whitespace_separated() {
    let input = r#"<svg><rect transform=" translate( 1.5  2.5 ) " width="1" height="1"/></svg>"#;
    assert_contains!(trimmed(input), r#"viewBox="1.5 2.5 1 1""#);
}

#[test]
fn test_unsupported_transforms_ignored() {
    let input = r#"<svg>
  <rect transform="rotate(45)" width="10" height="10"/>
  <rect transform="scale(3)" width="10" height="10"/>
  <rect transform="translate(5,5) scale(2)" width="10" height="10"/>
</svg>"#;
    assert_contains!(trimmed(input), r#"viewBox="0 0 10 10""#);
}

#[test]
fn test_unsupported_transform_keeps_parent_offset() {
    let input = r#"<svg>
  <g transform="translate(100,50)">
    <g transform="matrix(2 0 0 2 0 0)">
      <rect transform="translate(1,1)" width="10" height="10"/>
    </g>
  </g>
</svg>"#;
    assert_contains!(trimmed(input), r#"viewBox="101 51 10 10""#);
}

#[test]
fn test_transform_preserved_in_output() {
    let input = r#"<svg><g transform="translate(3,0)"><rect width="1" height="1"/></g></svg>"#;
    assert_contains!(trimmed(input), r#"<g transform="translate(3,0)">"#);
}
