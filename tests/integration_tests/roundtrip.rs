use assertables::{assert_contains, assert_not_contains, assert_starts_with};
use svgtrim::trim_str_default;

#[test]
fn test_prolog_preserved() {
    let input = r#"<?xml version="1.0" encoding="iso-8859-1" standalone="no"?>
<!DOCTYPE svg PUBLIC "-//W3C//DTD SVG 1.1//EN" "http://www.w3.org/Graphics/SVG/1.1/DTD/svg11.dtd">
<!-- Generated by hand -->
<svg width="100" height="100"><rect width="10" height="10"/></svg>
<!-- trailing -->
"#;
    let output = trim_str_default(input).unwrap().unwrap();
    assert_starts_with!(output, "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<!DOCTYPE");
    assert_contains!(output, "svg11.dtd\">\n<!-- Generated by hand -->\n<svg ");
    assert_contains!(output, "</svg>\n<!-- trailing -->\n");
    assert_eq!(output.matches("<?xml").count(), 1);
    assert_not_contains!(output, "standalone");
    assert_not_contains!(output, "iso-8859-1");
}

#[test]
fn test_content_preserved() {
    let input = r#"<svg width="100" height="100">
  <!-- a comment -->
  <style><![CDATA[ rect > .x { fill: red; } ]]></style>
  <g id="main" class="a&amp;b">
    <rect width="10" height="10"/>
    <text>Fish &amp; Chips &lt;3</text>
  </g>
</svg>"#;
    let output = trim_str_default(input).unwrap().unwrap();
    assert_contains!(output, "\n  <!-- a comment -->\n  ");
    assert_contains!(output, "<style><![CDATA[ rect > .x { fill: red; } ]]></style>");
    assert_contains!(output, r#"<g id="main" class="a&amp;b">"#);
    assert_contains!(output, "<text>Fish &amp; Chips &lt;3</text>");
    assert_contains!(output, "\n    <rect width=\"10\" height=\"10\"/>\n");
}

#[test]
fn test_trim_idempotent() {
    let input = r#"<svg width="800" height="600" viewBox="0 0 800 600">
  <g transform="translate(12.5, 7)">
    <circle cx="33.3333" cy="66.6667" r="7.77"/>
    <path d="M 100 100 c 10 -20 30 -20 40 0 s 20 20 40 0"/>
  </g>
</svg>"#;
    let once = trim_str_default(input).unwrap().unwrap();
    let twice = trim_str_default(once.as_str()).unwrap().unwrap();
    assert_eq!(once, twice);
}

#[test]
fn test_deeply_nested() {
    let depth = 2000;
    let input = format!(
        "<svg>{}<rect width=\"1\" height=\"1\"/>{}</svg>",
        "<g>".repeat(depth),
        "</g>".repeat(depth)
    );
    let output = trim_str_default(input).unwrap().unwrap();
    assert_contains!(output, r#"viewBox="-10 -10 21 21""#);
}

#[test]
fn test_illustrator_entities() {
    let input = r#"<?xml version="1.0" encoding="utf-8"?>
<!-- Generator: Adobe Illustrator 16.0.0, SVG Export Plug-In . SVG Version: 6.00 Build 0)  -->
<!DOCTYPE svg PUBLIC "-//W3C//DTD SVG 1.1//EN" "http://www.w3.org/Graphics/SVG/1.1/DTD/svg11.dtd" [
	<!ENTITY ns_extend "http://ns.adobe.com/Extensibility/1.0/">
	<!ENTITY ns_svg "http://www.w3.org/2000/svg">
	<!ENTITY ns_xlink "http://www.w3.org/1999/xlink">
]>
<svg version="1.1" xmlns:x="&ns_extend;" xmlns="&ns_svg;" xmlns:xlink="&ns_xlink;" width="612px" height="792px" viewBox="0 0 612 792">
<rect x="100" y="200" width="50" height="25"/>
</svg>
"#;
    let output = trim_str_default(input).unwrap().unwrap();
    assert_contains!(output, "<!ENTITY ns_svg");
    assert_contains!(output, r#"xmlns="http://www.w3.org/2000/svg""#);
    assert_contains!(output, r#"xmlns:xlink="http://www.w3.org/1999/xlink""#);
    assert_contains!(output, r#"viewBox="90 190 70 45""#);
    assert_eq!(output.matches("xmlns=").count(), 1);
}
