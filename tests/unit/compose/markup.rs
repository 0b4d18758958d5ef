use super::*;

#[test]
fn element_keeps_attribute_order() {
    let e = Element::new("rect")
        .attr("width", 400)
        .attr("height", 300)
        .attr("fill", "#F0F8FF");
    assert_eq!(
        e.to_string(),
        r##"<rect width="400" height="300" fill="#F0F8FF"/>"##
    );
}

#[test]
fn attribute_values_are_escaped() {
    let e = Element::new("g").attr("data-x", r#"a<b & "c""#);
    assert_eq!(
        e.to_string(),
        r#"<g data-x="a&lt;b &amp; &quot;c&quot;"/>"#
    );
}

#[test]
fn points_print_whole_numbers_without_fraction() {
    let pts = [Point::new(140.0, 120.0), Point::new(-5.0, 0.0)];
    assert_eq!(points(&pts), "140,120 -5,0");
}

#[test]
fn join_lines_separates_with_newlines() {
    assert_eq!(join_lines(["a", "b", "c"]), "a\nb\nc");
    assert_eq!(join_lines(Vec::<String>::new()), "");
}
