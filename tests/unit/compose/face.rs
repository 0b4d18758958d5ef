use super::*;

#[test]
fn face_has_eyes_pupils_nose_and_mouth() {
    let out = face("happy", Canvas::default());
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines.len(), 7);

    assert_eq!(
        lines[0],
        r##"<ellipse cx="165" cy="185" rx="20" ry="25" fill="#FFF"/>"##
    );
    assert_eq!(
        lines[3],
        r##"<ellipse cx="235" cy="185" rx="5" ry="18" fill="#000"/>"##
    );
    assert_eq!(
        lines[4],
        r##"<polygon points="190,225 210,225 200,235" fill="#FFB6C1"/>"##
    );
    assert_eq!(
        lines[5],
        r##"<path d="M190 235 Q185 245 175 240" stroke="#000" stroke-width="2" fill="none"/>"##
    );
    assert_eq!(
        lines[6],
        r##"<path d="M210 235 Q215 245 225 240" stroke="#000" stroke-width="2" fill="none"/>"##
    );
}

#[test]
fn expression_does_not_change_output() {
    let canvas = Canvas::default();
    assert_eq!(face("happy", canvas), face("grumpy", canvas));
}

#[test]
fn face_follows_canvas_center() {
    let out = face("happy", Canvas::square(100).unwrap());
    assert!(out.starts_with(r##"<ellipse cx="15" cy="35" rx="20" ry="25" fill="#FFF"/>"##));
}
