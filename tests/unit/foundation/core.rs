use super::*;

#[test]
fn canvas_rejects_zero_dimensions() {
    assert!(Canvas::new(0, 10).is_err());
    assert!(Canvas::new(10, 0).is_err());
    assert!(Canvas::square(0).is_err());
    assert_eq!(
        Canvas::new(3, 4).unwrap(),
        Canvas {
            width: 3,
            height: 4
        }
    );
}

#[test]
fn center_uses_integer_halving() {
    assert_eq!(Canvas::default().center(), Point::new(200.0, 200.0));
    assert_eq!(Canvas::new(101, 99).unwrap().center(), Point::new(50.0, 49.0));
}

#[test]
fn default_is_full_portrait_size() {
    let c = Canvas::default();
    assert_eq!((c.width, c.height), (DEFAULT_SIZE, DEFAULT_SIZE));
}
