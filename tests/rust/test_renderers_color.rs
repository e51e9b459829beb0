use super::*;

#[test]
fn test_rgba_fields() {
    let c = Color::rgba(1, 2, 3, 0.5);
    assert_eq!((c.red, c.green, c.blue, c.alpha), (1, 2, 3, 0.5));
}

#[test]
fn test_display_marker_blue() {
    assert_eq!(Color::MARKER_BLUE.to_string(), "rgba(0,50,255,0.8)");
}

#[test]
fn test_display_black_is_opaque() {
    assert_eq!(Color::BLACK.to_string(), "rgba(0,0,0,1)");
}

#[test]
fn test_box_blue_is_lighter_than_marker() {
    let b = Color::BOX_BLUE;
    let m = Color::MARKER_BLUE;
    assert_ne!(b, m);
    assert!(b.alpha < m.alpha);
    assert!(b.red > m.red && b.green > m.green);
}
