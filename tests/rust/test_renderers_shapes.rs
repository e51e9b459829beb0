use super::*;

fn v(x: f64, y: f64) -> Vector {
    Vector::new(x, y)
}

// ── Circle ────────────────────────────────────────────────────────────────────

#[test]
fn test_circle_scale_scales_center_and_radius() {
    let c = Circle::new(v(1.0, -2.0), 0.5, Color::MARKER_BLUE, Color::BLACK).scale(4.0);
    assert_eq!(c.center, v(4.0, -8.0));
    assert_eq!(c.radius, 2.0);
    assert_eq!(c.fill, Color::MARKER_BLUE);
    assert_eq!(c.stroke, Color::BLACK);
}

#[test]
fn test_circle_translate_keeps_radius() {
    let c = Circle::new(v(1.0, 1.0), 0.25, Color::BLACK, Color::BLACK).translate(v(2.0, 3.0));
    assert_eq!(c.center, v(3.0, 4.0));
    assert_eq!(c.radius, 0.25);
}

#[test]
fn test_circle_draw() {
    let d = Circle::new(v(1.5, 2.5), 0.5, Color::MARKER_BLUE, Color::MARKER_BLUE).draw();
    assert_eq!(
        d,
        Drawable::Circle {
            cx: 1.5,
            cy: 2.5,
            r: 0.5,
            fill: Color::MARKER_BLUE,
            stroke: Color::MARKER_BLUE,
        }
    );
}

#[test]
fn test_place_scales_before_translating() {
    let c = Circle::new(v(1.0, 0.0), 1.0, Color::BLACK, Color::BLACK);
    let d = c.place(10.0, v(5.0, 5.0));
    assert_eq!(
        d,
        Drawable::Circle {
            cx: 15.0,
            cy: 5.0,
            r: 10.0,
            fill: Color::BLACK,
            stroke: Color::BLACK,
        }
    );
}

// ── Rectangle ─────────────────────────────────────────────────────────────────

#[test]
fn test_rectangle_draw_uses_top_left_corner() {
    let r = Rectangle::new(v(0.0, 0.0), 2.0, 2.0, Color::BOX_BLUE, Color::BLACK);
    assert_eq!(
        r.draw(),
        Drawable::Rect {
            x: -1.0,
            y: -1.0,
            width: 2.0,
            height: 2.0,
            fill: Color::BOX_BLUE,
            stroke: Color::BLACK,
        }
    );
}

#[test]
fn test_rectangle_scale_and_translate() {
    let r = Rectangle::new(v(1.0, 0.0), 2.0, 4.0, Color::BOX_BLUE, Color::BLACK)
        .scale(0.5)
        .translate(v(1.0, 1.0));
    assert_eq!(r.center, v(1.5, 1.0));
    assert_eq!(r.width, 1.0);
    assert_eq!(r.height, 2.0);
}

// ── Line ──────────────────────────────────────────────────────────────────────

#[test]
fn test_line_scale_keeps_stroke_width() {
    let l = Line::new(Segment::new(v(1.0, 0.0), v(0.0, 1.0)), 2.5, Color::BLACK).scale(3.0);
    assert_eq!(l.segment, Segment::new(v(3.0, 0.0), v(0.0, 3.0)));
    assert_eq!(l.width, 2.5);
}

#[test]
fn test_line_translate_moves_both_ends() {
    let l = Line::new(Segment::new(v(0.0, 0.0), v(1.0, 1.0)), 1.0, Color::BLACK)
        .translate(v(-1.0, 2.0));
    assert_eq!(l.segment, Segment::new(v(-1.0, 2.0), v(0.0, 3.0)));
}

#[test]
fn test_line_draw() {
    let d = Line::new(Segment::new(v(1.0, 2.0), v(3.0, 4.0)), 2.5, Color::BLACK).draw();
    assert_eq!(
        d,
        Drawable::Line {
            x1: 1.0,
            y1: 2.0,
            x2: 3.0,
            y2: 4.0,
            stroke: Color::BLACK,
            stroke_width: 2.5,
        }
    );
}
