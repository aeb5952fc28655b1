use super::*;
use crate::draw::{BACKGROUND, CORAL, SKY};
use crate::input::tool::Tool;
use crate::util::Point;

fn create_test_state() -> PadState {
    PadState::with_defaults(SKY, BACKGROUND, 3.0, 20.0)
}

#[test]
fn down_establishes_anchor_without_segment() {
    let mut state = create_test_state();
    state.pointer_down(Point::new(10.0, 10.0));

    match state.stroke {
        StrokeState::Drawing { anchor, style } => {
            assert_eq!(anchor, Point::new(10.0, 10.0));
            assert_eq!(style.color, SKY);
            assert_eq!(style.width, 3.0);
        }
        StrokeState::Idle => panic!("pointer-down should enter Drawing"),
    }
}

#[test]
fn n_moves_produce_n_segments_in_order() {
    let mut state = create_test_state();
    state.pointer_down(Point::new(0.0, 0.0));

    let targets = [
        Point::new(5.0, 0.0),
        Point::new(5.0, 5.0),
        Point::new(2.0, 8.0),
    ];

    let mut previous = Point::new(0.0, 0.0);
    for target in targets {
        let segment = state.pointer_move(target).expect("move while drawing");
        assert_eq!(segment.from, previous);
        assert_eq!(segment.to, target);
        previous = target;
    }

    state.pointer_up();
    assert_eq!(state.stroke, StrokeState::Idle);
}

#[test]
fn move_while_idle_is_ignored() {
    let mut state = create_test_state();
    assert!(state.pointer_move(Point::new(50.0, 50.0)).is_none());
    assert_eq!(state.stroke, StrokeState::Idle);
}

#[test]
fn pointer_up_is_idempotent() {
    let mut state = create_test_state();
    state.pointer_down(Point::new(1.0, 1.0));
    state.pointer_up();
    assert_eq!(state.stroke, StrokeState::Idle);

    // Up then leave: second termination is a no-op
    state.pointer_up();
    assert_eq!(state.stroke, StrokeState::Idle);
    assert!(state.pointer_move(Point::new(2.0, 2.0)).is_none());
}

#[test]
fn down_while_drawing_keeps_current_anchor() {
    let mut state = create_test_state();
    state.pointer_down(Point::new(1.0, 1.0));
    state.pointer_move(Point::new(4.0, 4.0));

    state.pointer_down(Point::new(9.0, 9.0));

    let segment = state.pointer_move(Point::new(6.0, 6.0)).unwrap();
    assert_eq!(segment.from, Point::new(4.0, 4.0));
}

#[test]
fn eraser_strokes_use_background_ink_and_width() {
    let mut state = create_test_state();
    state.set_tool(Tool::Eraser);
    state.pointer_down(Point::new(5.0, 5.0));

    let segment = state.pointer_move(Point::new(5.0, 25.0)).unwrap();
    assert_eq!(segment.style.color, BACKGROUND);
    assert_eq!(segment.style.width, 20.0);
}

#[test]
fn tool_change_mid_stroke_is_not_retroactive() {
    let mut state = create_test_state();
    state.pointer_down(Point::new(0.0, 0.0));

    state.set_tool(Tool::Eraser);
    state.set_color(CORAL);

    // Still the pen stroke captured at pointer-down
    let segment = state.pointer_move(Point::new(3.0, 3.0)).unwrap();
    assert_eq!(segment.style.color, SKY);
    assert_eq!(segment.style.width, 3.0);

    // Next stroke picks up the new tool
    state.pointer_up();
    state.pointer_down(Point::new(0.0, 0.0));
    let segment = state.pointer_move(Point::new(1.0, 1.0)).unwrap();
    assert_eq!(segment.style.color, BACKGROUND);
    assert_eq!(segment.style.width, 20.0);
}

#[test]
fn color_change_applies_to_next_pen_stroke() {
    let mut state = create_test_state();
    state.set_color(CORAL);
    state.pointer_down(Point::new(0.0, 0.0));

    let segment = state.pointer_move(Point::new(1.0, 0.0)).unwrap();
    assert_eq!(segment.style.color, CORAL);
}
