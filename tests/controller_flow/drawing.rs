use super::common::*;
use floorplanner::{AppIntent, EditorEvent, EditorMode, Key};
use glam::Vec2;

#[test]
fn test_click_near_last_corner_ends_chain() {
    let (mut controller, mut state, _) = editor();
    set_mode(&mut controller, &mut state, EditorMode::Draw);

    click(&mut controller, &mut state, 0.0, 0.0);
    click(&mut controller, &mut state, 200.0, 0.0);
    click(&mut controller, &mut state, 205.0, 0.0);

    assert_eq!(state.editor.mode, EditorMode::Move);
    assert_eq!(state.floorplan.corner_count(), 2);
    assert_eq!(state.floorplan.wall_count(), 1);
    let positions: Vec<Vec2> = state.floorplan.corners().map(|c| c.position).collect();
    assert_eq!(positions, vec![Vec2::new(0.0, 0.0), Vec2::new(200.0, 0.0)]);
}

#[test]
fn test_closed_rectangle_creates_one_room() {
    let (mut controller, mut state, _) = editor();

    draw_rectangle(&mut controller, &mut state);

    assert_eq!(state.editor.mode, EditorMode::Move);
    assert_eq!(state.floorplan.corner_count(), 4);
    assert_eq!(state.floorplan.wall_count(), 4);
    assert_eq!(state.floorplan.room_count(), 1);
}

#[test]
fn test_snap_target_locks_to_last_corner_axis() {
    let (mut controller, mut state, _) = editor();
    set_mode(&mut controller, &mut state, EditorMode::Draw);
    click(&mut controller, &mut state, 0.0, 0.0);

    move_to(&mut controller, &mut state, 300.0, 12.0);

    assert_eq!(state.editor.snap_target, Vec2::new(300.0, 0.0));
}

#[test]
fn test_drawing_across_wall_splits_it() {
    let (mut controller, mut state, _) = editor();
    set_mode(&mut controller, &mut state, EditorMode::Draw);
    click(&mut controller, &mut state, 0.0, 0.0);
    click(&mut controller, &mut state, 400.0, 0.0);
    send(&mut controller, &mut state, AppIntent::KeyPressed { key: Key::Escape });

    set_mode(&mut controller, &mut state, EditorMode::Draw);
    click(&mut controller, &mut state, 200.0, -150.0);
    click(&mut controller, &mut state, 200.0, 150.0);

    assert_eq!(state.floorplan.corner_count(), 5);
    assert_eq!(state.floorplan.wall_count(), 4);
    let crossing = state
        .floorplan
        .corners()
        .find(|c| c.wall_count() == 4)
        .expect("Kreuzungs-Ecke erwartet");
    assert!((crossing.position - Vec2::new(200.0, 0.0)).length() < 1e-3);
}

#[test]
fn test_escape_resets_mode_and_chain() {
    let (mut controller, mut state, events) = editor();
    set_mode(&mut controller, &mut state, EditorMode::Draw);
    click(&mut controller, &mut state, 0.0, 0.0);
    assert!(state.editor.last_corner.is_some());
    events.borrow_mut().clear();

    send(&mut controller, &mut state, AppIntent::KeyPressed { key: Key::Escape });

    assert_eq!(state.editor.mode, EditorMode::Move);
    assert!(state.editor.last_corner.is_none());
    assert!(events.borrow().contains(&EditorEvent::ModeReset {
        mode: EditorMode::Move
    }));
}

#[test]
fn test_moved_pointer_between_press_and_release_places_nothing() {
    let (mut controller, mut state, _) = editor();
    set_mode(&mut controller, &mut state, EditorMode::Draw);

    move_to(&mut controller, &mut state, 10.0, 10.0);
    send(
        &mut controller,
        &mut state,
        AppIntent::PointerDown {
            screen_pos: Vec2::new(10.0, 10.0),
        },
    );
    move_to(&mut controller, &mut state, 40.0, 10.0);
    send(&mut controller, &mut state, AppIntent::PointerUp);

    assert_eq!(state.floorplan.corner_count(), 0);
}
