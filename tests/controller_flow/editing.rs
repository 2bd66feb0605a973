use super::common::*;
use floorplanner::{AppController, AppIntent, AppState, EditorMode, Floorplan, Key, Selection};
use glam::Vec2;

fn press(controller: &mut AppController, state: &mut AppState, x: f32, y: f32) {
    send(
        controller,
        state,
        AppIntent::PointerDown {
            screen_pos: Vec2::new(x, y),
        },
    );
}

#[test]
fn test_shift_drag_snaps_corner_to_neighbour_axis() {
    let (mut controller, mut state, _) = editor();
    let a = state.floorplan.new_corner(Vec2::new(0.0, 0.0));
    let b = state.floorplan.new_corner(Vec2::new(200.0, 0.0));
    state.floorplan.new_wall(a, b);

    move_to(&mut controller, &mut state, 200.0, 0.0);
    assert_eq!(state.selection, Selection::Corner(b));

    send(&mut controller, &mut state, AppIntent::KeyPressed { key: Key::Shift });
    press(&mut controller, &mut state, 200.0, 0.0);
    move_to(&mut controller, &mut state, 15.0, 150.0);
    send(&mut controller, &mut state, AppIntent::PointerUp);
    send(&mut controller, &mut state, AppIntent::KeyReleased { key: Key::Shift });

    assert_eq!(state.floorplan.corner_position(b), Some(Vec2::new(0.0, 150.0)));
    assert!(!state.input.grid_snap);
}

#[test]
fn test_corner_dropped_on_corner_is_merged() {
    let (mut controller, mut state, _) = editor();
    let a = state.floorplan.new_corner(Vec2::new(0.0, 0.0));
    let b = state.floorplan.new_corner(Vec2::new(400.0, 0.0));
    state.floorplan.new_wall(a, b);
    let c = state.floorplan.new_corner(Vec2::new(0.0, 300.0));
    let d = state.floorplan.new_corner(Vec2::new(400.0, 300.0));
    state.floorplan.new_wall(c, d);

    move_to(&mut controller, &mut state, 400.0, 300.0);
    assert_eq!(state.selection, Selection::Corner(d));
    press(&mut controller, &mut state, 400.0, 300.0);
    move_to(&mut controller, &mut state, 400.0, 0.0);
    send(&mut controller, &mut state, AppIntent::PointerUp);

    let at_target: Vec<_> = state
        .floorplan
        .corners()
        .filter(|corner| corner.position == Vec2::new(400.0, 0.0))
        .map(|corner| corner.id)
        .collect();
    assert_eq!(at_target, vec![b]);
    assert_eq!(state.floorplan.corner_count(), 3);
    assert!(state.floorplan.wall_between(c, b).is_some());
    assert_eq!(state.selection, Selection::Corner(b));
}

#[test]
fn test_shift_drag_onto_neighbour_leaves_single_corner() {
    let (mut controller, mut state, _) = editor();
    let a = state.floorplan.new_corner(Vec2::new(0.0, 0.0));
    let b = state.floorplan.new_corner(Vec2::new(100.0, 0.0));
    let c = state.floorplan.new_corner(Vec2::new(120.0, 0.0));
    state.floorplan.new_wall(a, b);
    state.floorplan.new_wall(b, c);

    move_to(&mut controller, &mut state, 120.0, 0.0);
    assert_eq!(state.selection, Selection::Corner(c));
    send(&mut controller, &mut state, AppIntent::KeyPressed { key: Key::Shift });
    press(&mut controller, &mut state, 120.0, 0.0);
    move_to(&mut controller, &mut state, 90.0, 10.0);
    send(&mut controller, &mut state, AppIntent::PointerUp);
    send(&mut controller, &mut state, AppIntent::KeyReleased { key: Key::Shift });

    let positions: Vec<Vec2> = state.floorplan.corners().map(|corner| corner.position).collect();
    for (i, p) in positions.iter().enumerate() {
        for q in &positions[i + 1..] {
            assert!(p.distance(*q) >= state.options.merge_tolerance);
        }
    }
    assert_eq!(state.floorplan.corner_count(), 2);
    assert!(state.floorplan.corner(c).is_none());
}

#[test]
fn test_grid_snap_survives_unrelated_key_release() {
    let (mut controller, mut state, _) = editor();

    send(&mut controller, &mut state, AppIntent::KeyPressed { key: Key::Shift });
    send(&mut controller, &mut state, AppIntent::KeyReleased { key: Key::Other });
    assert!(state.input.grid_snap);

    send(&mut controller, &mut state, AppIntent::KeyReleased { key: Key::Shift });
    assert!(!state.input.grid_snap);
}

#[test]
fn test_drag_wall_moves_both_corners() {
    let (mut controller, mut state, _) = editor();
    let a = state.floorplan.new_corner(Vec2::new(0.0, 0.0));
    let b = state.floorplan.new_corner(Vec2::new(200.0, 0.0));
    let wall = state.floorplan.new_wall(a, b).expect("Wand erwartet");

    move_to(&mut controller, &mut state, 100.0, 0.0);
    assert_eq!(state.selection, Selection::Wall(wall));

    press(&mut controller, &mut state, 100.0, 0.0);
    move_to(&mut controller, &mut state, 100.0, 40.0);
    move_to(&mut controller, &mut state, 100.0, 60.0);
    send(&mut controller, &mut state, AppIntent::PointerUp);

    assert_eq!(state.floorplan.corner_position(a), Some(Vec2::new(0.0, 60.0)));
    assert_eq!(state.floorplan.corner_position(b), Some(Vec2::new(200.0, 60.0)));
}

#[test]
fn test_dragging_room_corner_keeps_room() {
    let (mut controller, mut state, _) = editor();
    draw_rectangle(&mut controller, &mut state);
    let room = state.floorplan.rooms().next().map(|r| r.id).expect("Raum erwartet");

    move_to(&mut controller, &mut state, 400.0, 300.0);
    press(&mut controller, &mut state, 400.0, 300.0);
    move_to(&mut controller, &mut state, 500.0, 350.0);
    send(&mut controller, &mut state, AppIntent::PointerUp);

    assert_eq!(state.floorplan.room_count(), 1);
    assert!(state.floorplan.room(room).is_some());
    let area = state.floorplan.room_area(room).expect("Fläche erwartet");
    assert!(area > 400.0 * 300.0);
}

#[test]
fn test_pan_shifts_world_coordinates() {
    let (mut controller, mut state, _) = editor();

    move_to(&mut controller, &mut state, 100.0, 100.0);
    press(&mut controller, &mut state, 100.0, 100.0);
    move_to(&mut controller, &mut state, 90.0, 100.0);
    send(&mut controller, &mut state, AppIntent::PointerUp);

    assert_eq!(state.view.transform.origin, Vec2::new(10.0, 0.0));
    assert_eq!(
        state.view.transform.screen_to_world(Vec2::ZERO),
        Vec2::new(10.0, 0.0)
    );
}

#[test]
fn test_delete_mode_removes_hovered_corner() {
    let (mut controller, mut state, _) = editor();
    draw_rectangle(&mut controller, &mut state);
    set_mode(&mut controller, &mut state, EditorMode::Delete);

    move_to(&mut controller, &mut state, 400.0, 0.0);
    assert!(state.selection.corner().is_some());
    press(&mut controller, &mut state, 400.0, 0.0);
    send(&mut controller, &mut state, AppIntent::PointerUp);

    assert_eq!(state.floorplan.corner_count(), 3);
    assert_eq!(state.floorplan.wall_count(), 2);
    assert_eq!(state.floorplan.room_count(), 0);
    assert!(state.selection.is_none());
}

#[test]
fn test_load_floorplan_centers_view_and_resets_mode() {
    let (mut controller, mut state, _) = editor();
    set_mode(&mut controller, &mut state, EditorMode::Draw);

    let mut floorplan = Floorplan::new();
    let a = floorplan.new_corner(Vec2::new(0.0, 0.0));
    let b = floorplan.new_corner(Vec2::new(400.0, 300.0));
    floorplan.new_wall(a, b);

    controller
        .load_floorplan(&mut state, floorplan, [800.0, 600.0])
        .expect("Laden sollte ohne Fehler durchlaufen");

    assert_eq!(state.editor.mode, EditorMode::Move);
    assert_eq!(state.floorplan.corner_count(), 2);
    assert_eq!(state.view.transform.origin, Vec2::new(-200.0, -150.0));
    assert_eq!(state.view.viewport_size, [800.0, 600.0]);
}
