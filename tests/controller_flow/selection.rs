use super::common::*;
use floorplanner::{AppController, AppIntent, AppState, EditorEvent, EditorOptions, PromptRequest};
use glam::Vec2;

#[test]
fn test_hover_events_follow_pointer() {
    let (mut controller, mut state, events) = editor();
    draw_rectangle(&mut controller, &mut state);
    let wall = state.floorplan.walls().next().map(|w| w.id).expect("Wand erwartet");
    let room = state.floorplan.rooms().next().map(|r| r.id).expect("Raum erwartet");

    events.borrow_mut().clear();
    move_to(&mut controller, &mut state, 200.0, 2.0);
    assert!(events.borrow().contains(&EditorEvent::WallHover(Some(wall))));

    events.borrow_mut().clear();
    move_to(&mut controller, &mut state, 200.0, 150.0);
    let recorded = events.borrow().clone();
    assert!(recorded.contains(&EditorEvent::WallHover(None)));
    assert!(recorded.contains(&EditorEvent::RoomHover(Some(room))));

    events.borrow_mut().clear();
    move_to(&mut controller, &mut state, 210.0, 160.0);
    let recorded = events.borrow().clone();
    assert!(recorded
        .iter()
        .all(|event| !matches!(event, EditorEvent::RoomHover(_) | EditorEvent::WallHover(_))));
}

#[test]
fn test_redraw_requested_once_per_intent() {
    let (mut controller, mut state, events) = editor();
    set_mode(&mut controller, &mut state, floorplanner::EditorMode::Draw);
    click(&mut controller, &mut state, 0.0, 0.0);

    events.borrow_mut().clear();
    move_to(&mut controller, &mut state, 120.0, 40.0);

    let redraws = events
        .borrow()
        .iter()
        .filter(|event| **event == EditorEvent::RedrawRequested)
        .count();
    assert_eq!(redraws, 1);
    assert_eq!(events.borrow().last(), Some(&EditorEvent::RedrawRequested));
}

#[test]
fn test_click_on_empty_canvas_reports_nothing_clicked() {
    let (mut controller, mut state, events) = editor();

    click(&mut controller, &mut state, 50.0, 50.0);

    assert!(events.borrow().contains(&EditorEvent::NothingClicked));
    assert_eq!(state.floorplan.corner_count(), 0);
}

#[test]
fn test_double_click_room_renames_via_prompt() {
    let options = EditorOptions {
        cm_per_pixel: 1.0,
        ..EditorOptions::default()
    };
    let mut state = AppState::with_options(options);
    let mut controller = AppController::new().with_prompt(|request: &PromptRequest| {
        match request {
            PromptRequest::RoomName { .. } => Some("  Wohnzimmer ".to_string()),
            PromptRequest::CornerElevation { .. } => None,
        }
    });
    let events = record_events(&mut controller);
    draw_rectangle(&mut controller, &mut state);
    let room = state.floorplan.rooms().next().map(|r| r.id).expect("Raum erwartet");

    move_to(&mut controller, &mut state, 200.0, 150.0);
    send(&mut controller, &mut state, AppIntent::DoubleClicked);

    assert!(events.borrow().contains(&EditorEvent::RoomDoubleClicked(room)));
    let name = state.floorplan.room(room).map(|r| r.name.clone());
    assert_eq!(name.as_deref(), Some("Wohnzimmer"));
}

#[test]
fn test_double_click_corner_sets_clamped_elevation() {
    let options = EditorOptions {
        cm_per_pixel: 1.0,
        ..EditorOptions::default()
    };
    let mut state = AppState::with_options(options);
    let mut controller =
        AppController::new().with_prompt(|_: &PromptRequest| Some("5000".to_string()));
    let corner = state.floorplan.new_corner(Vec2::new(100.0, 100.0));

    move_to(&mut controller, &mut state, 100.0, 100.0);
    send(&mut controller, &mut state, AppIntent::DoubleClicked);

    let elevation = state.floorplan.corner(corner).map(|c| c.elevation);
    assert_eq!(elevation, Some(2000.0));
}

#[test]
fn test_render_scene_reflects_hover_and_preview() {
    let (mut controller, mut state, _) = editor();
    draw_rectangle(&mut controller, &mut state);
    move_to(&mut controller, &mut state, 200.0, 150.0);

    let scene = controller.build_render_scene(&state);

    assert_eq!(scene.corners.len(), 4);
    assert_eq!(scene.walls.len(), 4);
    assert_eq!(scene.rooms.len(), 1);
    assert!(scene.rooms[0].highlighted);
    assert!(scene.draw_preview.is_none());
}

#[test]
fn test_inverted_elevation_bounds_do_not_break_elevation_edit() {
    let options = EditorOptions {
        cm_per_pixel: 1.0,
        elevation_min_cm: 500.0,
        elevation_max_cm: 100.0,
        ..EditorOptions::default()
    };
    let mut state = AppState::with_options(options);
    let mut controller =
        AppController::new().with_prompt(|_: &PromptRequest| Some("300".to_string()));
    let corner = state.floorplan.new_corner(Vec2::new(50.0, 50.0));

    move_to(&mut controller, &mut state, 50.0, 50.0);
    send(&mut controller, &mut state, AppIntent::DoubleClicked);

    let elevation = state.floorplan.corner(corner).map(|c| c.elevation);
    assert_eq!(elevation, Some(300.0));
}
