use floorplanner::{
    AppController, AppIntent, AppState, EditorEvent, EditorMode, EditorOptions,
};
use glam::Vec2;
use std::cell::RefCell;
use std::rc::Rc;

/// Aufgezeichnete Events eines Controllers.
pub type EventLog = Rc<RefCell<Vec<EditorEvent>>>;

/// Editor mit Maßstab 1 cm/px: Bildschirm- und Weltkoordinaten stimmen überein.
pub fn editor() -> (AppController, AppState, EventLog) {
    let options = EditorOptions {
        cm_per_pixel: 1.0,
        ..EditorOptions::default()
    };
    let state = AppState::with_options(options);
    let mut controller = AppController::new();
    let events = record_events(&mut controller);
    (controller, state, events)
}

/// Registriert einen Listener, der alle Events mitschreibt.
pub fn record_events(controller: &mut AppController) -> EventLog {
    let events: EventLog = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&events);
    controller.subscribe(move |event: &EditorEvent| sink.borrow_mut().push(event.clone()));
    events
}

pub fn send(controller: &mut AppController, state: &mut AppState, intent: AppIntent) {
    controller
        .handle_intent(state, intent)
        .expect("Intent sollte ohne Fehler durchlaufen");
}

pub fn move_to(controller: &mut AppController, state: &mut AppState, x: f32, y: f32) {
    send(
        controller,
        state,
        AppIntent::PointerMoved {
            screen_pos: Vec2::new(x, y),
        },
    );
}

/// Bewegen, Drücken, Loslassen an derselben Stelle.
pub fn click(controller: &mut AppController, state: &mut AppState, x: f32, y: f32) {
    move_to(controller, state, x, y);
    send(
        controller,
        state,
        AppIntent::PointerDown {
            screen_pos: Vec2::new(x, y),
        },
    );
    send(controller, state, AppIntent::PointerUp);
}

pub fn set_mode(controller: &mut AppController, state: &mut AppState, mode: EditorMode) {
    send(controller, state, AppIntent::SetModeRequested { mode });
}

/// Zeichnet das Rechteck (0,0)–(400,300) als geschlossenen Wandzug.
pub fn draw_rectangle(controller: &mut AppController, state: &mut AppState) {
    set_mode(controller, state, EditorMode::Draw);
    for (x, y) in [(0.0, 0.0), (400.0, 0.0), (400.0, 300.0), (0.0, 300.0), (0.0, 0.0)] {
        click(controller, state, x, y);
    }
}
