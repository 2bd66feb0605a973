//! Application State — zentrale Datenhaltung.

mod app_state;
mod editor;
mod input;
mod view;

pub use app_state::AppState;
pub use editor::EditorState;
pub use input::InputState;
pub use view::ViewState;
