//! Handler für Doppelklick-Dialoge.

use crate::app::collaborators::{Prompt, UnitFormat};
use crate::app::use_cases;
use crate::app::AppState;

/// Wertet einen Doppelklick auf die aktive Entität aus.
pub fn double_click_active(state: &mut AppState, prompt: &mut dyn Prompt, units: &dyn UnitFormat) {
    use_cases::properties::double_click_active(state, prompt, units);
}
