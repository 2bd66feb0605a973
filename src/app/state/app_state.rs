use crate::app::{CommandLog, EditorEvent};
use crate::core::{Floorplan, Selection};
use crate::shared::EditorOptions;

use super::{EditorState, InputState, ViewState};

/// Hauptzustand der Anwendung
pub struct AppState {
    /// Der bearbeitete Grundriss
    pub floorplan: Floorplan,
    /// View-State
    pub view: ViewState,
    /// Modus-State
    pub editor: EditorState,
    /// Aktuell adressierte Ecke, Wand oder Raum
    pub selection: Selection,
    /// Pointer- und Tastaturzustand
    pub input: InputState,
    /// Laufzeit-Optionen (Toleranzen, Maßstab, Fangradien)
    pub options: EditorOptions,
    /// Verlauf ausgeführter Commands
    pub command_log: CommandLog,
    /// Während eines Intents gesammelte Events (vom Controller ausgeliefert)
    pub pending_events: Vec<EditorEvent>,
    /// Ob nach dem aktuellen Intent neu gezeichnet werden muss
    pub redraw_requested: bool,
}

impl AppState {
    /// Erstellt einen neuen, leeren App-State mit Standard-Optionen
    pub fn new() -> Self {
        Self::with_options(EditorOptions::default())
    }

    /// Erstellt einen leeren App-State mit den übergebenen (geprüften) Optionen
    pub fn with_options(options: EditorOptions) -> Self {
        let options = options.validated();
        let mut floorplan = Floorplan::new();
        apply_floorplan_options(&mut floorplan, &options);

        Self {
            floorplan,
            view: ViewState::new(options.cm_per_pixel),
            editor: EditorState::new(),
            selection: Selection::None,
            input: InputState::new(),
            options,
            command_log: CommandLog::new(),
            pending_events: Vec::new(),
            redraw_requested: false,
        }
    }

    /// Ersetzt den Grundriss und übernimmt die Toleranzen aus den Optionen.
    pub fn replace_floorplan(&mut self, mut floorplan: Floorplan) {
        apply_floorplan_options(&mut floorplan, &self.options);
        self.floorplan = floorplan;
    }

    /// Merkt ein Event zur Auslieferung nach dem aktuellen Intent vor.
    pub fn emit(&mut self, event: EditorEvent) {
        self.pending_events.push(event);
    }

    /// Fordert ein Neuzeichnen nach dem aktuellen Intent an.
    pub fn request_redraw(&mut self) {
        self.redraw_requested = true;
    }

    /// Gibt die Anzahl der Ecken zurück (für UI-Anzeige)
    pub fn corner_count(&self) -> usize {
        self.floorplan.corner_count()
    }

    /// Gibt die Anzahl der Wände zurück (für UI-Anzeige)
    pub fn wall_count(&self) -> usize {
        self.floorplan.wall_count()
    }

    /// Gibt die Anzahl der Räume zurück (für UI-Anzeige)
    pub fn room_count(&self) -> usize {
        self.floorplan.room_count()
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

fn apply_floorplan_options(floorplan: &mut Floorplan, options: &EditorOptions) {
    floorplan.merge_tolerance = options.merge_tolerance;
    floorplan.default_wall_width = options.wall_width;
}
