//! Verträge zu externen Kollaborateuren: modale Texteingabe und Einheiten-Formatierung.

use crate::core::{CornerId, RoomId};

/// Anfrage an einen modalen Eingabedialog.
#[derive(Debug, Clone, PartialEq)]
pub enum PromptRequest {
    /// Neue Höhe einer Ecke, `current` ist bereits in der Anzeige-Einheit formatiert
    CornerElevation {
        corner: CornerId,
        current: String,
        unit_label: String,
    },
    /// Neuer Name eines Raums
    RoomName { room: RoomId, current: String },
}

impl PromptRequest {
    /// Beschriftung für den Dialog
    pub fn message(&self) -> String {
        match self {
            PromptRequest::CornerElevation { unit_label, .. } => {
                format!("Höhe der Ecke ({})", unit_label)
            }
            PromptRequest::RoomName { .. } => "Name des Raums".to_string(),
        }
    }

    /// Vorbelegter Text
    pub fn default_text(&self) -> &str {
        match self {
            PromptRequest::CornerElevation { current, .. } => current,
            PromptRequest::RoomName { current, .. } => current,
        }
    }
}

/// Modale Texteingabe. `None` bedeutet abgebrochen.
pub trait Prompt {
    fn request(&mut self, request: &PromptRequest) -> Option<String>;
}

/// Prompt ohne Oberfläche: bricht immer ab.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoPrompt;

impl Prompt for NoPrompt {
    fn request(&mut self, _request: &PromptRequest) -> Option<String> {
        None
    }
}

impl<F> Prompt for F
where
    F: FnMut(&PromptRequest) -> Option<String>,
{
    fn request(&mut self, request: &PromptRequest) -> Option<String> {
        self(request)
    }
}

/// Umrechnung zwischen internen Zentimetern und der Anzeige-Einheit.
pub trait UnitFormat {
    /// Kurzbezeichnung der Einheit (z.B. "cm")
    fn unit_label(&self) -> &str;
    /// Formatiert einen Wert in cm für die Anzeige
    fn format_cm(&self, value_cm: f32) -> String;
    /// Parst eine Eingabe in der Anzeige-Einheit zu cm
    fn parse_to_cm(&self, text: &str) -> Option<f32>;
}

/// Anzeige in Zentimetern.
#[derive(Debug, Clone, Copy, Default)]
pub struct Centimeters;

impl UnitFormat for Centimeters {
    fn unit_label(&self) -> &str {
        "cm"
    }

    fn format_cm(&self, value_cm: f32) -> String {
        format!("{}", value_cm)
    }

    fn parse_to_cm(&self, text: &str) -> Option<f32> {
        text.trim().parse::<f32>().ok()
    }
}

/// Anzeige in Metern.
#[derive(Debug, Clone, Copy, Default)]
pub struct Meters;

impl UnitFormat for Meters {
    fn unit_label(&self) -> &str {
        "m"
    }

    fn format_cm(&self, value_cm: f32) -> String {
        format!("{:.2}", value_cm / 100.0)
    }

    fn parse_to_cm(&self, text: &str) -> Option<f32> {
        text.trim().parse::<f32>().ok().map(|m| m * 100.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn centimeters_roundtrip_text() {
        let units = Centimeters;
        assert_eq!(units.format_cm(250.0), "250");
        assert_eq!(units.parse_to_cm(" 300 "), Some(300.0));
        assert_eq!(units.parse_to_cm("hoch"), None);
    }

    #[test]
    fn meters_convert_to_centimeters() {
        let units = Meters;
        assert_eq!(units.format_cm(250.0), "2.50");
        assert_relative_eq!(units.parse_to_cm("2.75").expect("Zahl"), 275.0);
    }

    #[test]
    fn no_prompt_always_cancels() {
        let request = PromptRequest::RoomName {
            room: RoomId(1),
            current: String::new(),
        };
        assert_eq!(NoPrompt.request(&request), None);
        assert_eq!(request.message(), "Name des Raums");
        assert_eq!(request.default_text(), "");
    }
}
