//! Use-Cases der Application-Layer-Orchestrierung.

pub mod drawing;
pub mod editing;
pub mod hover;
pub mod input;
pub mod properties;
pub mod viewport;
