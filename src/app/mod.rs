pub mod agents;
pub mod gemini_client;
pub mod localization;
pub mod painter_styles;
pub mod studioui;

pub use studioui::StudioApp;
