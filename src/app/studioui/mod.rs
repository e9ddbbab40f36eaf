//! UI layer: the shell application plus one module per view.
//!
//! Each view is a self-contained state machine over
//! `{idle, loading, error}` with its own buffers; the shell owns the
//! global settings and the agent registry and routes to exactly one view
//! per frame.

pub mod agent_studio_view;
pub mod app;
pub mod dashboard_view;
pub mod doc_intelligence_view;
pub mod note_keeper_view;
pub mod sidebar;

pub use app::StudioApp;

use std::path::Path;

/// Lifecycle of a view's single in-flight gateway call.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ViewStatus {
    #[default]
    Idle,
    Loading,
    Error(String),
}

impl ViewStatus {
    pub fn is_loading(&self) -> bool {
        matches!(self, ViewStatus::Loading)
    }
}

/// Write a text export (agents.yaml, SKILL.md, analysis.md) to disk.
pub fn save_text_file(path: &Path, contents: &str) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    std::fs::write(path, contents)?;
    tracing::info!("Saved {} bytes to {:?}", contents.len(), path);
    Ok(())
}
