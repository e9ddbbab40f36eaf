//! Application shell: global settings, view routing and the per-frame theme
//! application.

use super::agent_studio_view::AgentStudioView;
use super::dashboard_view::DashboardView;
use super::doc_intelligence_view::DocIntelligenceView;
use super::note_keeper_view::NoteKeeperView;
use super::sidebar;
use crate::app::agents::AgentRegistry;
use crate::app::gemini_client::{GeminiClient, API_KEY_ENV};
use crate::app::localization::{labels_for, Language};
use crate::app::painter_styles::{self, DEFAULT_STYLE};
use std::time::Duration;
use tracing::info;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemePreference {
    #[default]
    Light,
    Dark,
}

/// In-memory settings. Sessions start fresh on purpose; nothing here is
/// persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppSettings {
    pub language: Language,
    pub theme: ThemePreference,
    pub painter_style: String,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            language: Language::default(),
            theme: ThemePreference::default(),
            painter_style: DEFAULT_STYLE.to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActiveView {
    #[default]
    Dashboard,
    AgentStudio,
    DocIntelligence,
    NoteKeeper,
}

impl ActiveView {
    pub fn key(&self) -> &'static str {
        match self {
            ActiveView::Dashboard => "dashboard",
            ActiveView::AgentStudio => "agent-studio",
            ActiveView::DocIntelligence => "doc-intelligence",
            ActiveView::NoteKeeper => "note-keeper",
        }
    }

    /// Parse a view key; anything unknown lands on the dashboard.
    pub fn from_key(key: &str) -> Self {
        match key {
            "agent-studio" => ActiveView::AgentStudio,
            "doc-intelligence" => ActiveView::DocIntelligence,
            "note-keeper" => ActiveView::NoteKeeper,
            _ => ActiveView::Dashboard,
        }
    }
}

pub struct StudioApp {
    pub(crate) settings: AppSettings,
    pub(crate) active_view: ActiveView,
    pub(crate) api_key_input: String,
    pub(crate) env_key_present: bool,
    pub(crate) registry: AgentRegistry,
    pub(crate) dashboard: DashboardView,
    pub(crate) agent_studio: AgentStudioView,
    pub(crate) doc_intelligence: DocIntelligenceView,
    pub(crate) note_keeper: NoteKeeperView,
}

impl StudioApp {
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        let env_key_present = std::env::var(API_KEY_ENV)
            .ok()
            .filter(|k| !k.trim().is_empty())
            .is_some();
        info!(
            "Starting studio shell (environment API key present: {})",
            env_key_present
        );
        Self {
            settings: AppSettings::default(),
            active_view: ActiveView::default(),
            api_key_input: String::new(),
            env_key_present,
            registry: AgentRegistry::with_defaults(),
            dashboard: DashboardView::new(),
            agent_studio: AgentStudioView::new(),
            doc_intelligence: DocIntelligenceView::new(),
            note_keeper: NoteKeeperView::new(),
        }
    }

    /// A client for the current frame, resolving the sidebar key over the
    /// environment key.
    pub(crate) fn client(&self) -> GeminiClient {
        GeminiClient::new(Some(self.api_key_input.clone()))
    }

    fn any_loading(&self) -> bool {
        self.agent_studio.has_pending_work()
            || self.doc_intelligence.has_pending_work()
            || self.note_keeper.has_pending_work()
    }
}

impl eframe::App for StudioApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let style = painter_styles::resolve(&self.settings.painter_style);
        let dark = self.settings.theme == ThemePreference::Dark;
        painter_styles::apply_theme(style, dark, ctx);

        egui::SidePanel::left("studio_sidebar")
            .resizable(false)
            .default_width(220.0)
            .show(ctx, |ui| {
                sidebar::show(self, ui);
            });

        let labels = labels_for(self.settings.language);
        let client = self.client();
        egui::CentralPanel::default().show(ctx, |ui| match self.active_view {
            ActiveView::Dashboard => self.dashboard.show(ui, labels, style),
            ActiveView::AgentStudio => {
                self.agent_studio.show(ui, labels, &client, &mut self.registry)
            }
            ActiveView::DocIntelligence => {
                self.doc_intelligence.show(ui, labels, &client, &mut self.registry)
            }
            ActiveView::NoteKeeper => self.note_keeper.show(ui, labels, &client),
        });

        // Worker results arrive over channels, so keep polling while any
        // call is in flight.
        if self.any_loading() {
            ctx.request_repaint_after(Duration::from_millis(100));
        }
    }
}
