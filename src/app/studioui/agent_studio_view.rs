//! Agent Studio: run agent presets against the Gemini API and manage the
//! agent configuration YAML.

use super::{save_text_file, ViewStatus};
use crate::app::agents::{Agent, AgentRegistry};
use crate::app::gemini_client::{GatewayError, GeminiClient, GenerateRequest};
use crate::app::localization::Labels;
use egui::{RichText, ScrollArea, TextEdit, Ui};
use std::path::Path;
use std::sync::mpsc::{Receiver, TryRecvError};
use tracing::{error, info};

/// Fixed user-facing string for a failed agent run. Authentication problems
/// are the dominant failure cause, so the message points at the API key.
pub const RUN_ERROR_TEXT: &str = "Error generating content. Please check your API key.";

pub const REPAIR_ERROR_TEXT: &str = "Failed to repair YAML";

const GLOBAL_SKILLS_HEADER: &str = "Global Skills/Context:";

/// System instruction for a run: the agent's own prompt, followed by the
/// Global Skills block when the skill note has content.
pub fn compose_system_instruction(agent_prompt: &str, skill_note: &str) -> String {
    let note = skill_note.trim();
    if note.is_empty() {
        agent_prompt.to_string()
    } else {
        format!("{}\n\n{}\n{}", agent_prompt, GLOBAL_SKILLS_HEADER, note)
    }
}

/// Build the gateway request for one agent run.
pub fn build_run_request(agent: &Agent, prompt: &str, skill_note: &str) -> GenerateRequest {
    GenerateRequest {
        model: agent.model.clone(),
        prompt: prompt.to_string(),
        system_instruction: Some(compose_system_instruction(&agent.system_prompt, skill_note)),
        inline_data: None,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StudioTab {
    #[default]
    Run,
    Manage,
    Skills,
}

pub struct AgentStudioView {
    pub tab: StudioTab,
    pub prompt: String,
    pub output: String,
    pub status: ViewStatus,
    pending_run: Option<Receiver<Result<String, GatewayError>>>,

    pub repair_status: ViewStatus,
    pending_repair: Option<Receiver<Result<String, GatewayError>>>,
    /// True while the pending repair was triggered automatically by a failed
    /// upload. The automatic pass runs at most once per upload.
    auto_repair_active: bool,

    pub import_path: String,
    pub export_path: String,
    pub skill_note: String,
    pub skill_export_path: String,
    pub file_notice: Option<String>,
}

impl Default for AgentStudioView {
    fn default() -> Self {
        Self {
            tab: StudioTab::Run,
            prompt: String::new(),
            output: String::new(),
            status: ViewStatus::Idle,
            pending_run: None,
            repair_status: ViewStatus::Idle,
            pending_repair: None,
            auto_repair_active: false,
            import_path: String::new(),
            export_path: "agents.yaml".to_string(),
            skill_note: String::new(),
            skill_export_path: "SKILL.md".to_string(),
            file_notice: None,
        }
    }
}

impl AgentStudioView {
    pub fn new() -> Self {
        Self::default()
    }

    /// The Execute button is enabled only with a prompt, a selected agent
    /// and no call already in flight.
    pub fn can_run(&self, registry: &AgentRegistry) -> bool {
        !self.status.is_loading()
            && !self.prompt.trim().is_empty()
            && registry.selected().is_some()
    }

    /// Transition `inputReady -> loading`; rejected when input is missing.
    pub fn start_run(&mut self, client: &GeminiClient, registry: &AgentRegistry) {
        if !self.can_run(registry) {
            return;
        }
        let Some(agent) = registry.selected() else {
            return;
        };
        info!("Running agent '{}' with model {}", agent.name, agent.model);
        self.output.clear();
        self.status = ViewStatus::Loading;
        self.pending_run =
            Some(client.generate_async(build_run_request(agent, &self.prompt, &self.skill_note)));
    }

    /// Kick off a YAML repair pass over the current source text.
    pub fn start_repair(
        &mut self,
        client: &GeminiClient,
        registry: &AgentRegistry,
        standardize: bool,
    ) {
        if self.repair_status.is_loading() {
            return;
        }
        info!("Starting AI repair of agent YAML (standardize: {})", standardize);
        self.repair_status = ViewStatus::Loading;
        self.pending_repair =
            Some(client.repair_agent_yaml_async(registry.source_text().to_string(), standardize));
    }

    /// Import agent YAML from a file. Content that fails to parse as an
    /// agent sequence goes through the repair-and-standardize flow once,
    /// automatically.
    pub fn import_agents(&mut self, client: &GeminiClient, registry: &mut AgentRegistry) {
        self.file_notice = None;
        let text = match std::fs::read_to_string(Path::new(&self.import_path)) {
            Ok(text) => text,
            Err(e) => {
                error!("Failed to read {}: {}", self.import_path, e);
                self.file_notice = Some(format!("Failed to read file: {}", e));
                return;
            }
        };
        registry.set_source(text);
        if registry.parse_error().is_some() {
            info!("Uploaded agent file failed to parse, invoking automatic AI repair");
            self.start_repair(client, registry, true);
            self.auto_repair_active = true;
        }
    }

    /// Poll pending gateway calls; called once per frame.
    pub fn poll(&mut self, registry: &mut AgentRegistry) {
        if let Some(rx) = &self.pending_run {
            match rx.try_recv() {
                Ok(Ok(text)) => {
                    self.output = text;
                    self.status = ViewStatus::Idle;
                    self.pending_run = None;
                }
                Ok(Err(e)) => {
                    error!("Agent run failed: {}", e);
                    self.output = RUN_ERROR_TEXT.to_string();
                    self.status = ViewStatus::Error(e.to_string());
                    self.pending_run = None;
                }
                Err(TryRecvError::Empty) => {}
                Err(TryRecvError::Disconnected) => {
                    error!("Agent run worker disconnected without a result");
                    self.output = RUN_ERROR_TEXT.to_string();
                    self.status = ViewStatus::Error("worker disconnected".to_string());
                    self.pending_run = None;
                }
            }
        }

        if let Some(rx) = &self.pending_repair {
            let outcome = match rx.try_recv() {
                Ok(result) => Some(result),
                Err(TryRecvError::Empty) => None,
                Err(TryRecvError::Disconnected) => {
                    Some(Err(GatewayError::Service("worker disconnected".to_string())))
                }
            };
            if let Some(result) = outcome {
                self.apply_repair_result(registry, result);
            }
        }
    }

    /// Fold a finished repair call back into the registry and the view
    /// state. A repair is never retried: a second parse failure or a
    /// gateway error both land in a terminal error state.
    pub fn apply_repair_result(
        &mut self,
        registry: &mut AgentRegistry,
        result: Result<String, GatewayError>,
    ) {
        match result {
            Ok(repaired) => {
                registry.set_source(repaired);
                self.repair_status = if registry.parse_error().is_some() {
                    if self.auto_repair_active {
                        error!("Automatic repair of uploaded YAML still failed to parse");
                    }
                    ViewStatus::Error("Repaired text still failed to parse".to_string())
                } else {
                    info!(
                        "YAML repair succeeded (automatic: {})",
                        self.auto_repair_active
                    );
                    ViewStatus::Idle
                };
            }
            Err(e) => {
                error!("YAML repair failed: {}", e);
                self.repair_status = ViewStatus::Error(REPAIR_ERROR_TEXT.to_string());
            }
        }
        self.auto_repair_active = false;
        self.pending_repair = None;
    }

    pub fn has_pending_work(&self) -> bool {
        self.pending_run.is_some() || self.pending_repair.is_some()
    }

    pub fn show(
        &mut self,
        ui: &mut Ui,
        labels: &Labels,
        client: &GeminiClient,
        registry: &mut AgentRegistry,
    ) {
        self.poll(registry);

        ui.heading(labels.agent_studio);
        ui.add_space(4.0);

        ui.horizontal(|ui| {
            ui.selectable_value(&mut self.tab, StudioTab::Run, labels.run);
            ui.selectable_value(&mut self.tab, StudioTab::Manage, labels.manage);
            ui.selectable_value(&mut self.tab, StudioTab::Skills, labels.skill_md);
        });
        ui.separator();

        match self.tab {
            StudioTab::Run => self.show_run_tab(ui, labels, client, registry),
            StudioTab::Manage => self.show_manage_tab(ui, labels, client, registry),
            StudioTab::Skills => self.show_skills_tab(ui, labels),
        }
    }

    fn show_run_tab(
        &mut self,
        ui: &mut Ui,
        labels: &Labels,
        client: &GeminiClient,
        registry: &mut AgentRegistry,
    ) {
        ui.columns(2, |columns| {
            let ui = &mut columns[0];
            ui.label(labels.select_agent);
            let selected_name = registry
                .selected()
                .map(|a| a.name.clone())
                .unwrap_or_else(|| "-".to_string());
            let mut select: Option<String> = None;
            egui::ComboBox::from_id_salt("agent_select")
                .selected_text(selected_name)
                .show_ui(ui, |ui| {
                    for agent in registry.agents() {
                        if ui
                            .selectable_label(
                                registry.selected_id() == Some(agent.id.as_str()),
                                &agent.name,
                            )
                            .clicked()
                        {
                            select = Some(agent.id.clone());
                        }
                    }
                });
            if let Some(id) = select {
                registry.select(&id);
            }

            if let Some(agent) = registry.selected() {
                ui.add_space(6.0);
                ui.group(|ui| {
                    ui.label(RichText::new(&agent.name).strong());
                    ui.label(&agent.description);
                    ui.label(RichText::new(format!("Model: {}", agent.model)).monospace().small());
                });
            }

            ui.add_space(6.0);
            ui.label(labels.prompt);
            ui.add(
                TextEdit::multiline(&mut self.prompt)
                    .desired_rows(6)
                    .desired_width(f32::INFINITY)
                    .hint_text(labels.prompt),
            );

            ui.add_space(6.0);
            let can_run = self.can_run(registry);
            if self.status.is_loading() {
                ui.horizontal(|ui| {
                    ui.spinner();
                    ui.label(labels.processing);
                });
            } else if ui.add_enabled(can_run, egui::Button::new(labels.execute)).clicked() {
                self.start_run(client, registry);
            }

            let ui = &mut columns[1];
            ui.horizontal(|ui| {
                ui.label(RichText::new("Output").strong());
                if ui
                    .add_enabled(!self.output.is_empty(), egui::Button::new("Copy"))
                    .clicked()
                {
                    ui.ctx().copy_text(self.output.clone());
                }
            });
            ScrollArea::vertical()
                .id_salt("agent_output")
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    if self.output.is_empty() {
                        ui.weak("Agent output will appear here...");
                    } else {
                        ui.label(RichText::new(&self.output).monospace());
                    }
                });
        });
    }

    fn show_manage_tab(
        &mut self,
        ui: &mut Ui,
        labels: &Labels,
        client: &GeminiClient,
        registry: &mut AgentRegistry,
    ) {
        ui.horizontal(|ui| {
            ui.label(RichText::new("Agent Configuration (YAML)").strong());
            if self.repair_status.is_loading() {
                ui.spinner();
                ui.label(labels.processing);
            } else if ui.button(labels.repair).clicked() {
                self.start_repair(client, registry, false);
            }
        });

        ui.horizontal(|ui| {
            ui.label(labels.upload);
            ui.add(
                TextEdit::singleline(&mut self.import_path)
                    .desired_width(260.0)
                    .hint_text("path/to/agents.yaml"),
            );
            if ui
                .add_enabled(!self.import_path.trim().is_empty(), egui::Button::new(labels.upload))
                .clicked()
            {
                self.import_agents(client, registry);
            }
        });

        ui.horizontal(|ui| {
            ui.label(labels.download);
            ui.add(TextEdit::singleline(&mut self.export_path).desired_width(260.0));
            if ui.button(labels.download).clicked() {
                match save_text_file(Path::new(&self.export_path), registry.source_text()) {
                    Ok(()) => self.file_notice = Some(format!("Saved {}", self.export_path)),
                    Err(e) => {
                        error!("Failed to save agent YAML: {}", e);
                        self.file_notice = Some(format!("Failed to save: {}", e));
                    }
                }
            }
        });

        if let Some(error) = registry.parse_error() {
            ui.colored_label(egui::Color32::RED, format!("Invalid YAML: {}", error));
        }
        if let ViewStatus::Error(msg) = &self.repair_status {
            ui.colored_label(egui::Color32::RED, msg);
        }
        if let Some(notice) = &self.file_notice {
            ui.weak(notice);
        }

        // Live editor: reparse on every edit. A bad intermediate state
        // flags an error but keeps the last good collection.
        let mut text = registry.source_text().to_string();
        let response = ui.add(
            TextEdit::multiline(&mut text)
                .code_editor()
                .desired_rows(18)
                .desired_width(f32::INFINITY),
        );
        if response.changed() {
            registry.set_source(text);
        }
    }

    fn show_skills_tab(&mut self, ui: &mut Ui, labels: &Labels) {
        ui.label("Global skills and context shared with every agent run:");
        ui.add(
            TextEdit::multiline(&mut self.skill_note)
                .desired_rows(14)
                .desired_width(f32::INFINITY)
                .hint_text("Notes, style guides, house rules..."),
        );
        ui.horizontal(|ui| {
            ui.label(labels.download);
            ui.add(TextEdit::singleline(&mut self.skill_export_path).desired_width(260.0));
            if ui.button(labels.download).clicked() {
                match save_text_file(Path::new(&self.skill_export_path), &self.skill_note) {
                    Ok(()) => self.file_notice = Some(format!("Saved {}", self.skill_export_path)),
                    Err(e) => {
                        error!("Failed to save skill note: {}", e);
                        self.file_notice = Some(format!("Failed to save: {}", e));
                    }
                }
            }
        });
    }
}
