//! Doc Intelligence: analyze an uploaded file or pasted text with either a
//! direct model pick or one of the configured agents.

use super::{save_text_file, ViewStatus};
use crate::app::agents::AgentRegistry;
use crate::app::gemini_client::{GatewayError, GeminiClient, GenerateRequest, InlineData};
use crate::app::localization::Labels;
use base64::Engine as _;
use egui::{RichText, ScrollArea, TextEdit, Ui};
use egui_commonmark::{CommonMarkCache, CommonMarkViewer};
use std::path::Path;
use std::sync::mpsc::{Receiver, TryRecvError};
use tracing::{error, info};

/// Models selectable in direct mode.
pub const DIRECT_MODELS: [&str; 3] = [
    "gemini-3-flash-preview",
    "gemini-3-pro-preview",
    "gemini-2.5-flash-image",
];

/// Model forced for image input in direct mode.
pub const VISION_MODEL: &str = "gemini-2.5-flash-image";

pub const DEFAULT_INSTRUCTION: &str =
    "Analyze this content and provide a detailed summary in Markdown format.";

pub const PROCESS_ERROR_TEXT: &str = "Error processing document.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SourceTab {
    #[default]
    Upload,
    Paste,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExecMode {
    #[default]
    DirectModel,
    Agent,
}

/// Decoded content of an uploaded file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileContent {
    Text(String),
    /// Base64 payload with the mime type it is sent as.
    Binary { mime_type: String, data: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadedFile {
    pub name: String,
    pub size: u64,
    pub content: FileContent,
}

/// Mime type for file extensions that are sent as inline data rather than
/// text. Everything else is read as UTF-8 text.
fn binary_mime_type(extension: &str) -> Option<&'static str> {
    match extension.to_ascii_lowercase().as_str() {
        "png" => Some("image/png"),
        "jpg" | "jpeg" => Some("image/jpeg"),
        "pdf" => Some("application/pdf"),
        _ => None,
    }
}

/// Read a file from disk into the form it will be sent in.
pub fn load_file(path: &Path) -> Result<UploadedFile, String> {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());
    let extension = path
        .extension()
        .map(|e| e.to_string_lossy().into_owned())
        .unwrap_or_default();

    if let Some(mime_type) = binary_mime_type(&extension) {
        let bytes = std::fs::read(path).map_err(|e| e.to_string())?;
        Ok(UploadedFile {
            name,
            size: bytes.len() as u64,
            content: FileContent::Binary {
                mime_type: mime_type.to_string(),
                data: base64::engine::general_purpose::STANDARD.encode(&bytes),
            },
        })
    } else {
        let text = std::fs::read_to_string(path).map_err(|e| e.to_string())?;
        Ok(UploadedFile {
            name,
            size: text.len() as u64,
            content: FileContent::Text(text),
        })
    }
}

/// Assemble the gateway request for one analysis run.
///
/// Text sources are appended to the instruction; binary sources ride along
/// as inline data. In direct mode an image input overrides the selected
/// model with the vision model.
pub fn build_doc_request(
    instruction: &str,
    source: &FileContent,
    model: &str,
    system_instruction: Option<String>,
    direct_mode: bool,
) -> GenerateRequest {
    match source {
        FileContent::Text(text) => GenerateRequest {
            model: model.to_string(),
            prompt: format!("{}\n\nContent:\n{}", instruction, text),
            system_instruction,
            inline_data: None,
        },
        FileContent::Binary { mime_type, data } => {
            let model = if direct_mode && mime_type.starts_with("image/") {
                VISION_MODEL
            } else {
                model
            };
            GenerateRequest {
                model: model.to_string(),
                prompt: instruction.to_string(),
                system_instruction,
                inline_data: Some(InlineData {
                    mime_type: mime_type.clone(),
                    data: data.clone(),
                }),
            }
        }
    }
}

pub struct DocIntelligenceView {
    pub source_tab: SourceTab,
    pub exec_mode: ExecMode,
    pub model: String,
    pub instruction: String,
    pub file: Option<UploadedFile>,
    pub file_path: String,
    pub pasted_text: String,
    pub analysis: String,
    pub status: ViewStatus,
    pub export_path: String,
    pub file_notice: Option<String>,
    pending: Option<Receiver<Result<String, GatewayError>>>,
    markdown_cache: CommonMarkCache,
}

impl Default for DocIntelligenceView {
    fn default() -> Self {
        Self {
            source_tab: SourceTab::Upload,
            exec_mode: ExecMode::DirectModel,
            model: DIRECT_MODELS[0].to_string(),
            instruction: DEFAULT_INSTRUCTION.to_string(),
            file: None,
            file_path: String::new(),
            pasted_text: String::new(),
            analysis: String::new(),
            status: ViewStatus::Idle,
            export_path: "analysis.md".to_string(),
            file_notice: None,
            pending: None,
            markdown_cache: CommonMarkCache::default(),
        }
    }
}

impl DocIntelligenceView {
    pub fn new() -> Self {
        Self::default()
    }

    /// The source to analyze, per the active tab.
    fn active_source(&self) -> Option<FileContent> {
        match self.source_tab {
            SourceTab::Upload => self.file.as_ref().map(|f| f.content.clone()),
            SourceTab::Paste => {
                if self.pasted_text.trim().is_empty() {
                    None
                } else {
                    Some(FileContent::Text(self.pasted_text.clone()))
                }
            }
        }
    }

    pub fn can_process(&self, registry: &AgentRegistry) -> bool {
        if self.status.is_loading() || self.active_source().is_none() {
            return false;
        }
        match self.exec_mode {
            ExecMode::DirectModel => true,
            ExecMode::Agent => registry.selected().is_some(),
        }
    }

    pub fn start_process(&mut self, client: &GeminiClient, registry: &AgentRegistry) {
        if !self.can_process(registry) {
            return;
        }
        let Some(source) = self.active_source() else {
            return;
        };

        let (model, system_instruction, direct_mode) = match self.exec_mode {
            ExecMode::DirectModel => (self.model.clone(), None, true),
            ExecMode::Agent => {
                let Some(agent) = registry.selected() else {
                    return;
                };
                (agent.model.clone(), Some(agent.system_prompt.clone()), false)
            }
        };

        let request =
            build_doc_request(&self.instruction, &source, &model, system_instruction, direct_mode);
        info!("Starting document analysis with model {}", request.model);
        self.analysis.clear();
        self.status = ViewStatus::Loading;
        self.pending = Some(client.generate_async(request));
    }

    pub fn poll(&mut self) {
        if let Some(rx) = &self.pending {
            match rx.try_recv() {
                Ok(Ok(text)) => {
                    self.analysis = text;
                    self.status = ViewStatus::Idle;
                    self.pending = None;
                }
                Ok(Err(e)) => {
                    error!("Document analysis failed: {}", e);
                    self.analysis = PROCESS_ERROR_TEXT.to_string();
                    self.status = ViewStatus::Error(e.to_string());
                    self.pending = None;
                }
                Err(TryRecvError::Empty) => {}
                Err(TryRecvError::Disconnected) => {
                    self.analysis = PROCESS_ERROR_TEXT.to_string();
                    self.status = ViewStatus::Error("worker disconnected".to_string());
                    self.pending = None;
                }
            }
        }
    }

    pub fn has_pending_work(&self) -> bool {
        self.pending.is_some()
    }

    fn load_selected_file(&mut self) {
        self.file_notice = None;
        match load_file(Path::new(&self.file_path)) {
            Ok(file) => {
                info!("Loaded {} ({} bytes) for analysis", file.name, file.size);
                self.file = Some(file);
            }
            Err(e) => {
                error!("Failed to load {}: {}", self.file_path, e);
                self.file_notice = Some(format!("Failed to load file: {}", e));
            }
        }
    }

    pub fn show(
        &mut self,
        ui: &mut Ui,
        labels: &Labels,
        client: &GeminiClient,
        registry: &mut AgentRegistry,
    ) {
        self.poll();

        ui.heading(labels.doc_intelligence);
        ui.add_space(4.0);

        ui.columns(2, |columns| {
            let ui = &mut columns[0];

            ui.horizontal(|ui| {
                ui.selectable_value(&mut self.source_tab, SourceTab::Upload, labels.upload);
                ui.selectable_value(&mut self.source_tab, SourceTab::Paste, labels.paste_text);
            });
            ui.separator();

            match self.source_tab {
                SourceTab::Upload => {
                    ui.horizontal(|ui| {
                        ui.add(
                            TextEdit::singleline(&mut self.file_path)
                                .desired_width(260.0)
                                .hint_text("path/to/document"),
                        );
                        if ui
                            .add_enabled(
                                !self.file_path.trim().is_empty(),
                                egui::Button::new(labels.upload),
                            )
                            .clicked()
                        {
                            self.load_selected_file();
                        }
                    });
                    if let Some(file) = &self.file {
                        ui.weak(format!("{} ({} bytes)", file.name, file.size));
                    }
                    if let Some(notice) = &self.file_notice {
                        ui.colored_label(egui::Color32::RED, notice);
                    }
                }
                SourceTab::Paste => {
                    ui.add(
                        TextEdit::multiline(&mut self.pasted_text)
                            .desired_rows(8)
                            .desired_width(f32::INFINITY)
                            .hint_text(labels.paste_text),
                    );
                }
            }

            ui.add_space(6.0);
            ui.horizontal(|ui| {
                ui.selectable_value(&mut self.exec_mode, ExecMode::DirectModel, "Model");
                ui.selectable_value(&mut self.exec_mode, ExecMode::Agent, labels.select_agent);
            });
            match self.exec_mode {
                ExecMode::DirectModel => {
                    egui::ComboBox::from_id_salt("doc_model")
                        .selected_text(&self.model)
                        .show_ui(ui, |ui| {
                            for model in DIRECT_MODELS {
                                ui.selectable_value(&mut self.model, model.to_string(), model);
                            }
                        });
                }
                ExecMode::Agent => {
                    let selected_name = registry
                        .selected()
                        .map(|a| a.name.clone())
                        .unwrap_or_else(|| "-".to_string());
                    let mut select: Option<String> = None;
                    egui::ComboBox::from_id_salt("doc_agent")
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
                }
            }

            ui.add_space(6.0);
            ui.label("Instruction");
            ui.add(
                TextEdit::multiline(&mut self.instruction)
                    .desired_rows(3)
                    .desired_width(f32::INFINITY),
            );

            ui.add_space(6.0);
            if self.status.is_loading() {
                ui.horizontal(|ui| {
                    ui.spinner();
                    ui.label(labels.processing);
                });
            } else if ui
                .add_enabled(self.can_process(registry), egui::Button::new(labels.process))
                .clicked()
            {
                self.start_process(client, registry);
            }

            let ui = &mut columns[1];
            ui.horizontal(|ui| {
                ui.label(RichText::new("Analysis").strong());
                if ui
                    .add_enabled(!self.analysis.is_empty(), egui::Button::new("Copy"))
                    .clicked()
                {
                    ui.ctx().copy_text(self.analysis.clone());
                }
                if ui
                    .add_enabled(!self.analysis.is_empty(), egui::Button::new(labels.download))
                    .clicked()
                {
                    match save_text_file(Path::new(&self.export_path), &self.analysis) {
                        Ok(()) => self.file_notice = Some(format!("Saved {}", self.export_path)),
                        Err(e) => {
                            error!("Failed to save analysis: {}", e);
                            self.file_notice = Some(format!("Failed to save: {}", e));
                        }
                    }
                }
                ui.add(TextEdit::singleline(&mut self.export_path).desired_width(160.0));
            });
            ScrollArea::vertical()
                .id_salt("doc_analysis")
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    if self.analysis.is_empty() {
                        ui.weak("Analysis will appear here...");
                    } else {
                        CommonMarkViewer::new().show(ui, &mut self.markdown_cache, &self.analysis);
                    }
                });
        });
    }
}
