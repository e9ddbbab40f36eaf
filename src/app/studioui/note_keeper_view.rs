//! AI Note Keeper: a Markdown note with AI transforms and a grounded chat
//! panel.
//!
//! Each transform is a prompt template over the whole document plus an
//! apply policy deciding whether the model output replaces the document or
//! is appended to it.

use super::ViewStatus;
use crate::app::gemini_client::{GatewayError, GeminiClient, GenerateRequest};
use crate::app::localization::Labels;
use chrono::{DateTime, Local};
use egui::{Color32, RichText, ScrollArea, TextEdit, Ui};
use egui_commonmark::{CommonMarkCache, CommonMarkViewer};
use std::sync::mpsc::{Receiver, TryRecvError};
use tracing::{error, info};

/// Model for every Note Keeper call.
pub const NOTE_MODEL: &str = "gemini-3-flash-preview";

pub const CHAT_ERROR_TEXT: &str = "Failed to get response.";

pub const DEFAULT_SUMMARY_PROMPT: &str = "Summarize the key points.";

pub const DEFAULT_NOTE: &str = "# Welcome to AI Note Keeper\n\nStart writing your notes here. Use the **Magic** tools to transform them.\n";

const CHAT_SYSTEM_INSTRUCTION: &str =
    "You are a helpful assistant answering questions based on the provided notes.";

/// An AI transform over the note document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NoteTransform {
    /// Reflow the document into clean Markdown; output replaces the note.
    Format,
    /// Bold and uppercase the listed keywords; output replaces the note.
    Keywords { list: String },
    /// Entity table appended to the note.
    Entities,
    /// Mermaid mindmap appended to the note.
    MindMap,
    /// Socratic critique appended to the note.
    Socratic,
    /// Free-prompt summary appended under a `### Summary` heading.
    Summary { prompt: String },
}

impl NoteTransform {
    /// Build the gateway request for this transform over `document`.
    pub fn request(&self, document: &str) -> GenerateRequest {
        let (prompt, system_instruction) = match self {
            NoteTransform::Format => (
                format!(
                    "Format the following text into clean, structured Markdown. \
                     Improve headings, lists, and spacing.\n\n{}",
                    document
                ),
                None,
            ),
            NoteTransform::Keywords { list } => (
                format!(
                    "Identify these keywords: [{}] in the text and make them **BOLD** \
                     and uppercase. Return the full updated markdown.\n\n{}",
                    list, document
                ),
                None,
            ),
            NoteTransform::Entities => (
                format!(
                    "Analyze the text and identify up to 20 key entities (people, places, \
                     concepts, dates). Create a Markdown table with columns: Entity, Type, \
                     Context/Description. Append this table to the end of the text.\n\n{}",
                    document
                ),
                None,
            ),
            NoteTransform::MindMap => (
                format!(
                    "Create a Mermaid.js Mindmap based on this text. Return only the \
                     mermaid code block.\n\n{}",
                    document
                ),
                None,
            ),
            NoteTransform::Socratic => (
                format!(
                    "Act as a Socratic philosopher. Critique the arguments or points in \
                     this text. Raise 3 challenging questions and identify one potential \
                     logical fallacy or blind spot. Append this critique to the text.\n\n{}",
                    document
                ),
                None,
            ),
            NoteTransform::Summary { prompt } => (
                format!("{}\n\nText:\n{}", prompt, document),
                Some("You are a summarizer.".to_string()),
            ),
        };
        GenerateRequest {
            model: NOTE_MODEL.to_string(),
            prompt,
            system_instruction,
            inline_data: None,
        }
    }

    /// Fold the model output back into the document per this transform's
    /// policy.
    pub fn apply(&self, document: &mut String, output: &str) {
        match self {
            NoteTransform::Format | NoteTransform::Keywords { .. } => {
                *document = output.to_string();
            }
            NoteTransform::Entities | NoteTransform::MindMap | NoteTransform::Socratic => {
                document.push_str("\n\n");
                document.push_str(output);
            }
            NoteTransform::Summary { .. } => {
                document.push_str("\n\n### Summary\n");
                document.push_str(output);
            }
        }
    }
}

/// Build the request for a chat question grounded in the note.
pub fn chat_request(document: &str, question: &str) -> GenerateRequest {
    GenerateRequest {
        model: NOTE_MODEL.to_string(),
        prompt: format!("Context:\n{}\n\nQuestion: {}", document, question),
        system_instruction: Some(CHAT_SYSTEM_INSTRUCTION.to_string()),
        inline_data: None,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatRole {
    User,
    Assistant,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatTurn {
    pub role: ChatRole,
    pub text: String,
    pub timestamp: DateTime<Local>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditorTab {
    #[default]
    Edit,
    Preview,
}

enum PendingKind {
    Transform(NoteTransform),
    Chat,
}

pub struct NoteKeeperView {
    pub document: String,
    pub editor_tab: EditorTab,
    pub status: ViewStatus,

    pub keyword_list: String,
    pub keyword_color: Color32,
    pub summary_prompt: String,

    pub chat_input: String,
    pub chat_history: Vec<ChatTurn>,

    pending: Option<(PendingKind, Receiver<Result<String, GatewayError>>)>,
    markdown_cache: CommonMarkCache,
}

impl Default for NoteKeeperView {
    fn default() -> Self {
        Self {
            document: DEFAULT_NOTE.to_string(),
            editor_tab: EditorTab::Edit,
            status: ViewStatus::Idle,
            keyword_list: String::new(),
            keyword_color: Color32::YELLOW,
            summary_prompt: DEFAULT_SUMMARY_PROMPT.to_string(),
            chat_input: String::new(),
            chat_history: Vec::new(),
            pending: None,
            markdown_cache: CommonMarkCache::default(),
        }
    }
}

impl NoteKeeperView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a transform; one gateway call at a time.
    pub fn start_transform(&mut self, client: &GeminiClient, transform: NoteTransform) {
        if self.status.is_loading() {
            return;
        }
        info!("Starting note transform: {:?}", transform);
        let rx = client.generate_async(transform.request(&self.document));
        self.status = ViewStatus::Loading;
        self.pending = Some((PendingKind::Transform(transform), rx));
    }

    /// Send the current chat input as a question grounded in the note.
    pub fn send_chat(&mut self, client: &GeminiClient) {
        let question = self.chat_input.trim().to_string();
        if question.is_empty() || self.status.is_loading() {
            return;
        }
        self.chat_history.push(ChatTurn {
            role: ChatRole::User,
            text: question.clone(),
            timestamp: Local::now(),
        });
        self.chat_input.clear();
        let rx = client.generate_async(chat_request(&self.document, &question));
        self.status = ViewStatus::Loading;
        self.pending = Some((PendingKind::Chat, rx));
    }

    pub fn poll(&mut self) {
        let Some((kind, rx)) = &self.pending else {
            return;
        };
        let outcome = match rx.try_recv() {
            Ok(result) => result,
            Err(TryRecvError::Empty) => return,
            Err(TryRecvError::Disconnected) => {
                Err(GatewayError::Service("worker disconnected".to_string()))
            }
        };
        match (kind, outcome) {
            (PendingKind::Transform(transform), Ok(output)) => {
                transform.apply(&mut self.document, &output);
                self.status = ViewStatus::Idle;
            }
            (PendingKind::Transform(_), Err(e)) => {
                error!("Note transform failed: {}", e);
                self.status = ViewStatus::Error(e.to_string());
            }
            (PendingKind::Chat, Ok(answer)) => {
                self.chat_history.push(ChatTurn {
                    role: ChatRole::Assistant,
                    text: answer,
                    timestamp: Local::now(),
                });
                self.status = ViewStatus::Idle;
            }
            (PendingKind::Chat, Err(e)) => {
                error!("Note chat failed: {}", e);
                self.chat_history.push(ChatTurn {
                    role: ChatRole::Assistant,
                    text: CHAT_ERROR_TEXT.to_string(),
                    timestamp: Local::now(),
                });
                self.status = ViewStatus::Error(e.to_string());
            }
        }
        self.pending = None;
    }

    pub fn has_pending_work(&self) -> bool {
        self.pending.is_some()
    }

    pub fn show(&mut self, ui: &mut Ui, labels: &Labels, client: &GeminiClient) {
        self.poll();

        ui.heading(labels.note_keeper);
        ui.add_space(4.0);

        ui.columns(2, |columns| {
            let ui = &mut columns[0];
            ui.horizontal(|ui| {
                ui.selectable_value(&mut self.editor_tab, EditorTab::Edit, labels.edit);
                ui.selectable_value(&mut self.editor_tab, EditorTab::Preview, labels.preview);
                if self.status.is_loading() {
                    ui.spinner();
                    ui.label(labels.processing);
                }
            });
            ui.separator();
            ScrollArea::vertical()
                .id_salt("note_editor")
                .auto_shrink([false, false])
                .show(ui, |ui| match self.editor_tab {
                    EditorTab::Edit => {
                        ui.add(
                            TextEdit::multiline(&mut self.document)
                                .desired_rows(24)
                                .desired_width(f32::INFINITY),
                        );
                    }
                    EditorTab::Preview => {
                        CommonMarkViewer::new().show(ui, &mut self.markdown_cache, &self.document);
                    }
                });

            let ui = &mut columns[1];
            self.show_magic_panel(ui, labels, client);
            ui.separator();
            self.show_chat_panel(ui, labels, client);
        });
    }

    fn show_magic_panel(&mut self, ui: &mut Ui, labels: &Labels, client: &GeminiClient) {
        ui.label(RichText::new(labels.magic).strong());
        let busy = self.status.is_loading();

        ui.horizontal_wrapped(|ui| {
            if ui.add_enabled(!busy, egui::Button::new(labels.format)).clicked() {
                self.start_transform(client, NoteTransform::Format);
            }
            if ui.add_enabled(!busy, egui::Button::new(labels.entities)).clicked() {
                self.start_transform(client, NoteTransform::Entities);
            }
            if ui.add_enabled(!busy, egui::Button::new("Mind Map")).clicked() {
                self.start_transform(client, NoteTransform::MindMap);
            }
            if ui.add_enabled(!busy, egui::Button::new("Socratic")).clicked() {
                self.start_transform(client, NoteTransform::Socratic);
            }
        });

        ui.horizontal(|ui| {
            ui.label(labels.keywords);
            ui.add(
                TextEdit::singleline(&mut self.keyword_list)
                    .desired_width(160.0)
                    .hint_text("comma, separated"),
            );
            ui.color_edit_button_srgba(&mut self.keyword_color);
            let ready = !busy && !self.keyword_list.trim().is_empty();
            if ui.add_enabled(ready, egui::Button::new(labels.keywords)).clicked() {
                self.start_transform(
                    client,
                    NoteTransform::Keywords {
                        list: self.keyword_list.clone(),
                    },
                );
            }
        });

        ui.horizontal(|ui| {
            ui.label(labels.summary);
            ui.add(TextEdit::singleline(&mut self.summary_prompt).desired_width(200.0));
            if ui.add_enabled(!busy, egui::Button::new(labels.summary)).clicked() {
                self.start_transform(
                    client,
                    NoteTransform::Summary {
                        prompt: self.summary_prompt.clone(),
                    },
                );
            }
        });

        if let ViewStatus::Error(msg) = &self.status {
            ui.colored_label(Color32::RED, msg);
        }
    }

    fn show_chat_panel(&mut self, ui: &mut Ui, labels: &Labels, client: &GeminiClient) {
        ui.label(RichText::new(labels.chat).strong());
        ScrollArea::vertical()
            .id_salt("note_chat")
            .max_height(220.0)
            .auto_shrink([false, false])
            .stick_to_bottom(true)
            .show(ui, |ui| {
                for turn in &self.chat_history {
                    let who = match turn.role {
                        ChatRole::User => "You",
                        ChatRole::Assistant => "AI",
                    };
                    ui.label(
                        RichText::new(format!(
                            "{} · {}",
                            who,
                            turn.timestamp.format("%H:%M:%S")
                        ))
                        .small()
                        .weak(),
                    );
                    ui.label(&turn.text);
                    ui.add_space(4.0);
                }
            });
        ui.horizontal(|ui| {
            let response = ui.add(
                TextEdit::singleline(&mut self.chat_input)
                    .desired_width(240.0)
                    .hint_text("Ask about your notes..."),
            );
            let submitted =
                response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
            if submitted || ui.button(labels.chat).clicked() {
                self.send_chat(client);
            }
        });
    }
}
