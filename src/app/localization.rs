//! Localized UI label tables.
//!
//! Every user-facing string lives here as a field of [`Labels`], with one
//! constant table per supported language. Because the table is a plain struct
//! rather than a string-keyed map, a missing label is a compile error, not a
//! runtime fallback.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Language {
    #[default]
    En,
    Tc,
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Language::En => write!(f, "EN"),
            Language::Tc => write!(f, "TC"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Labels {
    pub dashboard: &'static str,
    pub agent_studio: &'static str,
    pub doc_intelligence: &'static str,
    pub note_keeper: &'static str,
    pub total_runs: &'static str,
    pub active_agents: &'static str,
    pub latency: &'static str,
    pub run: &'static str,
    pub manage: &'static str,
    pub select_agent: &'static str,
    pub prompt: &'static str,
    pub execute: &'static str,
    pub processing: &'static str,
    pub upload: &'static str,
    pub paste_text: &'static str,
    pub process: &'static str,
    pub repair: &'static str,
    pub save: &'static str,
    pub download: &'static str,
    pub settings: &'static str,
    pub style: &'static str,
    pub theme: &'static str,
    pub language: &'static str,
    pub jackpot: &'static str,
    pub api_key: &'static str,
    pub api_key_placeholder: &'static str,
    pub keywords: &'static str,
    pub entities: &'static str,
    pub summary: &'static str,
    pub chat: &'static str,
    pub magic: &'static str,
    pub format: &'static str,
    pub skill_md: &'static str,
    pub preview: &'static str,
    pub edit: &'static str,
}

pub const EN: Labels = Labels {
    dashboard: "Dashboard",
    agent_studio: "Agent Studio",
    doc_intelligence: "Doc Intelligence",
    note_keeper: "AI Note Keeper",
    total_runs: "Total Runs",
    active_agents: "Active Agents",
    latency: "Latency",
    run: "Run",
    manage: "Manage",
    select_agent: "Select Agent",
    prompt: "Enter your prompt...",
    execute: "Execute",
    processing: "Processing...",
    upload: "Upload File",
    paste_text: "Paste Text",
    process: "Process",
    repair: "AI Repair",
    save: "Save",
    download: "Download",
    settings: "Settings",
    style: "Artistic Style",
    theme: "Theme",
    language: "Language",
    jackpot: "Jackpot",
    api_key: "API Key",
    api_key_placeholder: "Enter Gemini API Key",
    keywords: "Keywords",
    entities: "Entities",
    summary: "Summary",
    chat: "Chat",
    magic: "Magic",
    format: "Format",
    skill_md: "SKILL.md",
    preview: "Preview",
    edit: "Edit",
};

pub const TC: Labels = Labels {
    dashboard: "儀表板",
    agent_studio: "代理工作室",
    doc_intelligence: "文檔智能",
    note_keeper: "AI 筆記助手",
    total_runs: "總運行次數",
    active_agents: "活躍代理",
    latency: "延遲",
    run: "運行",
    manage: "管理",
    select_agent: "選擇代理",
    prompt: "輸入提示...",
    execute: "執行",
    processing: "處理中...",
    upload: "上傳文件",
    paste_text: "貼上文字",
    process: "處理",
    repair: "AI 修復",
    save: "儲存",
    download: "下載",
    settings: "設定",
    style: "藝術風格",
    theme: "主題",
    language: "語言",
    jackpot: "手氣不錯",
    api_key: "API 金鑰",
    api_key_placeholder: "輸入 Gemini API 金鑰",
    keywords: "關鍵字",
    entities: "實體",
    summary: "摘要",
    chat: "聊天",
    magic: "魔法",
    format: "格式化",
    skill_md: "SKILL.md",
    preview: "預覽",
    edit: "編輯",
};

pub fn labels_for(language: Language) -> &'static Labels {
    match language {
        Language::En => &EN,
        Language::Tc => &TC,
    }
}

pub fn supported_languages() -> [Language; 2] {
    [Language::En, Language::Tc]
}

impl Labels {
    /// All key/value pairs, used by tests to assert every label is non-empty
    /// in every language.
    pub fn entries(&self) -> Vec<(&'static str, &'static str)> {
        vec![
            ("dashboard", self.dashboard),
            ("agent_studio", self.agent_studio),
            ("doc_intelligence", self.doc_intelligence),
            ("note_keeper", self.note_keeper),
            ("total_runs", self.total_runs),
            ("active_agents", self.active_agents),
            ("latency", self.latency),
            ("run", self.run),
            ("manage", self.manage),
            ("select_agent", self.select_agent),
            ("prompt", self.prompt),
            ("execute", self.execute),
            ("processing", self.processing),
            ("upload", self.upload),
            ("paste_text", self.paste_text),
            ("process", self.process),
            ("repair", self.repair),
            ("save", self.save),
            ("download", self.download),
            ("settings", self.settings),
            ("style", self.style),
            ("theme", self.theme),
            ("language", self.language),
            ("jackpot", self.jackpot),
            ("api_key", self.api_key),
            ("api_key_placeholder", self.api_key_placeholder),
            ("keywords", self.keywords),
            ("entities", self.entities),
            ("summary", self.summary),
            ("chat", self.chat),
            ("magic", self.magic),
            ("format", self.format),
            ("skill_md", self.skill_md),
            ("preview", self.preview),
            ("edit", self.edit),
        ]
    }
}
