//! Navigation and settings sidebar.

use super::app::{ActiveView, StudioApp, ThemePreference};
use crate::app::localization::{labels_for, supported_languages};
use crate::app::painter_styles;
use egui::{RichText, TextEdit, Ui};
use tracing::info;

pub fn show(app: &mut StudioApp, ui: &mut Ui) {
    let labels = labels_for(app.settings.language);

    ui.add_space(8.0);
    ui.label(RichText::new("Artistic AI Studio").heading().strong());
    ui.add_space(12.0);

    let views = [
        (ActiveView::Dashboard, labels.dashboard),
        (ActiveView::AgentStudio, labels.agent_studio),
        (ActiveView::DocIntelligence, labels.doc_intelligence),
        (ActiveView::NoteKeeper, labels.note_keeper),
    ];
    for (view, name) in views {
        if ui
            .selectable_label(app.active_view == view, name)
            .clicked()
        {
            app.active_view = view;
        }
    }

    ui.add_space(16.0);
    ui.separator();
    ui.label(RichText::new(labels.settings).small().weak());
    ui.add_space(4.0);

    ui.label(labels.style);
    ui.horizontal(|ui| {
        egui::ComboBox::from_id_salt("painter_style")
            .selected_text(app.settings.painter_style.clone())
            .width(140.0)
            .show_ui(ui, |ui| {
                for name in painter_styles::style_names() {
                    ui.selectable_value(
                        &mut app.settings.painter_style,
                        name.to_string(),
                        name,
                    );
                }
            });
        if ui.button(labels.jackpot).clicked() {
            let name = painter_styles::random_style_name();
            info!("Jackpot picked style '{}'", name);
            app.settings.painter_style = name.to_string();
        }
    });
    let style = painter_styles::resolve(&app.settings.painter_style);
    ui.label(RichText::new(style.description).small().weak());

    ui.add_space(8.0);
    ui.horizontal(|ui| {
        ui.label(labels.theme);
        ui.selectable_value(&mut app.settings.theme, ThemePreference::Light, "☀");
        ui.selectable_value(&mut app.settings.theme, ThemePreference::Dark, "🌙");
    });

    ui.horizontal(|ui| {
        ui.label(labels.language);
        for language in supported_languages() {
            ui.selectable_value(
                &mut app.settings.language,
                language,
                language.to_string(),
            );
        }
    });

    ui.add_space(8.0);
    ui.label(labels.api_key);
    if app.env_key_present {
        ui.weak("Using key from environment");
    } else {
        ui.add(
            TextEdit::singleline(&mut app.api_key_input)
                .password(true)
                .hint_text(labels.api_key_placeholder),
        );
    }
}
