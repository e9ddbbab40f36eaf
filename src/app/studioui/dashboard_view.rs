//! Dashboard: static usage metrics and charts. No gateway calls; the data
//! is a fixed sample set.

use crate::app::localization::Labels;
use crate::app::painter_styles::PainterStyle;
use egui::{Color32, Rect, RichText, Stroke, Ui, Vec2};

/// Headline metric cards.
pub const METRICS: [(&str, &str); 3] = [
    ("total_runs", "12,453"),
    ("active_agents", "8"),
    ("latency", "42ms"),
];

/// Daily run counts: (day, mobile, desktop).
pub const USAGE_SERIES: [(&str, u32, u32); 7] = [
    ("Mon", 120, 280),
    ("Tue", 150, 150),
    ("Wed", 180, 120),
    ("Thu", 80, 120),
    ("Fri", 130, 148),
    ("Sat", 90, 99),
    ("Sun", 100, 139),
];

/// Share of runs per model family, in percent.
pub const MODEL_SHARES: [(&str, u32); 3] = [("Flash", 65), ("Pro", 25), ("Image", 10)];

#[derive(Default)]
pub struct DashboardView;

impl DashboardView {
    pub fn new() -> Self {
        Self
    }

    pub fn show(&mut self, ui: &mut Ui, labels: &Labels, style: &PainterStyle) {
        ui.heading(labels.dashboard);
        ui.add_space(8.0);

        let accent = style.tokens.primary;
        let secondary = style.tokens.secondary;

        ui.columns(3, |columns| {
            let names = [labels.total_runs, labels.active_agents, labels.latency];
            for (i, ((_, value), name)) in METRICS.iter().zip(names).enumerate() {
                let ui = &mut columns[i];
                ui.group(|ui| {
                    ui.set_width(ui.available_width());
                    ui.label(RichText::new(name).small().weak());
                    ui.label(RichText::new(*value).size(28.0).strong().color(accent));
                });
            }
        });

        ui.add_space(12.0);
        ui.group(|ui| {
            ui.label(RichText::new("Weekly Usage").strong());
            ui.add_space(4.0);
            draw_usage_chart(ui, accent, secondary);
            ui.horizontal(|ui| {
                legend_swatch(ui, accent, "Mobile");
                legend_swatch(ui, secondary, "Desktop");
            });
        });

        ui.add_space(12.0);
        ui.group(|ui| {
            ui.label(RichText::new("Model Mix").strong());
            ui.add_space(4.0);
            for (name, share) in MODEL_SHARES {
                ui.horizontal(|ui| {
                    ui.label(RichText::new(name).monospace());
                    let (rect, _) = ui.allocate_exact_size(
                        Vec2::new(ui.available_width() - 48.0, 14.0),
                        egui::Sense::hover(),
                    );
                    let painter = ui.painter();
                    painter.rect_filled(rect, 3.0, ui.visuals().extreme_bg_color);
                    let filled = Rect::from_min_size(
                        rect.min,
                        Vec2::new(rect.width() * share as f32 / 100.0, rect.height()),
                    );
                    painter.rect_filled(filled, 3.0, accent);
                    ui.label(format!("{}%", share));
                });
            }
        });
    }
}

fn legend_swatch(ui: &mut Ui, color: Color32, name: &str) {
    let (rect, _) = ui.allocate_exact_size(Vec2::splat(10.0), egui::Sense::hover());
    ui.painter().rect_filled(rect, 2.0, color);
    ui.label(RichText::new(name).small());
}

/// Grouped bar chart of the weekly series, drawn directly with the painter.
fn draw_usage_chart(ui: &mut Ui, mobile_color: Color32, desktop_color: Color32) {
    let height = 140.0;
    let (rect, _) = ui.allocate_exact_size(
        Vec2::new(ui.available_width(), height),
        egui::Sense::hover(),
    );
    let painter = ui.painter();

    let max = USAGE_SERIES
        .iter()
        .flat_map(|(_, m, d)| [*m, *d])
        .max()
        .unwrap_or(1) as f32;
    let label_height = 16.0;
    let plot_height = height - label_height;
    let group_width = rect.width() / USAGE_SERIES.len() as f32;
    let bar_width = (group_width * 0.3).min(22.0);

    painter.line_segment(
        [
            rect.left_bottom() - Vec2::new(0.0, label_height),
            rect.right_bottom() - Vec2::new(0.0, label_height),
        ],
        Stroke::new(1.0, ui.visuals().weak_text_color()),
    );

    for (i, (day, mobile, desktop)) in USAGE_SERIES.iter().enumerate() {
        let center_x = rect.left() + group_width * (i as f32 + 0.5);
        let baseline = rect.bottom() - label_height;

        for (offset, value, color) in [
            (-bar_width / 2.0, *mobile, mobile_color),
            (bar_width / 2.0, *desktop, desktop_color),
        ] {
            let bar_height = plot_height * value as f32 / max;
            let bar = Rect::from_min_max(
                egui::pos2(center_x + offset - bar_width / 2.0, baseline - bar_height),
                egui::pos2(center_x + offset + bar_width / 2.0, baseline),
            );
            painter.rect_filled(bar, 2.0, color);
        }

        painter.text(
            egui::pos2(center_x, rect.bottom()),
            egui::Align2::CENTER_BOTTOM,
            day,
            egui::FontId::proportional(11.0),
            ui.visuals().weak_text_color(),
        );
    }
}
