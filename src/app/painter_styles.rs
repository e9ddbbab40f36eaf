//! Painter style registry.
//!
//! Every visual theme in the application is a "painter style": a named bundle
//! of color tokens, a corner radius and a font class, inspired by a famous
//! painter. Styles are static data; the only behavior is lookup with a
//! guaranteed fallback to the Default entry and a uniform random pick for the
//! jackpot button.

use egui::{Color32, CornerRadius, FontFamily, Stroke};
use rand::Rng;

pub const DEFAULT_STYLE: &str = "Default";

/// Which font family a style renders with.
///
/// Styles are authored against sans/serif/mono/hand-drawn faces; with egui's
/// embedded fonts everything but monospace maps to the proportional family.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontClass {
    Sans,
    Serif,
    Mono,
    Artistic,
}

impl FontClass {
    pub fn family(&self) -> FontFamily {
        match self {
            FontClass::Mono => FontFamily::Monospace,
            _ => FontFamily::Proportional,
        }
    }
}

/// The full color vocabulary a style must provide. Radius is in points.
#[derive(Debug, Clone, PartialEq)]
pub struct StyleTokens {
    pub background: Color32,
    pub foreground: Color32,
    pub primary: Color32,
    pub primary_foreground: Color32,
    pub secondary: Color32,
    pub secondary_foreground: Color32,
    pub card: Color32,
    pub card_foreground: Color32,
    pub muted: Color32,
    pub muted_foreground: Color32,
    pub border: Color32,
    pub radius: f32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PainterStyle {
    pub name: &'static str,
    pub description: &'static str,
    pub font: FontClass,
    pub tokens: StyleTokens,
}

impl PainterStyle {
    /// Whether this style's canvas is dark enough that light-theme chrome
    /// would clash with it.
    pub fn is_dark(&self) -> bool {
        let bg = self.tokens.background;
        let luminance =
            0.299 * bg.r() as f32 + 0.587 * bg.g() as f32 + 0.114 * bg.b() as f32;
        luminance < 128.0
    }
}

fn rgb(r: u8, g: u8, b: u8) -> Color32 {
    Color32::from_rgb(r, g, b)
}

fn rgba(r: u8, g: u8, b: u8, a: u8) -> Color32 {
    Color32::from_rgba_unmultiplied(r, g, b, a)
}

lazy_static::lazy_static! {
    /// All painter styles in declaration order. The first entry is the
    /// Default style used as the lookup fallback.
    pub static ref PAINTER_STYLES: Vec<PainterStyle> = vec![
        PainterStyle {
            name: "Default",
            description: "Clean, modern interface",
            font: FontClass::Sans,
            tokens: StyleTokens {
                background: rgb(0xf8, 0xfa, 0xfc),
                foreground: rgb(0x0f, 0x17, 0x2a),
                primary: rgb(0x25, 0x63, 0xeb),
                primary_foreground: rgb(0xff, 0xff, 0xff),
                secondary: rgb(0xe2, 0xe8, 0xf0),
                secondary_foreground: rgb(0x0f, 0x17, 0x2a),
                card: rgb(0xff, 0xff, 0xff),
                card_foreground: rgb(0x0f, 0x17, 0x2a),
                muted: rgb(0xf1, 0xf5, 0xf9),
                muted_foreground: rgb(0x64, 0x74, 0x8b),
                border: rgb(0xe2, 0xe8, 0xf0),
                radius: 8.0,
            },
        },
        PainterStyle {
            name: "Van Gogh",
            description: "Post-Impressionist turbulence",
            font: FontClass::Serif,
            tokens: StyleTokens {
                background: rgb(0xee, 0xcf, 0xa1),
                foreground: rgb(0x1a, 0x23, 0x7e),
                primary: rgb(0xfd, 0xd8, 0x35),
                primary_foreground: rgb(0x1a, 0x23, 0x7e),
                secondary: rgb(0x82, 0xb1, 0xff),
                secondary_foreground: rgb(0x00, 0x00, 0x00),
                card: rgba(0xff, 0xff, 0xff, 153),
                card_foreground: rgb(0x1a, 0x23, 0x7e),
                muted: rgb(0xff, 0xec, 0xb3),
                muted_foreground: rgb(0x5c, 0x6b, 0xc0),
                border: rgb(0xfd, 0xd8, 0x35),
                radius: 24.0,
            },
        },
        PainterStyle {
            name: "Picasso",
            description: "Cubist geometry",
            font: FontClass::Mono,
            tokens: StyleTokens {
                background: rgb(0xf0, 0xf0, 0xf0),
                foreground: rgb(0x00, 0x00, 0x00),
                primary: rgb(0xe6, 0x39, 0x46),
                primary_foreground: rgb(0xff, 0xff, 0xff),
                secondary: rgb(0x45, 0x7b, 0x9d),
                secondary_foreground: rgb(0xff, 0xff, 0xff),
                card: rgb(0xff, 0xff, 0xff),
                card_foreground: rgb(0x00, 0x00, 0x00),
                muted: rgb(0xa8, 0xda, 0xdc),
                muted_foreground: rgb(0x1d, 0x35, 0x57),
                border: rgb(0x00, 0x00, 0x00),
                radius: 0.0, // Sharp edges
            },
        },
        PainterStyle {
            name: "Da Vinci",
            description: "Renaissance sketchbook",
            font: FontClass::Artistic,
            tokens: StyleTokens {
                background: rgb(0xf4, 0xf1, 0xea),
                foreground: rgb(0x3e, 0x27, 0x23),
                primary: rgb(0x8d, 0x6e, 0x63),
                primary_foreground: rgb(0xff, 0xff, 0xff),
                secondary: rgb(0xd7, 0xcc, 0xc8),
                secondary_foreground: rgb(0x3e, 0x27, 0x23),
                card: rgb(0xff, 0xfb, 0xf0),
                card_foreground: rgb(0x3e, 0x27, 0x23),
                muted: rgb(0xef, 0xeb, 0xe9),
                muted_foreground: rgb(0x5d, 0x40, 0x37),
                border: rgb(0x8d, 0x6e, 0x63),
                radius: 4.0,
            },
        },
        PainterStyle {
            name: "Monet",
            description: "Impressionist softness",
            font: FontClass::Serif,
            tokens: StyleTokens {
                background: rgb(0xe0, 0xf7, 0xfa),
                foreground: rgb(0x00, 0x60, 0x64),
                primary: rgb(0x81, 0xd4, 0xfa),
                primary_foreground: rgb(0x00, 0x4d, 0x40),
                secondary: rgb(0xb2, 0xdf, 0xdb),
                secondary_foreground: rgb(0x00, 0x4d, 0x40),
                card: rgba(0xff, 0xff, 0xff, 179),
                card_foreground: rgb(0x00, 0x60, 0x64),
                muted: rgb(0xe0, 0xf2, 0xf1),
                muted_foreground: rgb(0x00, 0x83, 0x8f),
                border: rgb(0x80, 0xde, 0xea),
                radius: 16.0,
            },
        },
        PainterStyle {
            name: "Rembrandt",
            description: "Chiaroscuro depth",
            font: FontClass::Serif,
            tokens: StyleTokens {
                background: rgb(0x21, 0x15, 0x10),
                foreground: rgb(0xef, 0xeb, 0xe9),
                primary: rgb(0xff, 0xb3, 0x00),
                primary_foreground: rgb(0x21, 0x15, 0x10),
                secondary: rgb(0x3e, 0x27, 0x23),
                secondary_foreground: rgb(0xef, 0xeb, 0xe9),
                card: rgb(0x3e, 0x27, 0x23),
                card_foreground: rgb(0xef, 0xeb, 0xe9),
                muted: rgb(0x4e, 0x34, 0x2e),
                muted_foreground: rgb(0xa1, 0x88, 0x7f),
                border: rgb(0x5d, 0x40, 0x37),
                radius: 8.0,
            },
        },
        PainterStyle {
            name: "Warhol",
            description: "Pop Art explosion",
            font: FontClass::Sans,
            tokens: StyleTokens {
                background: rgb(0xff, 0xff, 0x00),
                foreground: rgb(0x00, 0x00, 0x00),
                primary: rgb(0xff, 0x00, 0xff),
                primary_foreground: rgb(0xff, 0xff, 0xff),
                secondary: rgb(0x00, 0xff, 0xff),
                secondary_foreground: rgb(0x00, 0x00, 0x00),
                card: rgb(0xff, 0xff, 0xff),
                card_foreground: rgb(0x00, 0x00, 0x00),
                muted: rgb(0x00, 0xff, 0x00),
                muted_foreground: rgb(0x00, 0x00, 0x00),
                border: rgb(0x00, 0x00, 0x00),
                radius: 24.0,
            },
        },
        PainterStyle {
            name: "Dalí",
            description: "Surrealist dreams",
            font: FontClass::Artistic,
            tokens: StyleTokens {
                background: rgb(0xff, 0xe0, 0xb2),
                foreground: rgb(0x3e, 0x27, 0x23),
                primary: rgb(0xef, 0x6c, 0x00),
                primary_foreground: rgb(0xff, 0xff, 0xff),
                secondary: rgb(0x81, 0xd4, 0xfa),
                secondary_foreground: rgb(0x01, 0x57, 0x9b),
                card: rgba(0xff, 0xff, 0xff, 128),
                card_foreground: rgb(0x3e, 0x27, 0x23),
                muted: rgb(0xff, 0xcc, 0x80),
                muted_foreground: rgb(0xe6, 0x51, 0x00),
                border: rgb(0xff, 0x98, 0x00),
                radius: 32.0, // Very round
            },
        },
        PainterStyle {
            name: "Klimt",
            description: "Gold leaf and patterns",
            font: FontClass::Serif,
            tokens: StyleTokens {
                background: rgb(0x26, 0x26, 0x26),
                foreground: rgb(0xd4, 0xaf, 0x37),
                primary: rgb(0xd4, 0xaf, 0x37),
                primary_foreground: rgb(0x00, 0x00, 0x00),
                secondary: rgb(0x5d, 0x40, 0x37),
                secondary_foreground: rgb(0xd4, 0xaf, 0x37),
                card: rgb(0x1a, 0x1a, 0x1a),
                card_foreground: rgb(0xd4, 0xaf, 0x37),
                muted: rgb(0x33, 0x33, 0x33),
                muted_foreground: rgb(0xbc, 0xaa, 0xa4),
                border: rgb(0xd4, 0xaf, 0x37),
                radius: 4.0,
            },
        },
        PainterStyle {
            name: "Mondrian",
            description: "De Stijl grid",
            font: FontClass::Sans,
            tokens: StyleTokens {
                background: rgb(0xff, 0xff, 0xff),
                foreground: rgb(0x00, 0x00, 0x00),
                primary: rgb(0xff, 0x00, 0x00),
                primary_foreground: rgb(0xff, 0xff, 0xff),
                secondary: rgb(0x00, 0x00, 0xff),
                secondary_foreground: rgb(0xff, 0xff, 0xff),
                card: rgb(0xff, 0xff, 0xff),
                card_foreground: rgb(0x00, 0x00, 0x00),
                muted: rgb(0xff, 0xff, 0x00),
                muted_foreground: rgb(0x00, 0x00, 0x00),
                border: rgb(0x00, 0x00, 0x00),
                radius: 0.0,
            },
        },
        PainterStyle {
            name: "Pollock",
            description: "Abstract expressionist chaos",
            font: FontClass::Mono,
            tokens: StyleTokens {
                background: rgb(0xf5, 0xf5, 0xf5),
                foreground: rgb(0x21, 0x21, 0x21),
                primary: rgb(0x21, 0x21, 0x21),
                primary_foreground: rgb(0xff, 0xff, 0xff),
                secondary: rgb(0x9e, 0x9e, 0x9e),
                secondary_foreground: rgb(0x00, 0x00, 0x00),
                card: rgb(0xee, 0xee, 0xee),
                card_foreground: rgb(0x00, 0x00, 0x00),
                muted: rgb(0xe0, 0xe0, 0xe0),
                muted_foreground: rgb(0x61, 0x61, 0x61),
                border: rgb(0xbd, 0xbd, 0xbd),
                radius: 12.0,
            },
        },
        PainterStyle {
            name: "Hokusai",
            description: "Ukiyo-e woodblock",
            font: FontClass::Serif,
            tokens: StyleTokens {
                background: rgb(0xe3, 0xf2, 0xfd),
                foreground: rgb(0x0d, 0x47, 0xa1),
                primary: rgb(0x15, 0x65, 0xc0),
                primary_foreground: rgb(0xff, 0xff, 0xff),
                secondary: rgb(0xbb, 0xde, 0xfb),
                secondary_foreground: rgb(0x0d, 0x47, 0xa1),
                card: rgb(0xff, 0xff, 0xff),
                card_foreground: rgb(0x0d, 0x47, 0xa1),
                muted: rgb(0xe1, 0xf5, 0xfe),
                muted_foreground: rgb(0x01, 0x57, 0x9b),
                border: rgb(0x15, 0x65, 0xc0),
                radius: 8.0,
            },
        },
        PainterStyle {
            name: "Kahlo",
            description: "Mexican vivid symbolism",
            font: FontClass::Sans,
            tokens: StyleTokens {
                background: rgb(0xe8, 0xf5, 0xe9),
                foreground: rgb(0x1b, 0x5e, 0x20),
                primary: rgb(0xc6, 0x28, 0x28),
                primary_foreground: rgb(0xff, 0xff, 0xff),
                secondary: rgb(0xfb, 0xc0, 0x2d),
                secondary_foreground: rgb(0x1b, 0x5e, 0x20),
                card: rgb(0xff, 0xff, 0xff),
                card_foreground: rgb(0x1b, 0x5e, 0x20),
                muted: rgb(0xc8, 0xe6, 0xc9),
                muted_foreground: rgb(0x2e, 0x7d, 0x32),
                border: rgb(0xc6, 0x28, 0x28),
                radius: 16.0,
            },
        },
        PainterStyle {
            name: "Matisse",
            description: "Fauvist cutouts",
            font: FontClass::Sans,
            tokens: StyleTokens {
                background: rgb(0xff, 0xf9, 0xc4),
                foreground: rgb(0xb7, 0x1c, 0x1c),
                primary: rgb(0x1a, 0x23, 0x7e),
                primary_foreground: rgb(0xff, 0xff, 0xff),
                secondary: rgb(0xf5, 0x7f, 0x17),
                secondary_foreground: rgb(0xff, 0xff, 0xff),
                card: rgb(0xff, 0xff, 0xff),
                card_foreground: rgb(0xb7, 0x1c, 0x1c),
                muted: rgb(0xff, 0xec, 0xb3),
                muted_foreground: rgb(0xbf, 0x36, 0x0c),
                border: rgb(0x1a, 0x23, 0x7e),
                radius: 40.0, // Organic shapes
            },
        },
        PainterStyle {
            name: "O'Keeffe",
            description: "Modernist macro",
            font: FontClass::Sans,
            tokens: StyleTokens {
                background: rgb(0xfc, 0xe4, 0xec),
                foreground: rgb(0x88, 0x0e, 0x4f),
                primary: rgb(0xd8, 0x1b, 0x60),
                primary_foreground: rgb(0xff, 0xff, 0xff),
                secondary: rgb(0xf8, 0xbb, 0xd0),
                secondary_foreground: rgb(0x88, 0x0e, 0x4f),
                card: rgb(0xff, 0xff, 0xff),
                card_foreground: rgb(0x88, 0x0e, 0x4f),
                muted: rgb(0xf4, 0x8f, 0xb1),
                muted_foreground: rgb(0xad, 0x14, 0x57),
                border: rgb(0xf0, 0x62, 0x92),
                radius: 24.0,
            },
        },
        PainterStyle {
            name: "Basquiat",
            description: "Neo-expressionist street",
            font: FontClass::Mono,
            tokens: StyleTokens {
                background: rgb(0x12, 0x12, 0x12),
                foreground: rgb(0xff, 0xff, 0xff),
                primary: rgb(0xff, 0x3d, 0x00),
                primary_foreground: rgb(0x00, 0x00, 0x00),
                secondary: rgb(0xff, 0xff, 0x00),
                secondary_foreground: rgb(0x00, 0x00, 0x00),
                card: rgb(0x21, 0x21, 0x21),
                card_foreground: rgb(0xff, 0xff, 0xff),
                muted: rgb(0x42, 0x42, 0x42),
                muted_foreground: rgb(0xe0, 0xe0, 0xe0),
                border: rgb(0xff, 0xff, 0xff), // Chalk-like
                radius: 3.0,
            },
        },
        PainterStyle {
            name: "Munch",
            description: "Expressionist angst",
            font: FontClass::Serif,
            tokens: StyleTokens {
                background: rgb(0x37, 0x47, 0x4f),
                foreground: rgb(0xec, 0xef, 0xf1),
                primary: rgb(0xff, 0x70, 0x43),
                primary_foreground: rgb(0x26, 0x32, 0x38),
                secondary: rgb(0x54, 0x6e, 0x7a),
                secondary_foreground: rgb(0xec, 0xef, 0xf1),
                card: rgb(0x45, 0x5a, 0x64),
                card_foreground: rgb(0xec, 0xef, 0xf1),
                muted: rgb(0x78, 0x90, 0x9c),
                muted_foreground: rgb(0xcf, 0xd8, 0xdc),
                border: rgb(0xff, 0x70, 0x43),
                radius: 12.0,
            },
        },
        PainterStyle {
            name: "Hopper",
            description: "Realist solitude",
            font: FontClass::Sans,
            tokens: StyleTokens {
                background: rgb(0x26, 0x32, 0x38),
                foreground: rgb(0xcf, 0xd8, 0xdc),
                primary: rgb(0x00, 0x89, 0x7b),
                primary_foreground: rgb(0xff, 0xff, 0xff),
                secondary: rgb(0x45, 0x5a, 0x64),
                secondary_foreground: rgb(0xff, 0xff, 0xff),
                card: rgb(0x37, 0x47, 0x4f),
                card_foreground: rgb(0xcf, 0xd8, 0xdc),
                muted: rgb(0x54, 0x6e, 0x7a),
                muted_foreground: rgb(0xb0, 0xbe, 0xc5),
                border: rgb(0x00, 0x89, 0x7b),
                radius: 4.0,
            },
        },
        PainterStyle {
            name: "Kandinsky",
            description: "Abstract spiritual",
            font: FontClass::Sans,
            tokens: StyleTokens {
                background: rgb(0xff, 0xf3, 0xe0),
                foreground: rgb(0x21, 0x21, 0x21),
                primary: rgb(0x30, 0x4f, 0xfe),
                primary_foreground: rgb(0xff, 0xff, 0xff),
                secondary: rgb(0xd5, 0x00, 0xf9),
                secondary_foreground: rgb(0xff, 0xff, 0xff),
                card: rgb(0xff, 0xff, 0xff),
                card_foreground: rgb(0x21, 0x21, 0x21),
                muted: rgb(0xff, 0xe0, 0xb2),
                muted_foreground: rgb(0xe6, 0x51, 0x00),
                border: rgb(0x21, 0x21, 0x21),
                radius: 20.0,
            },
        },
        PainterStyle {
            name: "Futurism",
            description: "Dynamic speed",
            font: FontClass::Sans,
            tokens: StyleTokens {
                background: rgb(0xec, 0xef, 0xf1),
                foreground: rgb(0x26, 0x32, 0x38),
                primary: rgb(0xd5, 0x00, 0x00),
                primary_foreground: rgb(0xff, 0xff, 0xff),
                secondary: rgb(0x29, 0x62, 0xff),
                secondary_foreground: rgb(0xff, 0xff, 0xff),
                card: rgb(0xff, 0xff, 0xff),
                card_foreground: rgb(0x26, 0x32, 0x38),
                muted: rgb(0xcf, 0xd8, 0xdc),
                muted_foreground: rgb(0x45, 0x5a, 0x64),
                border: rgb(0xd5, 0x00, 0x00),
                radius: 0.0, // Angular
            },
        },
    ];
}

/// Look up a style by name, falling back to the Default style for unknown
/// keys. Never panics, never returns nothing.
pub fn resolve(key: &str) -> &'static PainterStyle {
    PAINTER_STYLES
        .iter()
        .find(|s| s.name == key)
        .unwrap_or(&PAINTER_STYLES[0])
}

/// Style names in declaration order, for the selector dropdown.
pub fn style_names() -> Vec<&'static str> {
    PAINTER_STYLES.iter().map(|s| s.name).collect()
}

/// Jackpot: pick a style name uniformly at random. Every entry is a valid
/// outcome, including whichever style is currently active.
pub fn random_style_name() -> &'static str {
    let idx = rand::thread_rng().gen_range(0..PAINTER_STYLES.len());
    PAINTER_STYLES[idx].name
}

/// Apply a painter style to the egui context.
///
/// The style is rebuilt from scratch on every call: we start from the stock
/// light or dark visuals and overwrite every token, so switching styles is
/// idempotent and nothing leaks from the previously active style.
pub fn apply_theme(style: &PainterStyle, dark: bool, ctx: &egui::Context) {
    let t = &style.tokens;
    let mut egui_style = egui::Style::default();

    let mut visuals = if dark || style.is_dark() {
        egui::Visuals::dark()
    } else {
        egui::Visuals::light()
    };

    let radius = CornerRadius::same(t.radius.clamp(0.0, 255.0) as u8);

    visuals.override_text_color = Some(t.foreground);
    visuals.panel_fill = t.background;
    visuals.window_fill = t.card;
    visuals.window_stroke = Stroke::new(1.0, t.border);
    visuals.window_corner_radius = radius;
    visuals.extreme_bg_color = t.muted;
    visuals.faint_bg_color = t.muted;
    visuals.hyperlink_color = t.primary;
    visuals.warn_fg_color = t.muted_foreground;
    visuals.error_fg_color = t.primary;

    visuals.selection.bg_fill = t.primary.gamma_multiply(0.35);
    visuals.selection.stroke = Stroke::new(1.0, t.primary);

    let widgets = &mut visuals.widgets;
    widgets.noninteractive.bg_fill = t.card;
    widgets.noninteractive.weak_bg_fill = t.card;
    widgets.noninteractive.bg_stroke = Stroke::new(1.0, t.border);
    widgets.noninteractive.fg_stroke = Stroke::new(1.0, t.foreground);
    widgets.noninteractive.corner_radius = radius;

    widgets.inactive.bg_fill = t.secondary;
    widgets.inactive.weak_bg_fill = t.secondary;
    widgets.inactive.bg_stroke = Stroke::new(1.0, t.border);
    widgets.inactive.fg_stroke = Stroke::new(1.0, t.secondary_foreground);
    widgets.inactive.corner_radius = radius;

    widgets.hovered.bg_fill = t.muted;
    widgets.hovered.weak_bg_fill = t.muted;
    widgets.hovered.bg_stroke = Stroke::new(1.0, t.primary);
    widgets.hovered.fg_stroke = Stroke::new(1.5, t.foreground);
    widgets.hovered.corner_radius = radius;

    widgets.active.bg_fill = t.primary;
    widgets.active.weak_bg_fill = t.primary;
    widgets.active.bg_stroke = Stroke::new(1.0, t.primary);
    widgets.active.fg_stroke = Stroke::new(1.5, t.primary_foreground);
    widgets.active.corner_radius = radius;

    widgets.open.bg_fill = t.muted;
    widgets.open.weak_bg_fill = t.muted;
    widgets.open.bg_stroke = Stroke::new(1.0, t.border);
    widgets.open.fg_stroke = Stroke::new(1.0, t.foreground);
    widgets.open.corner_radius = radius;

    egui_style.visuals = visuals;

    // Font class: everything except the fixed monospace text style follows
    // the painter's font family.
    let family = style.font.family();
    for (text_style, font_id) in egui_style.text_styles.iter_mut() {
        if *text_style != egui::TextStyle::Monospace {
            font_id.family = family.clone();
        }
    }

    ctx.set_style(egui_style);
}
