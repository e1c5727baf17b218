//! Chat panel — persona header, conversation, thinking indicator,
//! error banner and the input row.

use egui::{self, Align, Id, Key, Layout, Margin, RichText, ScrollArea, Stroke, Vec2};
use coach_core::panel::{ChatPanel, Outgoing};
use coach_types::config::PersonaConfig;
use coach_types::message::Message;
use crate::keys::is_submit_chord;
use crate::theme::*;

const INPUT_AREA_HEIGHT: f32 = 84.0;
const SEND_SIZE: Vec2 = Vec2::new(60.0, 24.0);

/// Widget id of the message input, for focus handling
pub fn input_id() -> Id {
    Id::new("coach_input")
}

/// Render the chat panel. Returns the outgoing request when the user submits.
pub fn chat_panel(
    ui: &mut egui::Ui,
    panel: &mut ChatPanel,
    persona: &PersonaConfig,
) -> Option<Outgoing> {
    let mut submitted = None;

    egui::Frame::default()
        .fill(BG_PRIMARY)
        .inner_margin(PANEL_PADDING)
        .show(ui, |ui| {
            ui.vertical(|ui| {
                header(ui, persona);
                ui.separator();

                let available_height = ui.available_height() - INPUT_AREA_HEIGHT;
                ScrollArea::vertical()
                    .max_height(available_height)
                    .auto_shrink([false, false])
                    .stick_to_bottom(true)
                    .show(ui, |ui| {
                        for message in panel.messages() {
                            render_message(ui, message);
                            ui.add_space(6.0);
                        }

                        if panel.is_pending() {
                            thinking_indicator(ui, &persona.thinking_label);
                        }

                        if let Some(error) = panel.last_error() {
                            error_banner(ui, error);
                        }
                    });

                ui.add_space(8.0);
                submitted = input_row(ui, panel, persona);
                footer(ui, persona);
            });
        });

    submitted
}

fn header(ui: &mut egui::Ui, persona: &PersonaConfig) {
    ui.vertical_centered(|ui| {
        ui.label(
            RichText::new(&persona.title)
                .color(ACCENT)
                .size(28.0)
                .strong(),
        );
        ui.label(RichText::new(&persona.tagline).color(TEXT_SECONDARY).size(16.0));
        ui.label(RichText::new("🍁 🌽 🥔 🥧").small());
    });
}

fn render_message(ui: &mut egui::Ui, message: &Message) {
    let (align, fill, text_color, label_color) = if message.is_user() {
        (Align::Max, ACCENT, TEXT_ON_ACCENT, TEXT_ON_ACCENT)
    } else {
        (Align::Min, BG_SECONDARY, TEXT_PRIMARY, HIGHLIGHT)
    };
    let max_width = ui.available_width() * BUBBLE_WIDTH_RATIO;

    ui.with_layout(Layout::top_down(align), |ui| {
        egui::Frame::default()
            .fill(fill)
            .corner_radius(BUBBLE_ROUNDING)
            .inner_margin(Margin::symmetric(14, 10))
            .show(ui, |ui| {
                ui.set_max_width(max_width);
                ui.label(
                    RichText::new(message.sender().label())
                        .color(label_color)
                        .strong()
                        .small(),
                );
                ui.label(RichText::new(message.text()).color(text_color));
                ui.label(
                    RichText::new(message.time_label())
                        .color(text_color.gamma_multiply(0.7))
                        .small(),
                );
            });
    });
}

fn thinking_indicator(ui: &mut egui::Ui, label: &str) {
    egui::Frame::default()
        .fill(BG_SECONDARY)
        .corner_radius(BUBBLE_ROUNDING)
        .inner_margin(Margin::symmetric(14, 10))
        .show(ui, |ui| {
            ui.horizontal(|ui| {
                ui.add(egui::Spinner::new().size(14.0).color(ACCENT));
                ui.label(RichText::new(label).color(TEXT_PRIMARY));
                ui.label(RichText::new("✨").color(HIGHLIGHT));
            });
        });
}

fn error_banner(ui: &mut egui::Ui, error: &str) {
    ui.vertical_centered(|ui| {
        egui::Frame::default()
            .fill(ERROR_BG)
            .stroke(Stroke::new(1.0, ERROR.gamma_multiply(0.3)))
            .corner_radius(PANEL_ROUNDING)
            .inner_margin(Margin::symmetric(12, 6))
            .show(ui, |ui| {
                ui.label(RichText::new(error).color(ERROR).small());
            });
    });
}

fn input_row(
    ui: &mut egui::Ui,
    panel: &mut ChatPanel,
    persona: &PersonaConfig,
) -> Option<Outgoing> {
    let mut submitted = None;

    ui.horizontal(|ui| {
        let pending = panel.is_pending();

        let input = egui::TextEdit::singleline(&mut panel.input)
            .id(input_id())
            .hint_text(persona.placeholder.as_str())
            .desired_width(ui.available_width() - 70.0)
            .font(egui::FontId::proportional(15.0));
        let response = ui.add_enabled(!pending, input);

        let clicked = if pending {
            ui.add_sized(SEND_SIZE, egui::Spinner::new().size(18.0).color(ACCENT));
            false
        } else {
            let send_enabled = panel.can_submit();
            ui.add_enabled(
                send_enabled,
                egui::Button::new(RichText::new("Send").color(TEXT_ON_ACCENT))
                    .fill(if send_enabled { ACCENT } else { BG_SURFACE })
                    .corner_radius(PANEL_ROUNDING)
                    .min_size(SEND_SIZE),
            )
            .clicked()
        };

        // Singleline edits drop focus on Enter
        let enter = response.lost_focus()
            && ui.input(|i| is_submit_chord(i.key_pressed(Key::Enter), i.modifiers));

        if enter || clicked {
            submitted = panel.submit_draft();
        }
    });

    submitted
}

fn footer(ui: &mut egui::Ui, persona: &PersonaConfig) {
    ui.add_space(6.0);
    ui.vertical_centered(|ui| {
        ui.label(RichText::new(&persona.footer).color(TEXT_SECONDARY).small());
    });
}
