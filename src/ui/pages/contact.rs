//! Contact page: message form, contact details and office hours.

use eframe::egui;
use egui::{Layout, RichText, Stroke, Ui};
use super::{card_columns, feature_cards, page_hero, section, Feature, PageColors, PageInteraction};
use crate::app::AppState;
use crate::state::ContactNotice;
use crate::ui::paint::{styled_button, styled_text, surface_frame};
use themeapp::style::contact::{self as contact_style, ContactStyle};
use themeapp::style::shell as shell_style;

const THANK_YOU: &str = "Thank you for your message! We'll get back to you soon.";

/// (icon, title, shown value, link target)
const CONTACT_INFO: [(&str, &str, &str, &str); 3] = [
    ("✉", "Email", "hello@themeapp.com", "mailto:hello@themeapp.com"),
    ("📞", "Phone", "+1 (555) 123-4567", "tel:+15551234567"),
    ("📍", "Address", "123 Theme Street, Design City, DC 12345", "https://maps.google.com"),
];

const OFFICE_HOURS: [(&str, &str); 3] = [
    ("Monday - Friday", "9:00 AM - 6:00 PM"),
    ("Saturday", "10:00 AM - 4:00 PM"),
    ("Sunday", "Closed"),
];

const SUPPORT: [Feature; 3] = [
    Feature {
        icon: "💬",
        title: "24/7 Support",
        description: "Get help whenever you need it",
    },
    Feature {
        icon: "⏱",
        title: "Quick Response",
        description: "We typically respond within 2 hours",
    },
    Feature {
        icon: "➤",
        title: "Multiple Channels",
        description: "Reach us via email, phone, or chat",
    },
];

pub fn render(ui: &mut Ui, state: &mut AppState) -> Option<PageInteraction> {
    let variant = state.theme.get();
    let style = contact_style::resolve(variant);
    let colors = PageColors {
        title: style.title,
        text: style.text,
        accent: style.accent,
        typeface: shell_style::resolve(variant).typeface,
    };

    page_hero(
        ui,
        "Get in Touch",
        "Have questions, feedback, or need support? We'd love to hear from you. Let's start a conversation.",
        colors,
    );

    let submitted = section(ui, |ui| {
        let columns = card_columns(ui, 2);
        ui.columns(columns, |cells| {
            let submitted = message_form(&mut cells[0], state, style, colors);
            let details_cell = if columns > 1 { &mut cells[1] } else { &mut cells[0] };
            contact_details(details_cell, style, colors);
            submitted
        })
    });

    section(ui, |ui| feature_cards(ui, &SUPPORT, &style.card, colors));

    submitted.then_some(PageInteraction::SubmitContact)
}

/// The message form. Returns true when "Send Message" was clicked.
fn message_form(ui: &mut Ui, state: &mut AppState, style: &ContactStyle, colors: PageColors) -> bool {
    surface_frame(&style.card, style.card.elevation)
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.label(styled_text("Send us a Message", colors.typeface, 24.0, colors.title).strong());
            ui.add_space(16.0);

            let form = &mut state.contact.form;
            let mut changed = false;
            changed |= field(ui, "Name", &mut form.name, "Your name", style, false);
            changed |= field(ui, "Email", &mut form.email, "your@email.com", style, false);
            changed |= field(ui, "Subject", &mut form.subject, "What's this about?", style, false);
            changed |= field(ui, "Message", &mut form.message, "Tell us more about your inquiry...", style, true);
            if changed {
                state.contact.dismiss_notice();
            }

            ui.add_space(8.0);
            let clicked = styled_button(ui, "Send Message  ➤", &style.button, 8).clicked();

            match state.contact.notice() {
                Some(ContactNotice::Sent) => {
                    ui.add_space(12.0);
                    ui.label(RichText::new(THANK_YOU).strong().color(style.accent));
                }
                Some(ContactNotice::Invalid(reason)) => {
                    ui.add_space(12.0);
                    ui.label(RichText::new(reason).color(style.error));
                }
                None => {}
            }

            clicked
        })
        .inner
}

/// Labeled text input. Returns true when the text changed.
fn field(ui: &mut Ui, label: &str, value: &mut String, hint: &str, style: &ContactStyle, multiline: bool) -> bool {
    ui.label(RichText::new(label).strong().color(style.title));
    ui.add_space(4.0);

    let input = &style.input;
    let changed = ui
        .scope(|ui| {
            let visuals = ui.visuals_mut();
            visuals.widgets.inactive.bg_stroke = Stroke::new(1.0, input.border_for(false));
            visuals.widgets.hovered.bg_stroke = Stroke::new(1.0, input.border_for(false));
            visuals.selection.stroke = Stroke::new(2.0, input.border_for(true));

            let edit = if multiline {
                egui::TextEdit::multiline(value).desired_rows(6)
            } else {
                egui::TextEdit::singleline(value)
            };
            ui.add(
                edit.hint_text(hint)
                    .desired_width(f32::INFINITY)
                    .background_color(input.fill)
                    .text_color(input.text)
                    .margin(egui::Margin::symmetric(12, 8)),
            )
            .changed()
        })
        .inner;

    ui.add_space(12.0);
    changed
}

fn contact_details(ui: &mut Ui, style: &ContactStyle, colors: PageColors) {
    surface_frame(&style.card, style.card.elevation).show(ui, |ui| {
        ui.set_width(ui.available_width());
        ui.label(styled_text("Contact Information", colors.typeface, 24.0, colors.title).strong());
        ui.add_space(16.0);

        for (icon, title, value, link) in CONTACT_INFO {
            ui.horizontal(|ui| {
                ui.label(RichText::new(icon).size(22.0).color(style.accent));
                ui.add_space(8.0);
                ui.vertical(|ui| {
                    ui.label(RichText::new(title).strong().color(colors.title));
                    ui.hyperlink_to(RichText::new(value).color(colors.text), link);
                });
            });
            ui.add_space(12.0);
        }
    });

    ui.add_space(24.0);

    surface_frame(&style.card, style.card.elevation).show(ui, |ui| {
        ui.set_width(ui.available_width());
        ui.label(styled_text("Office Hours", colors.typeface, 24.0, colors.title).strong());
        ui.add_space(16.0);

        for (days, hours) in OFFICE_HOURS {
            ui.horizontal(|ui| {
                ui.label(RichText::new(days).color(colors.text));
                ui.with_layout(Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(RichText::new(hours).strong().color(colors.title));
                });
            });
            ui.add_space(6.0);
        }
    });
}
