//! Interprets a [`RenderDoc`] into egui widgets.
//!
//! The document is data; this module only lays it out. Image references are
//! `data:` URIs from the server — they get decoded once per document into
//! textures and cached until the next submission replaces the document.

use std::collections::HashMap;

use base64::{Engine as _, engine::general_purpose::STANDARD};
use egui::{ColorImage, RichText, TextureHandle, TextureOptions, Ui};

use crate::render::{
    BUILD_TIME_LABEL, Body, PARSE_TIME_LABEL, RETRIEVE_TIME_LABEL, RenderDoc, STATS_TITLE,
    Section, Stats, TOTAL_TIME_LABEL,
};
use crate::render::{ERROR_TEXT, NO_IMAGES_TEXT};

#[derive(Default)]
pub struct ResultsView {
    /// Texture cache keyed by image reference; `None` marks references that
    /// failed to decode, so they are not retried every frame.
    textures: HashMap<String, Option<TextureHandle>>,
}

impl ResultsView {
    /// Forget the previous document's textures. Called whenever a new
    /// document replaces the old one.
    pub fn clear(&mut self) {
        self.textures.clear();
    }

    pub fn show(&mut self, ui: &mut Ui, doc: &RenderDoc) {
        match &doc.body {
            Body::Error => {
                ui.add_space(8.0);
                ui.label(RichText::new(ERROR_TEXT).color(ui.visuals().error_fg_color));
            }
            Body::NoImages { header } => {
                ui.add_space(8.0);
                ui.heading(header);
                ui.label(NO_IMAGES_TEXT);
            }
            Body::Sections { header, sections } => {
                ui.add_space(8.0);
                ui.heading(header);
                for section in sections {
                    self.show_section(ui, section);
                }
            }
        }

        show_stats(ui, &doc.stats);
    }

    fn show_section(&mut self, ui: &mut Ui, section: &Section) {
        ui.add_space(12.0);
        ui.horizontal(|ui| {
            ui.label(RichText::new(section.title).strong());
            ui.label(RichText::new(section.description).small().weak());
        });
        ui.separator();
        ui.horizontal_wrapped(|ui| {
            for image in &section.images {
                let texture = self
                    .textures
                    .entry(image.image_src.clone())
                    .or_insert_with(|| {
                        decode_data_uri(&image.image_src).map(|decoded| {
                            ui.ctx()
                                .load_texture(&image.name, decoded, TextureOptions::NEAREST)
                        })
                    });
                match texture {
                    Some(texture) => {
                        ui.add(egui::Image::new(&*texture))
                            .on_hover_text(&image.name);
                    }
                    None => {
                        // Not a decodable data URI; name it instead.
                        ui.label(RichText::new(format!("[{}]", image.name)).weak())
                            .on_hover_text(&image.image_src);
                    }
                }
            }
        });
    }
}

fn show_stats(ui: &mut Ui, stats: &Stats) {
    ui.add_space(16.0);
    ui.separator();
    ui.label(RichText::new(STATS_TITLE).strong());
    ui.label(format!("{}: {} seconds", TOTAL_TIME_LABEL, stats.total_seconds));
    if let Some(breakdown) = &stats.breakdown {
        ui.label(format!(
            "  - {}: {} seconds",
            RETRIEVE_TIME_LABEL, breakdown.retrieve_seconds
        ));
        ui.label(format!(
            "  - {}: {} seconds",
            PARSE_TIME_LABEL, breakdown.parse_seconds
        ));
        ui.label(format!(
            "  - {}: {} seconds",
            BUILD_TIME_LABEL, breakdown.build_seconds
        ));
    }
}

/// Decode a `data:<mime>;base64,<payload>` reference into pixels.
fn decode_data_uri(src: &str) -> Option<ColorImage> {
    let rest = src.strip_prefix("data:")?;
    let (_mime, payload) = rest.split_once(";base64,")?;
    let bytes = STANDARD.decode(payload.trim()).ok()?;
    let decoded = image::load_from_memory(&bytes).ok()?;
    let rgba = decoded.to_rgba8();
    let size = [rgba.width() as usize, rgba.height() as usize];
    Some(ColorImage::from_rgba_unmultiplied(size, rgba.as_raw()))
}
