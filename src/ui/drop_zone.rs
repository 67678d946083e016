//! The drop zone widget and the raw-input intake around it.
//!
//! File drops arrive through egui's `dropped_files`; links arrive through a
//! paste or the URL field, since desktop window managers do not hand us
//! `text/uri-list` drags the way browsers do. All intake funnels into the
//! same [`DropPayload`], so the state machine treats every source alike.

use egui::{Context, DroppedFile, RichText, Ui};

use crate::drop_zone::DropPayload;

pub enum DropZoneAction {
    /// A payload was submitted through the zone.
    Submitted(DropPayload),
    /// The user asked for the file picker.
    PickFile,
}

/// What the widget shows while a request is in flight.
pub struct BusyView<'a> {
    pub label: &'a str,
    pub waiting_seconds: u64,
}

#[derive(Default)]
pub struct DropZoneView {
    url_input: String,
}

impl DropZoneView {
    pub fn show(
        &mut self,
        ui: &mut Ui,
        busy: Option<BusyView<'_>>,
        files_hovering: bool,
    ) -> Option<DropZoneAction> {
        let mut action = None;

        let mut frame = egui::Frame::group(ui.style());
        if files_hovering && busy.is_none() {
            frame = frame.fill(ui.visuals().widgets.hovered.bg_fill);
        }

        frame.show(ui, |ui| {
            ui.set_min_height(130.0);
            ui.set_width(ui.available_width());
            ui.vertical_centered(|ui| match busy {
                Some(busy) => {
                    ui.add_space(20.0);
                    ui.add(egui::Spinner::new().size(28.0));
                    ui.add_space(6.0);
                    ui.label(format!("Processing \"{}\" ...", busy.label));
                    ui.label(RichText::new(waiting_line(busy.waiting_seconds)).small());
                }
                None => {
                    ui.add_space(16.0);
                    ui.label(RichText::new("Drop a Doom WAD file here").strong());
                    ui.label(RichText::new("or paste a link to one").small());
                    ui.add_space(10.0);
                    ui.horizontal(|ui| {
                        let field = egui::TextEdit::singleline(&mut self.url_input)
                            .hint_text("http://example.com/DOOM2.WAD")
                            .desired_width(280.0);
                        let response = ui.add(field);
                        let submitted = response.lost_focus()
                            && ui.input(|i| i.key_pressed(egui::Key::Enter));
                        let url = self.url_input.trim().to_string();
                        if (ui.button("Fetch").clicked() || submitted) && !url.is_empty() {
                            action = Some(DropZoneAction::Submitted(DropPayload::Url(url)));
                            self.url_input.clear();
                        }
                        if ui.button("Browse...").clicked() {
                            action = Some(DropZoneAction::PickFile);
                        }
                    });
                }
            });
        });

        action
    }
}

/// "You've been waiting N second(s)", singular below two.
pub fn waiting_line(seconds: u64) -> String {
    format!(
        "You've been waiting {} second{}",
        seconds,
        if seconds == 1 { "" } else { "s" }
    )
}

/// First usable payload among the dropped items. Drops that carry no file
/// path are ignored entirely.
pub fn payload_from_dropped(files: &[DroppedFile]) -> Option<DropPayload> {
    files
        .iter()
        .find_map(|file| file.path.clone().and_then(DropPayload::from_path))
}

pub fn dropped_payload(ctx: &Context) -> Option<DropPayload> {
    let files = ctx.input(|i| i.raw.dropped_files.clone());
    payload_from_dropped(&files)
}

/// A pasted `http(s)` link counts as a URL submission, unless a widget
/// (notably the URL field) holds keyboard focus and the paste is meant
/// for it.
pub fn pasted_url_payload(ctx: &Context) -> Option<DropPayload> {
    if ctx.memory(|m| m.focused().is_some()) {
        return None;
    }
    ctx.input(|i| {
        i.events.iter().find_map(|event| match event {
            egui::Event::Paste(text) => {
                let text = text.trim();
                (text.starts_with("http://") || text.starts_with("https://"))
                    .then(|| DropPayload::Url(text.to_string()))
            }
            _ => None,
        })
    })
}

pub fn files_hovering(ctx: &Context) -> bool {
    ctx.input(|i| !i.raw.hovered_files.is_empty())
}
