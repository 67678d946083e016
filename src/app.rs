use std::sync::mpsc::{Receiver, Sender, channel};
use std::time::Instant;

use crate::animation::Timeline;
use crate::animation::intro::{IntroStage, intro_timeline};
use crate::backend::extractor::Extractor;
use crate::backend::wait_clock::WaitClock;
use crate::config::Config;
use crate::constant;
use crate::drop_zone::{DropPayload, DropZone, Offer};
use crate::messages::ResponseMessage;
use crate::render::{self, RenderDoc};
use crate::style::configure_style;
use crate::ui::drop_zone as drop_zone_ui;
use crate::ui::drop_zone::{BusyView, DropZoneAction, DropZoneView};
use crate::ui::nav::{self, NAV_ITEMS, NavStyle, NavTarget};
use crate::ui::results::ResultsView;

pub struct WadPeekApp {
    config: Config,
    zone: DropZone,
    zone_view: DropZoneView,
    results: ResultsView,
    doc: Option<RenderDoc>,
    wait_clock: Option<WaitClock>,
    response_sender: Sender<ResponseMessage>,
    response_receiver: Receiver<ResponseMessage>,
    intro: Timeline<IntroStage>,
    selected: NavTarget,
}

impl WadPeekApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        configure_style(&cc.egui_ctx);

        let config = Config::default();
        let (response_sender, response_receiver) = channel();

        let mut intro = intro_timeline(&config.settings.intro, NAV_ITEMS.len());
        intro.play(Instant::now());

        Self {
            config,
            zone: DropZone::new(),
            zone_view: DropZoneView::default(),
            results: ResultsView::default(),
            doc: None,
            wait_clock: None,
            response_sender,
            response_receiver,
            intro,
            selected: NavTarget::WadReader,
        }
    }

    /// Offer a submission to the single-slot zone; a busy zone rejects it.
    fn submit(&mut self, payload: DropPayload, ctx: &egui::Context) {
        match self.zone.offer(payload) {
            Offer::Accepted(payload) => {
                self.wait_clock = Some(WaitClock::start(ctx.clone()));
                let extractor = Extractor::new(self.config.settings.extractor_url.clone());
                extractor.dispatch(payload, self.response_sender.clone(), ctx.clone());
            }
            Offer::Rejected(_) => {
                // Already logged by the zone; the in-flight request stands.
            }
        }
    }

    /// Drain background responses. Each settled request stops the wait clock
    /// and idles the zone exactly once, then replaces the rendered document.
    fn drain_responses(&mut self, ctx: &egui::Context) {
        while let Ok(message) = self.response_receiver.try_recv() {
            match message {
                ResponseMessage::ExtractionFinished {
                    outcome,
                    elapsed,
                    fallback_label,
                } => {
                    if let Some(clock) = self.wait_clock.take() {
                        clock.stop();
                    }
                    self.zone.settle();

                    let doc = match outcome {
                        Ok(response) => render::render(&response, elapsed, &fallback_label),
                        // The failure was logged where it happened; the panel
                        // stays generic.
                        Err(_) => render::render_error(elapsed),
                    };
                    self.results.clear();
                    self.doc = Some(doc);
                }
                ResponseMessage::FileChosen(path) => {
                    if let Some(payload) = DropPayload::from_path(path) {
                        self.submit(payload, ctx);
                    }
                }
            }
        }
    }

    /// File dialogs block, so they run on their own thread and report back
    /// through the response channel.
    fn pick_file(&self, ctx: &egui::Context) {
        let sender = self.response_sender.clone();
        let ctx = ctx.clone();
        std::thread::spawn(move || {
            if let Some(path) = rfd::FileDialog::new()
                .add_filter("Doom WAD", &["wad", "WAD"])
                .pick_file()
            {
                if sender.send(ResponseMessage::FileChosen(path)).is_err() {
                    tracing::warn!("app went away before the file pick landed");
                }
                ctx.request_repaint();
            }
        });
    }

    fn show_reader_pane(&mut self, ui: &mut egui::Ui, ctx: &egui::Context) {
        let busy = self.zone.busy_label().map(|label| BusyView {
            label,
            waiting_seconds: self.wait_clock.as_ref().map_or(0, WaitClock::seconds),
        });
        let action = self
            .zone_view
            .show(ui, busy, drop_zone_ui::files_hovering(ctx));
        match action {
            Some(DropZoneAction::Submitted(payload)) => self.submit(payload, ctx),
            Some(DropZoneAction::PickFile) => self.pick_file(ctx),
            None => {}
        }

        if let Some(doc) = self.doc.clone() {
            egui::ScrollArea::vertical().show(ui, |ui| {
                self.results.show(ui, &doc);
            });
        }
    }

    fn show_about_pane(&self, ui: &mut egui::Ui) {
        ui.add_space(8.0);
        ui.heading("About");
        ui.label(
            "Drop a Doom WAD file (or a link to one) onto the WAD reader page. \
             The extraction service pulls the sprites, flats, textures and other \
             graphics out of it and this app lays them out for browsing.",
        );
        if let Ok(path) = Config::config_path() {
            ui.add_space(8.0);
            ui.label(egui::RichText::new(format!("Config: {}", path.display())).small().weak());
        }
    }
}

impl eframe::App for WadPeekApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now = Instant::now();

        self.drain_responses(ctx);

        // Raw intake: file drops and pasted links. The zone decides whether
        // they are accepted; while busy they are rejected, not queued.
        if let Some(payload) =
            drop_zone_ui::dropped_payload(ctx).or_else(|| drop_zone_ui::pasted_url_payload(ctx))
        {
            self.submit(payload, ctx);
        }

        // Top bar, fading in last.
        let top_bar_opacity = self.intro.value_of(IntroStage::TopBarFadeIn, now);
        egui::TopBottomPanel::top("top_bar_panel").show(ctx, |ui| {
            ui.scope(|ui| {
                ui.set_opacity(top_bar_opacity);
                ui.horizontal(|ui| {
                    ui.heading(constant::DEFAULT_WINDOW_TITLE);
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        ui.label(egui::RichText::new("a Doom WAD asset viewer").small().weak());
                    });
                });
            });
        });

        // Nav column with the staggered drop-down.
        egui::SidePanel::left("nav_panel")
            .resizable(false)
            .default_width(130.0)
            .show(ctx, |ui| {
                let style = NavStyle {
                    font_small: self.config.settings.nav_font_small,
                    font_large: self.config.settings.nav_font_large,
                    hover_tween_secs: self.config.settings.hover_tween_ms as f32 / 1000.0,
                };
                if let Some(target) = nav::show(ui, self.selected, &style, &self.intro, now) {
                    self.selected = target;
                }
            });

        // Main content: width expands first (carrying opacity, as the legacy
        // morph did), then height, then the inner content fades in.
        let expand_w = self.intro.value_of(IntroStage::ContentWidth, now);
        let expand_h = self.intro.value_of(IntroStage::ContentHeight, now);
        let content_opacity = self.intro.value_of(IntroStage::ContentFadeIn, now);
        egui::CentralPanel::default().show(ctx, |ui| {
            let avail = ui.available_size();
            let inner = egui::vec2(
                avail.x * expand_w.clamp(0.0, 1.0),
                10.0 + (avail.y - 10.0) * expand_h.clamp(0.0, 1.0),
            );
            ui.scope(|ui| {
                ui.set_opacity(expand_w.clamp(0.0, 1.0));
                ui.allocate_ui(inner, |ui| {
                    ui.set_clip_rect(ui.max_rect());
                    ui.scope(|ui| {
                        ui.multiply_opacity(content_opacity);
                        match self.selected {
                            NavTarget::WadReader => self.show_reader_pane(ui, ctx),
                            NavTarget::About => self.show_about_pane(ui),
                        }
                    });
                });
            });
        });

        if !self.intro.finished(now) {
            ctx.request_repaint();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::extractor::ExtractError;
    use crate::config::Settings;
    use crate::render::Body;
    use crate::wire::ExtractionResponse;
    use reqwest::StatusCode;
    use std::time::Duration;

    fn test_app() -> WadPeekApp {
        let (response_sender, response_receiver) = channel();
        let config = Config {
            settings: Settings::default(),
        };
        let intro = intro_timeline(&config.settings.intro, NAV_ITEMS.len());
        WadPeekApp {
            config,
            zone: DropZone::new(),
            zone_view: DropZoneView::default(),
            results: ResultsView::default(),
            doc: None,
            wait_clock: None,
            response_sender,
            response_receiver,
            intro,
            selected: NavTarget::WadReader,
        }
    }

    /// An app mid-request: zone busy, wait clock ticking.
    fn busy_app() -> WadPeekApp {
        let mut app = test_app();
        let _ = app
            .zone
            .offer(DropPayload::Url("http://x/y/DOOM2.WAD".to_string()));
        app.wait_clock = Some(WaitClock::start(egui::Context::default()));
        app
    }

    #[test]
    fn failed_request_settles_the_zone_and_stops_the_clock() {
        let mut app = busy_app();
        app.response_sender
            .send(ResponseMessage::ExtractionFinished {
                outcome: Err(ExtractError::Status(StatusCode::INTERNAL_SERVER_ERROR)),
                elapsed: Duration::from_millis(250),
                fallback_label: "DOOM2.WAD".to_string(),
            })
            .unwrap();

        app.drain_responses(&egui::Context::default());

        assert!(!app.zone.is_busy());
        assert!(app.wait_clock.is_none());
        let doc = app.doc.expect("a document should be rendered");
        assert_eq!(doc.body, Body::Error);
    }

    #[test]
    fn successful_request_settles_the_zone_and_renders_sections() {
        let mut app = busy_app();
        let body = r#"{
            "result": {
                "fileName": "DOOM2.WAD",
                "sprites": [{"name": "IMP", "imageSrc": "a.png"}],
                "flats": [],
                "textures": [],
                "otherGraphics": []
            }
        }"#;
        let response: ExtractionResponse = serde_json::from_str(body).unwrap();
        app.response_sender
            .send(ResponseMessage::ExtractionFinished {
                outcome: Ok(response),
                elapsed: Duration::from_secs(2),
                fallback_label: "fallback.wad".to_string(),
            })
            .unwrap();

        app.drain_responses(&egui::Context::default());

        assert!(!app.zone.is_busy());
        assert!(app.wait_clock.is_none());
        let doc = app.doc.expect("a document should be rendered");
        match doc.body {
            Body::Sections { header, sections } => {
                assert_eq!(header, "DOOM2.WAD");
                assert_eq!(sections.len(), 1);
                assert_eq!(sections[0].title, "sprites");
            }
            other => panic!("expected sections, got {other:?}"),
        }
    }

    #[test]
    fn chosen_file_is_submitted_through_the_zone() {
        let mut app = test_app();
        app.response_sender
            .send(ResponseMessage::FileChosen(std::path::PathBuf::from(
                "/wads/DOOM2.WAD",
            )))
            .unwrap();

        // The submission dispatches against the configured endpoint; nothing
        // listens there in tests, so only the zone transition is observable.
        app.drain_responses(&egui::Context::default());

        assert!(app.zone.is_busy());
        assert_eq!(app.zone.busy_label(), Some("DOOM2.WAD"));
        assert!(app.wait_clock.is_some());
    }
}
