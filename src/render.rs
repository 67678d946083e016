//! Pure renderer: extraction response + elapsed time + label in, a render
//! instruction set out. The egui layer interprets the resulting [`RenderDoc`]
//! without re-deriving any of the decisions made here, and each new document
//! wholly replaces the previous one.

use std::time::Duration;

use serde::Serialize;

use crate::wire::{ExtractionOutcome, ExtractionResponse, NamedImage};

pub const ERROR_TEXT: &str = "An error was encountered while processing the data \
on the other end of the link you submitted! Perhaps the data wasn't a WAD file \
intended for Doom 1?";

pub const NO_IMAGES_TEXT: &str = "No images were found while processing the WAD \
you submitted. This is unfortunate, but not unexpected because many Doom WADs \
only introduce new maps using all the original image/texture assets from Doom.";

pub const STATS_TITLE: &str = "Stats";
pub const TOTAL_TIME_LABEL: &str = "Total time seen by the app";
pub const RETRIEVE_TIME_LABEL: &str = "time spent retrieving file";
pub const PARSE_TIME_LABEL: &str = "time spent parsing file";
pub const BUILD_TIME_LABEL: &str = "time spent building images";

/// A complete, serializable description of the results panel.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderDoc {
    pub body: Body,
    pub stats: Stats,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Body {
    /// Generic error panel; covers transport failures and server-reported
    /// failures alike. The server's detail string is deliberately not shown.
    Error,
    /// Structured response with no images in any category.
    NoImages { header: String },
    /// One section per non-empty category, in fixed order.
    Sections { header: String, sections: Vec<Section> },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Section {
    pub title: &'static str,
    pub description: &'static str,
    pub images: Vec<NamedImage>,
}

/// The stats panel is rendered on every path, error panels included.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Stats {
    pub total_seconds: f64,
    pub breakdown: Option<Breakdown>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Breakdown {
    pub retrieve_seconds: f64,
    pub parse_seconds: f64,
    pub build_seconds: f64,
}

/// Render a parsed endpoint response.
pub fn render(response: &ExtractionResponse, elapsed: Duration, fallback_label: &str) -> RenderDoc {
    let body = match &response.result {
        ExtractionOutcome::Failure(detail) => {
            // Kept off the UI to preserve the established behavior, but not
            // silently dropped either.
            tracing::warn!(detail = %detail, "server reported an extraction failure");
            Body::Error
        }
        ExtractionOutcome::Assets(result) => {
            let header = result.resolved_label(fallback_label);
            if result.is_empty() {
                Body::NoImages { header }
            } else {
                let mut sections = Vec::new();
                let categories: [(&'static str, &'static str, &[NamedImage]); 4] = [
                    ("sprites", "objects that appear inside a map", &result.sprites),
                    ("flats", "used on ceilings and floors", &result.flats),
                    ("textures", "used on walls", &result.textures),
                    (
                        "other graphics",
                        "UI elements and miscellaneous other images",
                        &result.other_graphics,
                    ),
                ];
                for (title, description, images) in categories {
                    if !images.is_empty() {
                        sections.push(Section {
                            title,
                            description,
                            images: images.to_vec(),
                        });
                    }
                }
                Body::Sections { header, sections }
            }
        }
    };

    RenderDoc {
        body,
        stats: Stats {
            total_seconds: elapsed.as_millis() as f64 / 1000.0,
            breakdown: response.timings.map(|t| Breakdown {
                retrieve_seconds: t.retrieve_file / 1000.0,
                parse_seconds: t.parse_file / 1000.0,
                build_seconds: t.build_images / 1000.0,
            }),
        },
    }
}

/// Render a request that never produced a parseable response.
pub fn render_error(elapsed: Duration) -> RenderDoc {
    RenderDoc {
        body: Body::Error,
        stats: Stats {
            total_seconds: elapsed.as_millis() as f64 / 1000.0,
            breakdown: None,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wire::{ExtractionResult, Timings};

    fn image(name: &str) -> NamedImage {
        NamedImage {
            name: name.to_string(),
            image_src: format!("data:image/png;base64,{name}"),
        }
    }

    fn response_with(result: ExtractionResult) -> ExtractionResponse {
        ExtractionResponse {
            result: ExtractionOutcome::Assets(result),
            timings: None,
        }
    }

    #[test]
    fn string_result_renders_generic_error_panel() {
        let response = ExtractionResponse {
            result: ExtractionOutcome::Failure("disk on fire".to_string()),
            timings: None,
        };
        let doc = render(&response, Duration::from_millis(1500), "x.wad");
        assert_eq!(doc.body, Body::Error);
        assert_eq!(doc.stats.total_seconds, 1.5);
        assert!(doc.stats.breakdown.is_none());
    }

    #[test]
    fn transport_failure_renders_same_error_body() {
        let doc = render_error(Duration::from_millis(250));
        assert_eq!(doc.body, Body::Error);
        assert_eq!(doc.stats.total_seconds, 0.25);
    }

    #[test]
    fn all_empty_categories_render_no_images_panel() {
        let doc = render(
            &response_with(ExtractionResult::default()),
            Duration::from_secs(1),
            "maps-only.wad",
        );
        match doc.body {
            Body::NoImages { header } => assert_eq!(header, "maps-only.wad"),
            other => panic!("expected no-images panel, got {other:?}"),
        }
    }

    #[test]
    fn only_non_empty_categories_produce_sections_in_fixed_order() {
        let result = ExtractionResult {
            file_name: "TNT.WAD".to_string(),
            sprites: vec![],
            flats: vec![image("FLOOR4_8")],
            textures: vec![image("BIGDOOR2"), image("BRNSMAL1")],
            other_graphics: vec![],
        };
        let doc = render(&response_with(result), Duration::from_secs(2), "ignored");
        match doc.body {
            Body::Sections { header, sections } => {
                assert_eq!(header, "TNT.WAD");
                let titles: Vec<_> = sections.iter().map(|s| s.title).collect();
                assert_eq!(titles, vec!["flats", "textures"]);
                assert_eq!(sections[1].images.len(), 2);
                assert_eq!(sections[1].images[0].name, "BIGDOOR2");
            }
            other => panic!("expected sections, got {other:?}"),
        }
    }

    #[test]
    fn sections_keep_the_full_fixed_order_when_all_present() {
        let result = ExtractionResult {
            file_name: String::new(),
            sprites: vec![image("IMP")],
            flats: vec![image("FLAT1")],
            textures: vec![image("WALL1")],
            other_graphics: vec![image("TITLEPIC")],
        };
        let doc = render(&response_with(result), Duration::ZERO, "fallback");
        match doc.body {
            Body::Sections { sections, .. } => {
                let titles: Vec<_> = sections.iter().map(|s| s.title).collect();
                assert_eq!(titles, vec!["sprites", "flats", "textures", "other graphics"]);
            }
            other => panic!("expected sections, got {other:?}"),
        }
    }

    #[test]
    fn header_falls_back_to_url_tail_when_file_name_empty() {
        // The worked example: one sprite, empty fileName, dropped from
        // http://x/y/DOOM2.WAD.
        let result = ExtractionResult {
            file_name: String::new(),
            sprites: vec![NamedImage {
                name: "IMP".to_string(),
                image_src: "a.png".to_string(),
            }],
            ..Default::default()
        };
        let doc = render(&response_with(result), Duration::from_secs(1), "DOOM2.WAD");
        match doc.body {
            Body::Sections { header, sections } => {
                assert_eq!(header, "DOOM2.WAD");
                assert_eq!(sections.len(), 1);
                assert_eq!(sections[0].title, "sprites");
                assert_eq!(sections[0].images.len(), 1);
            }
            other => panic!("expected sections, got {other:?}"),
        }
    }

    #[test]
    fn server_timings_convert_to_seconds() {
        let response = ExtractionResponse {
            result: ExtractionOutcome::Assets(ExtractionResult::default()),
            timings: Some(Timings {
                retrieve_file: 1200.0,
                parse_file: 80.0,
                build_images: 450.0,
            }),
        };
        let doc = render(&response, Duration::from_millis(2000), "x.wad");
        let breakdown = doc.stats.breakdown.unwrap();
        assert_eq!(doc.stats.total_seconds, 2.0);
        assert_eq!(breakdown.retrieve_seconds, 1.2);
        assert_eq!(breakdown.parse_seconds, 0.08);
        assert_eq!(breakdown.build_seconds, 0.45);
    }
}
