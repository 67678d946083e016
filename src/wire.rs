//! JSON contract of the `/extractDoomWadData` endpoint.
//!
//! The endpoint overloads the `result` field: a bare string means the server
//! failed while processing the submission, an object carries the extracted
//! assets. `ExtractionOutcome` models that union with an untagged enum.

use serde::{Deserialize, Serialize};

/// Top-level response body returned by the extraction endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractionResponse {
    pub result: ExtractionOutcome,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timings: Option<Timings>,
}

/// Either extracted assets or a server-side failure message.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ExtractionOutcome {
    Failure(String),
    Assets(ExtractionResult),
}

/// Extracted image assets, grouped by category. Empty lists are valid and
/// suppress that category's rendering.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractionResult {
    pub file_name: String,
    pub sprites: Vec<NamedImage>,
    pub flats: Vec<NamedImage>,
    pub textures: Vec<NamedImage>,
    pub other_graphics: Vec<NamedImage>,
}

impl ExtractionResult {
    /// True when no category has any images (typically a maps-only WAD).
    pub fn is_empty(&self) -> bool {
        self.sprites.is_empty()
            && self.flats.is_empty()
            && self.textures.is_empty()
            && self.other_graphics.is_empty()
    }

    /// Header label: prefer the file name the server reports, fall back to
    /// the label derived from the submission (URL tail or local file name).
    pub fn resolved_label(&self, fallback: &str) -> String {
        if self.file_name.is_empty() {
            fallback.to_string()
        } else {
            self.file_name.clone()
        }
    }
}

/// A single named image; `image_src` is a renderable reference, in practice
/// a `data:` URI produced by the server.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NamedImage {
    pub name: String,
    pub image_src: String,
}

/// Server-side timing breakdown, in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Timings {
    pub retrieve_file: f64,
    pub parse_file: f64,
    pub build_images: f64,
}

/// Text after the last `/` of a URL; the whole string when there is none.
pub fn url_tail(url: &str) -> &str {
    url.rsplit('/').next().unwrap_or(url)
}
