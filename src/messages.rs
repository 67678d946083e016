use crate::backend::extractor::ExtractError;
use crate::wire::ExtractionResponse;
use std::path::PathBuf;
use std::time::Duration;

/// Response messages from background operations
pub enum ResponseMessage {
    /// The extraction request settled, successfully or not. Exactly one per
    /// accepted submission.
    ExtractionFinished {
        outcome: Result<ExtractionResponse, ExtractError>,
        /// Wall-clock time the request took, as seen by this app.
        elapsed: Duration,
        /// Label to use when the server reports no file name.
        fallback_label: String,
    },
    /// A WAD file picked through the file dialog.
    FileChosen(PathBuf),
}
