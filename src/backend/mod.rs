pub mod extractor;
pub mod wait_clock;
