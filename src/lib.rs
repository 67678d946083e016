//! WAD Peek library
//!
//! Desktop client for the Doom WAD extraction service: drop a WAD (or paste a
//! link to one), the background extractor posts it to the service, and the
//! results pane lays out the sprites, flats, textures and other graphics.

pub mod animation;
pub mod app;
pub mod backend;
pub mod config;
pub mod constant;
pub mod drop_zone;
pub mod messages;
pub mod render;
pub mod style;
pub mod ui;
pub mod wire;
