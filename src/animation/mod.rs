//! Time-based UI animation: easing curves, a declarative stage timeline,
//! and the startup choreography built on top of them.

pub mod easing;
pub mod intro;
pub mod timeline;

pub use easing::Easing;
pub use timeline::{SequenceBuilder, Stage, Timeline};
