//! Startup choreography: staggered nav-button drop-down, content expansion
//! (width, then height), content fade-in, and a late top-bar fade-in. Every
//! duration comes from [`IntroTimings`]; offsets are the running sum of the
//! durations and pauses that precede each stage.

use std::time::Duration;

use crate::config::IntroTimings;

use super::easing::Easing;
use super::timeline::{SequenceBuilder, Timeline};

/// Stage ids of the intro timeline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum IntroStage {
    /// The first nav button fades in; the rest fall.
    ButtonFadeIn,
    /// Drop-down of button `i` (1-based; button 0 fades instead).
    ButtonFall(usize),
    ContentWidth,
    ContentHeight,
    ContentFadeIn,
    TopBarFadeIn,
}

/// Build the intro timeline for `button_count` nav buttons. The button
/// stagger and the content expansion run concurrently from the shared zero
/// time; the top bar waits for everything else.
pub fn intro_timeline(timings: &IntroTimings, button_count: usize) -> Timeline<IntroStage> {
    let ms = Duration::from_millis;

    let mut builder = SequenceBuilder::new()
        .stage(IntroStage::ContentWidth, ms(timings.width_expand_ms), Easing::QuadOut)
        .gap(ms(timings.before_height_expand_ms))
        .stage(IntroStage::ContentHeight, ms(timings.height_expand_ms), Easing::QuadOut)
        .gap(ms(timings.before_content_fade_ms))
        .stage(IntroStage::ContentFadeIn, ms(timings.content_fade_ms), Easing::QuadIn)
        .gap(ms(timings.wait_for_top_bar_ms))
        .stage(IntroStage::TopBarFadeIn, ms(timings.top_bar_fade_ms), Easing::QuadIn);

    if button_count > 0 {
        builder = builder.at(
            IntroStage::ButtonFadeIn,
            Duration::ZERO,
            ms(timings.button_fade_in_ms),
            Easing::SineInOut,
        );
        for i in 1..button_count {
            let pause = ms(timings.button_fade_in_ms)
                + ms(timings.pause_after_fade_ms)
                + (ms(timings.button_fall_ms) + ms(timings.pause_between_falls_ms))
                    .mul_f64((i - 1) as f64);
            builder = builder.at(
                IntroStage::ButtonFall(i),
                pause,
                ms(timings.button_fall_ms),
                Easing::BackOut,
            );
        }
    }

    builder.build()
}
