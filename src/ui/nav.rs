//! Navigation buttons.
//!
//! Two animations meet here: the hover tween (font size eases between the
//! configured small and large sizes via egui's shared animation clock) and
//! the intro stagger (the first button fades in, the rest drop down from
//! above at their timeline offsets).

use std::time::Instant;

use egui::{Align, Layout, RichText, Ui, vec2};

use crate::animation::Timeline;
use crate::animation::intro::IntroStage;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavTarget {
    WadReader,
    About,
}

pub const NAV_ITEMS: [(NavTarget, &str); 2] = [
    (NavTarget::WadReader, "WAD reader"),
    (NavTarget::About, "About"),
];

const BUTTON_HEIGHT: f32 = 30.0;
const DROP_HEIGHT: f32 = 36.0;

/// Hover tween parameters, from [`crate::config::Settings`].
pub struct NavStyle {
    pub font_small: f32,
    pub font_large: f32,
    pub hover_tween_secs: f32,
}

pub fn show(
    ui: &mut Ui,
    selected: NavTarget,
    style: &NavStyle,
    intro: &Timeline<IntroStage>,
    now: Instant,
) -> Option<NavTarget> {
    let mut action = None;

    ui.with_layout(Layout::top_down(Align::Min), |ui| {
        for (index, (target, title)) in NAV_ITEMS.iter().enumerate() {
            let (opacity, rise) = intro_pose(intro, index, now);

            let hover_id = egui::Id::new(("nav-hover", index));
            let hovered = ui
                .ctx()
                .data(|d| d.get_temp::<bool>(hover_id).unwrap_or(false));
            let target_size = if hovered {
                style.font_large
            } else {
                style.font_small
            };
            let font_size = ui.ctx().animate_value_with_time(
                hover_id.with("font"),
                target_size,
                style.hover_tween_secs,
            );

            let mut text = RichText::new(*title).size(font_size);
            if *target == selected {
                text = text.strong().underline();
            }

            let (_, slot) = ui.allocate_space(vec2(ui.available_width(), BUTTON_HEIGHT));
            let rect = slot.translate(vec2(0.0, -rise * DROP_HEIGHT));

            let response = ui
                .scope(|ui| {
                    ui.set_opacity(opacity);
                    ui.put(rect, egui::Button::new(text).frame(false))
                })
                .inner;

            ui.ctx()
                .data_mut(|d| d.insert_temp(hover_id, response.hovered()));
            if response.clicked() {
                action = Some(*target);
            }
        }
    });

    action
}

/// Where button `index` sits in the intro: its opacity and how far above its
/// resting place it still is (as a fraction of the drop height). Button 0
/// fades; the rest snap visible when their fall starts and ease down.
fn intro_pose(intro: &Timeline<IntroStage>, index: usize, now: Instant) -> (f32, f32) {
    if !intro.is_playing() {
        return (1.0, 0.0);
    }
    if index == 0 {
        (intro.value_of(IntroStage::ButtonFadeIn, now), 0.0)
    } else {
        let fall = intro.value_of(IntroStage::ButtonFall(index), now);
        let opacity = if intro.started(IntroStage::ButtonFall(index), now) {
            1.0
        } else {
            0.0
        };
        (opacity, 1.0 - fall)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animation::intro::intro_timeline;
    use crate::config::IntroTimings;
    use std::time::Duration;

    #[test]
    fn buttons_hold_position_once_the_intro_is_over() {
        let intro = intro_timeline(&IntroTimings::default(), NAV_ITEMS.len());
        // Never played: treated as settled so the UI is usable regardless.
        let (opacity, rise) = intro_pose(&intro, 1, Instant::now());
        assert_eq!((opacity, rise), (1.0, 0.0));
    }

    #[test]
    fn later_buttons_stay_hidden_until_their_fall_begins() {
        let mut intro = intro_timeline(&IntroTimings::default(), NAV_ITEMS.len());
        let zero = Instant::now();
        intro.play(zero);

        // Mid fade-in: button 0 partially visible, button 1 hidden above.
        let now = zero + Duration::from_millis(200);
        let (opacity0, rise0) = intro_pose(&intro, 0, now);
        assert!(opacity0 > 0.0 && opacity0 < 1.0);
        assert_eq!(rise0, 0.0);

        let (opacity1, rise1) = intro_pose(&intro, 1, now);
        assert_eq!(opacity1, 0.0);
        assert_eq!(rise1, 1.0);

        // Long after the intro: everything resting and opaque.
        let now = zero + Duration::from_secs(10);
        assert_eq!(intro_pose(&intro, 0, now), (1.0, 0.0));
        assert_eq!(intro_pose(&intro, 1, now), (1.0, 0.0));
    }
}
