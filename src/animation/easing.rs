//! Easing curves for the UI transitions. All curves map [0, 1] onto a
//! progress value with exact endpoints: `apply(0.0) == 0.0` and
//! `apply(1.0) == 1.0`. `BackOut` overshoots past 1.0 on the way in.

/// The curves used by the intro choreography and the hover tween.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Easing {
    Linear,
    QuadIn,
    QuadOut,
    SineInOut,
    /// Overshoots the target and settles back, for the button falls.
    BackOut,
}

impl Easing {
    /// Evaluate the curve at `t`, clamped to [0, 1] first.
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::QuadIn => t * t,
            Self::QuadOut => 1.0 - (1.0 - t) * (1.0 - t),
            Self::SineInOut => 0.5 - 0.5 * (std::f32::consts::PI * t).cos(),
            Self::BackOut => {
                const C1: f32 = 1.70158;
                const C3: f32 = C1 + 1.0;
                let u = t - 1.0;
                1.0 + C3 * u * u * u + C1 * u * u
            }
        }
    }
}
