//! Declarative stage timeline.
//!
//! A [`Timeline`] holds stages at absolute offsets, all measured from the
//! single zero time set by [`Timeline::play`]. Stages carry no callbacks;
//! the UI samples [`Timeline::value_of`] each frame and applies the value to
//! whatever visual property it drives. Offsets are precomputed, typically
//! with [`SequenceBuilder`] (which sums stage durations and explicit gaps),
//! so there is no feedback between concurrent stages.

use std::time::{Duration, Instant};

use super::easing::Easing;

/// One animated stage: eased progress from 0 to 1 over `duration`, starting
/// `offset` after the timeline's zero time.
#[derive(Debug, Clone, Copy)]
pub struct Stage<Id> {
    pub id: Id,
    pub offset: Duration,
    pub duration: Duration,
    pub easing: Easing,
}

#[derive(Debug, Clone)]
pub struct Timeline<Id> {
    stages: Vec<Stage<Id>>,
    started_at: Option<Instant>,
}

impl<Id: Copy + PartialEq> Timeline<Id> {
    pub fn new() -> Self {
        Self {
            stages: Vec::new(),
            started_at: None,
        }
    }

    /// Insert a stage, keeping stages sorted by offset. Stable for equal
    /// offsets.
    pub fn push(&mut self, stage: Stage<Id>) {
        let pos = self.stages.partition_point(|s| s.offset <= stage.offset);
        self.stages.insert(pos, stage);
    }

    pub fn stage_count(&self) -> usize {
        self.stages.len()
    }

    /// Time from zero until the last stage has run its full duration.
    pub fn total_duration(&self) -> Duration {
        self.stages
            .iter()
            .map(|s| s.offset + s.duration)
            .max()
            .unwrap_or(Duration::ZERO)
    }

    /// Set the shared zero time and begin playback.
    pub fn play(&mut self, now: Instant) {
        self.started_at = Some(now);
    }

    pub fn stop(&mut self) {
        self.started_at = None;
    }

    pub fn is_playing(&self) -> bool {
        self.started_at.is_some()
    }

    /// True once every stage has completed. A never-played timeline is not
    /// finished.
    pub fn finished(&self, now: Instant) -> bool {
        match self.started_at {
            Some(zero) => now.duration_since(zero) >= self.total_duration(),
            None => false,
        }
    }

    /// Whether the stage's offset has been reached.
    pub fn started(&self, id: Id, now: Instant) -> bool {
        let Some(zero) = self.started_at else {
            return false;
        };
        self.stages
            .iter()
            .any(|s| s.id == id && now.duration_since(zero) >= s.offset)
    }

    /// Eased progress of a stage: 0 before its offset (or before playback),
    /// 1 after `offset + duration`. Unknown ids read as 0.
    pub fn value_of(&self, id: Id, now: Instant) -> f32 {
        let Some(zero) = self.started_at else {
            return 0.0;
        };
        let Some(stage) = self.stages.iter().find(|s| s.id == id) else {
            return 0.0;
        };
        let elapsed = now.duration_since(zero);
        if elapsed < stage.offset {
            return 0.0;
        }
        if stage.duration.is_zero() {
            return 1.0;
        }
        let t = (elapsed - stage.offset).as_secs_f32() / stage.duration.as_secs_f32();
        stage.easing.apply(t)
    }
}

impl<Id: Copy + PartialEq> Default for Timeline<Id> {
    fn default() -> Self {
        Self::new()
    }
}

/// Builds a timeline by running a cursor forward: each `stage` starts at the
/// cursor and advances it by the stage's duration, `gap` advances it without
/// adding a stage, and `alongside` adds a stage at the cursor without moving
/// it. The cursor's final position is the sequence's configured total.
pub struct SequenceBuilder<Id> {
    timeline: Timeline<Id>,
    cursor: Duration,
}

impl<Id: Copy + PartialEq> SequenceBuilder<Id> {
    pub fn new() -> Self {
        Self {
            timeline: Timeline::new(),
            cursor: Duration::ZERO,
        }
    }

    /// Append a stage at the cursor and advance past it.
    #[must_use]
    pub fn stage(mut self, id: Id, duration: Duration, easing: Easing) -> Self {
        self.timeline.push(Stage {
            id,
            offset: self.cursor,
            duration,
            easing,
        });
        self.cursor += duration;
        self
    }

    /// Advance the cursor without adding a stage.
    #[must_use]
    pub fn gap(mut self, duration: Duration) -> Self {
        self.cursor += duration;
        self
    }

    /// Add a stage at the cursor without advancing it (runs alongside
    /// whatever follows).
    #[must_use]
    pub fn alongside(mut self, id: Id, duration: Duration, easing: Easing) -> Self {
        self.timeline.push(Stage {
            id,
            offset: self.cursor,
            duration,
            easing,
        });
        self
    }

    /// Add a stage at an absolute offset, leaving the cursor alone.
    #[must_use]
    pub fn at(mut self, id: Id, offset: Duration, duration: Duration, easing: Easing) -> Self {
        self.timeline.push(Stage {
            id,
            offset,
            duration,
            easing,
        });
        self
    }

    /// Current cursor position: the sum of appended durations and gaps.
    pub fn cursor(&self) -> Duration {
        self.cursor
    }

    pub fn build(self) -> Timeline<Id> {
        self.timeline
    }
}

impl<Id: Copy + PartialEq> Default for SequenceBuilder<Id> {
    fn default() -> Self {
        Self::new()
    }
}
