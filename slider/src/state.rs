//! Per-instance slider state and its transitions.
//!
//! `SliderState` is a plain owned record. The component keeps one inside a
//! signal and every event handler mutates it through `&mut self`; nothing in
//! here touches the DOM, so the whole interaction model is testable natively.

use crate::config::SliderConfig;
use crate::geometry::{self, Bounds};

/// Which of the two stacked images an event refers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ImageSide {
    /// Bottom layer
    Before,
    /// Top layer, revealed from the left
    After,
}

impl ImageSide {
    pub fn label(self) -> &'static str {
        match self {
            Self::Before => "Before",
            Self::After => "After",
        }
    }
}

/// The `(before, after)` image identifiers a state was created for.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SourcePair {
    pub before: String,
    pub after: String,
}

impl SourcePair {
    pub fn new(before: impl Into<String>, after: impl Into<String>) -> Self {
        Self {
            before: before.into(),
            after: after.into(),
        }
    }
}

/// One discrete keyboard step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyStep {
    Decrease,
    Increase,
}

impl KeyStep {
    /// Map a `KeyboardEvent.key` value to a step.
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "ArrowLeft" => Some(Self::Decrease),
            "ArrowRight" => Some(Self::Increase),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct SliderState {
    config: SliderConfig,
    sources: SourcePair,
    position: f64,
    dragging: bool,
    before_failed: bool,
    after_failed: bool,
    /// `clientX` of the press that started the drag, until the threshold
    /// has been crossed.
    press_origin: Option<f64>,
    /// `Touch.identifier` of the finger driving a touch drag.
    touch_id: Option<i32>,
}

impl SliderState {
    pub fn new(config: SliderConfig, sources: SourcePair) -> Self {
        Self {
            position: geometry::clamp_position(config.initial_position),
            config,
            sources,
            dragging: false,
            before_failed: false,
            after_failed: false,
            press_origin: None,
            touch_id: None,
        }
    }

    pub fn position(&self) -> f64 {
        self.position
    }

    /// `aria-valuenow`: the position rounded to a whole percent.
    pub fn aria_value(&self) -> u8 {
        self.position.round() as u8
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    pub fn has_failed(&self, side: ImageSide) -> bool {
        match side {
            ImageSide::Before => self.before_failed,
            ImageSide::After => self.after_failed,
        }
    }

    /// Both images are available, so the handle and the reveal are live.
    pub fn is_interactive(&self) -> bool {
        !self.before_failed && !self.after_failed
    }

    pub fn sources(&self) -> &SourcePair {
        &self.sources
    }

    pub fn config(&self) -> &SliderConfig {
        &self.config
    }

    /// Pointer pressed on the handle.
    pub fn begin_drag(&mut self, client_x: f64) {
        if !self.is_interactive() {
            return;
        }
        self.dragging = true;
        self.press_origin = if self.config.effective_threshold() > 0.0 {
            Some(client_x)
        } else {
            None
        };
        tracing::debug!(position = self.position, "drag started");
    }

    /// Finger pressed on the handle. Only that finger moves or releases
    /// the drag; other touches are ignored until it ends.
    pub fn begin_touch_drag(&mut self, client_x: f64, identifier: i32) {
        if self.dragging || !self.is_interactive() {
            return;
        }
        self.begin_drag(client_x);
        self.touch_id = Some(identifier);
    }

    /// Identifier of the finger driving the current drag, if it is a touch
    /// drag.
    pub fn active_touch(&self) -> Option<i32> {
        self.touch_id
    }

    /// Tracked pointer moved. Returns `true` when the position was updated.
    ///
    /// `bounds` is `None` when the container is not attached to the document
    /// yet; that event is dropped.
    pub fn drag_to(&mut self, client_x: f64, bounds: Option<Bounds>) -> bool {
        if !self.dragging {
            return false;
        }
        let Some(bounds) = bounds else {
            return false;
        };

        if let Some(origin) = self.press_origin {
            if (client_x - origin).abs() < self.config.effective_threshold() {
                return false;
            }
            self.press_origin = None;
        }

        self.position = geometry::position_from_pointer(client_x, bounds);
        true
    }

    /// Pointer released, cancelled, or tracking was lost. Always safe to call.
    pub fn end_drag(&mut self) {
        if self.dragging {
            tracing::debug!(position = self.position, "drag ended");
        }
        self.dragging = false;
        self.press_origin = None;
        self.touch_id = None;
    }

    /// Apply one keyboard step, clamped to the track.
    pub fn step(&mut self, step: KeyStep) {
        if !self.is_interactive() {
            return;
        }
        let delta = self.config.effective_step();
        let next = match step {
            KeyStep::Decrease => self.position - delta,
            KeyStep::Increase => self.position + delta,
        };
        self.position = geometry::clamp_position(next);
    }

    /// Handle a `keydown` on the focused handle. Returns `true` when the key
    /// was consumed and its default action should be suppressed.
    pub fn handle_key(&mut self, key: &str) -> bool {
        match KeyStep::from_key(key) {
            Some(step) if self.is_interactive() => {
                self.step(step);
                true
            }
            _ => false,
        }
    }

    /// The platform reported that one image could not be loaded.
    pub fn mark_failed(&mut self, side: ImageSide) {
        match side {
            ImageSide::Before => self.before_failed = true,
            ImageSide::After => self.after_failed = true,
        }
        self.end_drag();
        tracing::warn!(side = side.label(), src = %self.source(side), "image failed to load");
    }

    /// Re-key the state on a new image pair.
    ///
    /// Failure flags belong to a particular pair of load attempts, so they
    /// are cleared whenever either identifier changes. Position survives.
    /// Returns `true` when a reset happened.
    pub fn sync_sources(&mut self, sources: SourcePair) -> bool {
        if self.sources == sources {
            return false;
        }
        self.sources = sources;
        self.before_failed = false;
        self.after_failed = false;
        self.end_drag();
        true
    }

    fn source(&self, side: ImageSide) -> &str {
        match side {
            ImageSide::Before => &self.sources.before,
            ImageSide::After => &self.sources.after,
        }
    }
}
