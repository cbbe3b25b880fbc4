//! What the slider draws for a given state.
//!
//! The component is a thin mapping from [`Frame`] to DOM nodes, so the
//! "handle only exists when both images loaded" rule lives here and is
//! checked without a browser.

use crate::geometry::{round_percent, MAX_POSITION};
use crate::state::{ImageSide, SliderState};

/// Content of one image region.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Region {
    Image,
    Placeholder,
}

impl Region {
    fn for_side(state: &SliderState, side: ImageSide) -> Self {
        if state.has_failed(side) {
            Self::Placeholder
        } else {
            Self::Image
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Frame {
    /// Both images loaded (or still loading): clipped after layer, handle,
    /// labels.
    Interactive {
        /// CSS `clip-path` for the after layer
        clip_path: String,
        /// CSS `left` for the handle
        handle_left: String,
        /// Labels fade out while dragging
        labels_visible: bool,
    },
    /// At least one side failed: static two-region layout, nothing to drag.
    Fallback { before: Region, after: Region },
}

impl Frame {
    pub fn from_state(state: &SliderState) -> Self {
        if state.is_interactive() {
            Self::Interactive {
                clip_path: clip_path(state.position()),
                handle_left: handle_left(state.position()),
                labels_visible: !state.is_dragging(),
            }
        } else {
            Self::Fallback {
                before: Region::for_side(state, ImageSide::Before),
                after: Region::for_side(state, ImageSide::After),
            }
        }
    }

    pub fn has_handle(&self) -> bool {
        matches!(self, Self::Interactive { .. })
    }

    pub fn clip_path(&self) -> Option<&str> {
        match self {
            Self::Interactive { clip_path, .. } => Some(clip_path.as_str()),
            Self::Fallback { .. } => None,
        }
    }

    pub fn handle_left(&self) -> Option<&str> {
        match self {
            Self::Interactive { handle_left, .. } => Some(handle_left.as_str()),
            Self::Fallback { .. } => None,
        }
    }

    /// BEFORE/AFTER labels are only drawn on the interactive frame.
    pub fn labels_visible(&self) -> bool {
        matches!(
            self,
            Self::Interactive {
                labels_visible: true,
                ..
            }
        )
    }

    pub fn region(&self, side: ImageSide) -> Region {
        match (self, side) {
            (Self::Interactive { .. }, _) => Region::Image,
            (Self::Fallback { before, .. }, ImageSide::Before) => *before,
            (Self::Fallback { after, .. }, ImageSide::After) => *after,
        }
    }
}

/// Clip the after layer to `[0, position]` of the container width.
pub fn clip_path(position: f64) -> String {
    let hidden = round_percent(MAX_POSITION - round_percent(position));
    format!("inset(0 {hidden}% 0 0)")
}

pub fn handle_left(position: f64) -> String {
    format!("{}%", round_percent(position))
}

pub fn placeholder_caption(side: ImageSide) -> String {
    format!("{} image unavailable", side.label())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SliderConfig;
    use crate::state::SourcePair;
    use pretty_assertions::assert_eq;

    fn state() -> SliderState {
        SliderState::new(SliderConfig::default(), SourcePair::new("a.jpg", "b.jpg"))
    }

    #[test]
    fn clip_path_tracks_position() {
        assert_eq!(clip_path(0.0), "inset(0 100% 0 0)");
        assert_eq!(clip_path(25.0), "inset(0 75% 0 0)");
        assert_eq!(clip_path(100.0), "inset(0 0% 0 0)");
        assert_eq!(clip_path(33.333), "inset(0 66.67% 0 0)");
    }

    #[test]
    fn handle_sits_on_clip_boundary() {
        assert_eq!(handle_left(50.0), "50%");
        assert_eq!(handle_left(12.346), "12.35%");
    }

    #[test]
    fn initial_frame_is_interactive_at_midpoint() {
        assert_eq!(
            Frame::from_state(&state()),
            Frame::Interactive {
                clip_path: "inset(0 50% 0 0)".into(),
                handle_left: "50%".into(),
                labels_visible: true,
            }
        );
    }

    #[test]
    fn labels_hide_while_dragging() {
        let mut state = state();
        state.begin_drag(0.0);
        let Frame::Interactive { labels_visible, .. } = Frame::from_state(&state) else {
            panic!("expected interactive frame");
        };
        assert!(!labels_visible);
    }

    #[test]
    fn before_failure_falls_back_without_handle() {
        let mut state = state();
        state.mark_failed(ImageSide::Before);
        let frame = Frame::from_state(&state);

        assert!(!frame.has_handle());
        assert!(!frame.labels_visible());
        assert_eq!(frame.clip_path(), None);
        assert_eq!(frame.region(ImageSide::Before), Region::Placeholder);
        assert_eq!(frame.region(ImageSide::After), Region::Image);
        assert_eq!(
            frame,
            Frame::Fallback {
                before: Region::Placeholder,
                after: Region::Image,
            }
        );
    }

    #[test]
    fn both_failures_show_two_placeholders() {
        let mut state = state();
        state.mark_failed(ImageSide::After);
        state.mark_failed(ImageSide::Before);
        assert_eq!(
            Frame::from_state(&state),
            Frame::Fallback {
                before: Region::Placeholder,
                after: Region::Placeholder,
            }
        );
    }

    #[test]
    fn placeholder_caption_names_the_side() {
        assert_eq!(placeholder_caption(ImageSide::Before), "Before image unavailable");
        assert_eq!(placeholder_caption(ImageSide::After), "After image unavailable");
    }
}
