//! Tuning knobs and pass-through image hints.

use serde::Deserialize;

/// Tuning constants for a slider instance.
///
/// Deserialisable so a site can keep them next to its content, e.g.
///
/// ```toml
/// [slider]
/// keyboard_step = 5.0
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct SliderConfig {
    /// Percentage points moved per arrow key press
    pub keyboard_step: f64,
    /// Position before any interaction, in percent
    pub initial_position: f64,
    /// Horizontal distance in CSS px the pointer must travel from the press
    /// point before moves start updating the position. The drag itself
    /// (faded labels, window tracking) begins on press regardless; only
    /// position updates wait. `0.0` reacts to the first move.
    pub drag_threshold: f64,
}

impl SliderConfig {
    pub const DEFAULT_KEYBOARD_STEP: f64 = 2.0;
    pub const DEFAULT_INITIAL_POSITION: f64 = 50.0;
    pub const DEFAULT_DRAG_THRESHOLD: f64 = 0.0;

    /// Step size guarded against negative or non-finite values.
    pub(crate) fn effective_step(&self) -> f64 {
        if self.keyboard_step.is_finite() {
            self.keyboard_step.abs()
        } else {
            Self::DEFAULT_KEYBOARD_STEP
        }
    }

    pub(crate) fn effective_threshold(&self) -> f64 {
        if self.drag_threshold.is_finite() {
            self.drag_threshold.max(0.0)
        } else {
            Self::DEFAULT_DRAG_THRESHOLD
        }
    }
}

impl Default for SliderConfig {
    fn default() -> Self {
        Self {
            keyboard_step: Self::DEFAULT_KEYBOARD_STEP,
            initial_position: Self::DEFAULT_INITIAL_POSITION,
            drag_threshold: Self::DEFAULT_DRAG_THRESHOLD,
        }
    }
}

/// Value of the `<img loading>` attribute.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LoadingHint {
    #[default]
    Lazy,
    Eager,
}

impl LoadingHint {
    pub fn as_attr(self) -> &'static str {
        match self {
            Self::Lazy => "lazy",
            Self::Eager => "eager",
        }
    }
}

/// Value of the `<img fetchpriority>` attribute. Advisory only.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FetchPriority {
    High,
    Low,
    #[default]
    Auto,
}

impl FetchPriority {
    pub fn as_attr(self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Low => "low",
            Self::Auto => "auto",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn defaults_match_documented_constants() {
        let config = SliderConfig::default();
        assert_eq!(config.keyboard_step, 2.0);
        assert_eq!(config.initial_position, 50.0);
        assert_eq!(config.drag_threshold, 0.0);
        assert_eq!(LoadingHint::default(), LoadingHint::Lazy);
        assert_eq!(FetchPriority::default(), FetchPriority::Auto);
    }

    #[test]
    fn partial_toml_falls_back_to_defaults() {
        let config: SliderConfig = toml::from_str("keyboard_step = 5.0").unwrap();
        assert_eq!(
            config,
            SliderConfig {
                keyboard_step: 5.0,
                ..SliderConfig::default()
            }
        );
    }

    #[test]
    fn hints_parse_from_lowercase() {
        #[derive(Deserialize)]
        struct Hints {
            loading: LoadingHint,
            fetch_priority: FetchPriority,
        }

        let hints: Hints = toml::from_str("loading = \"eager\"\nfetch_priority = \"high\"").unwrap();
        assert_eq!(hints.loading.as_attr(), "eager");
        assert_eq!(hints.fetch_priority.as_attr(), "high");
    }

    #[test]
    fn hostile_tuning_values_are_sanitised() {
        let config = SliderConfig {
            keyboard_step: -3.0,
            drag_threshold: f64::NAN,
            ..SliderConfig::default()
        };
        assert_eq!(config.effective_step(), 3.0);
        assert_eq!(config.effective_threshold(), 0.0);
    }
}
