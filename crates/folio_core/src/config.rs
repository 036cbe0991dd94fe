use serde::{Deserialize, Serialize};

use crate::constants::*;

/// Page configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageConfig {
    /// Number of particles in the hero background
    pub particle_count: u32,
    /// Maximum distance at which two particles are linked
    pub link_distance: f32,
    /// Opacity of a link between two coincident particles
    pub link_max_opacity: f32,
    /// Width of the velocity range per axis, centered on zero (px per frame)
    pub max_speed: f32,
    /// Random seed for the particle layout (None = fresh entropy per mount)
    pub seed: Option<u64>,
    /// Opacity multiplier for the whole particle layer
    pub layer_opacity: f32,
    /// Scroll offset past which the nav bar gets its solid background
    pub scroll_threshold: f32,
    /// Viewport y coordinate used to pick the active section
    pub section_line: f32,
    /// Count-up duration for metric counters (ms)
    pub counter_duration_ms: f64,
    /// Visible fraction needed before a counter starts (0.0 - 1.0)
    pub visibility_threshold: f32,
    /// Below this logical width the mobile menu replaces the nav links
    pub mobile_breakpoint: f32,
    /// At or above this logical width grids use their widest layout
    pub wide_breakpoint: f32,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            particle_count: PARTICLE_COUNT,
            link_distance: LINK_DISTANCE,
            link_max_opacity: LINK_MAX_OPACITY,
            max_speed: PARTICLE_SPEED_RANGE,
            seed: None,
            layer_opacity: PARTICLE_LAYER_OPACITY,
            scroll_threshold: SCROLL_THRESHOLD,
            section_line: SECTION_LINE,
            counter_duration_ms: COUNTER_DURATION_MS,
            visibility_threshold: VISIBILITY_THRESHOLD,
            mobile_breakpoint: MOBILE_BREAKPOINT,
            wide_breakpoint: WIDE_BREAKPOINT,
        }
    }
}

impl PageConfig {
    /// Reject values the animations cannot run with
    pub fn validate(&self) -> Result<(), String> {
        if self.link_distance <= 0.0 {
            return Err(format!("link_distance must be positive, got {}", self.link_distance));
        }
        if !(0.0..=1.0).contains(&self.link_max_opacity) {
            return Err(format!(
                "link_max_opacity must be within 0..=1, got {}",
                self.link_max_opacity
            ));
        }
        if !(0.0..=1.0).contains(&self.layer_opacity) {
            return Err(format!("layer_opacity must be within 0..=1, got {}", self.layer_opacity));
        }
        if self.max_speed < 0.0 {
            return Err(format!("max_speed must not be negative, got {}", self.max_speed));
        }
        if self.counter_duration_ms <= 0.0 {
            return Err(format!(
                "counter_duration_ms must be positive, got {}",
                self.counter_duration_ms
            ));
        }
        if !(0.0..=1.0).contains(&self.visibility_threshold) {
            return Err(format!(
                "visibility_threshold must be within 0..=1, got {}",
                self.visibility_threshold
            ));
        }
        if self.mobile_breakpoint > self.wide_breakpoint {
            return Err(format!(
                "mobile_breakpoint ({}) is wider than wide_breakpoint ({})",
                self.mobile_breakpoint, self.wide_breakpoint
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert!(PageConfig::default().validate().is_ok());
    }

    #[test]
    fn test_rejects_non_positive_link_distance() {
        let config = PageConfig {
            link_distance: 0.0,
            ..PageConfig::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.contains("link_distance"), "{}", err);
    }

    #[test]
    fn test_rejects_inverted_breakpoints() {
        let config = PageConfig {
            mobile_breakpoint: 1200.0,
            ..PageConfig::default()
        };
        assert!(config.validate().is_err());
    }
}
