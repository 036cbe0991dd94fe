use bevy::prelude::*;
use folio_core::{SMOOTH_SCROLL_RATE, SMOOTH_SCROLL_SNAP, ViewRect};

/// In-flight smooth scroll of the page container
#[derive(Resource, Debug, Clone, Default)]
pub struct SmoothScroll {
    target: Option<f32>,
    last_written: Option<f32>,
}

impl SmoothScroll {
    pub fn start(&mut self, target: f32) {
        self.target = Some(target.max(0.0));
        self.last_written = None;
    }

    pub fn cancel(&mut self) {
        self.target = None;
        self.last_written = None;
    }

    pub fn is_active(&self) -> bool {
        self.target.is_some()
    }

    pub fn target(&self) -> Option<f32> {
        self.target
    }

    /// Offset to write this frame, or None when idle.
    /// If `current` differs from what was written last frame, something else
    /// moved the page (layout clamped it, or the user scrolled): give up.
    pub fn advance(&mut self, current: f32, dt: f32) -> Option<f32> {
        let target = self.target?;
        if let Some(last) = self.last_written {
            if (current - last).abs() > SMOOTH_SCROLL_SNAP {
                self.cancel();
                return None;
            }
        }

        let next = ease_toward(current, target, dt);
        if (target - next).abs() <= SMOOTH_SCROLL_SNAP {
            self.cancel();
            return Some(target);
        }
        self.last_written = Some(next);
        Some(next)
    }
}

/// Frame-rate independent exponential approach
pub fn ease_toward(current: f32, target: f32, dt: f32) -> f32 {
    let k = 1.0 - (-SMOOTH_SCROLL_RATE * dt.max(0.0)).exp();
    current + (target - current) * k
}

/// Fraction of `rect`'s height inside the vertical span [0, viewport_height]
pub fn intersection_ratio(rect: ViewRect, viewport_height: f32) -> f32 {
    let height = rect.height();
    if height <= 0.0 {
        return 0.0;
    }
    let visible = rect.bottom.min(viewport_height) - rect.top.max(0.0);
    (visible / height).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_converges_to_target() {
        let mut s = SmoothScroll::default();
        s.start(1200.0);
        let mut offset = 0.0;
        let mut frames = 0;
        while let Some(next) = s.advance(offset, 1.0 / 60.0) {
            assert!(next >= offset, "smooth scroll moved backwards");
            offset = next;
            frames += 1;
            assert!(frames < 600, "never converged");
        }
        assert_eq!(offset, 1200.0);
        assert!(!s.is_active());
    }

    #[test]
    fn test_clamped_by_layout_cancels() {
        let mut s = SmoothScroll::default();
        s.start(5000.0);
        let first = s.advance(0.0, 1.0 / 60.0).unwrap();
        assert!(first > 0.0);
        // Layout clamped the write back to the end of the page
        let clamped = first - 50.0;
        assert_eq!(s.advance(clamped, 1.0 / 60.0), None);
        assert!(!s.is_active());
    }

    #[test]
    fn test_negative_target_clamped() {
        let mut s = SmoothScroll::default();
        s.start(-40.0);
        assert_eq!(s.target(), Some(0.0));
    }

    #[test]
    fn test_intersection_ratio() {
        let vh = 800.0;
        assert_eq!(intersection_ratio(ViewRect::new(0.0, 100.0, 10.0, 100.0), vh), 1.0);
        assert_eq!(intersection_ratio(ViewRect::new(0.0, 900.0, 10.0, 100.0), vh), 0.0);
        assert_eq!(intersection_ratio(ViewRect::new(0.0, 750.0, 10.0, 100.0), vh), 0.5);
        assert_eq!(intersection_ratio(ViewRect::new(0.0, -75.0, 10.0, 100.0), vh), 0.25);
        assert_eq!(intersection_ratio(ViewRect::new(0.0, 10.0, 10.0, 0.0), vh), 0.0);
    }
}
