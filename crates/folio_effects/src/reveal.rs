/// Delayed entrance animation: fade in while sliding up from `offset` px
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Reveal {
    /// Seconds before the animation starts
    pub delay: f32,
    /// Animation length in seconds
    pub duration: f32,
    /// Initial downward offset in pixels (0 = fade only)
    pub offset: f32,
}

impl Reveal {
    pub const fn fade(delay: f32, duration: f32) -> Self {
        Self { delay, duration, offset: 0.0 }
    }

    pub const fn slide_up(delay: f32) -> Self {
        Self { delay, duration: 0.8, offset: 30.0 }
    }

    /// Eased progress at `elapsed` seconds since mount
    pub fn progress(&self, elapsed: f32) -> f32 {
        if self.duration <= 0.0 {
            return if elapsed >= self.delay { 1.0 } else { 0.0 };
        }
        let t = ((elapsed - self.delay) / self.duration).clamp(0.0, 1.0);
        ease_out_cubic(t)
    }

    /// (opacity, vertical offset) at `elapsed`
    pub fn sample(&self, elapsed: f32) -> (f32, f32) {
        let p = self.progress(elapsed);
        (p, self.offset * (1.0 - p))
    }

    pub fn is_done(&self, elapsed: f32) -> bool {
        elapsed >= self.delay + self.duration
    }
}

pub fn ease_out_cubic(t: f32) -> f32 {
    let inv = 1.0 - t;
    1.0 - inv * inv * inv
}

/// Lift above rest of a bouncing element: full `height` at whole periods, at rest mid-period
pub fn bounce_lift(elapsed: f32, period: f32, height: f32) -> f32 {
    if period <= 0.0 {
        return 0.0;
    }
    height * (std::f32::consts::PI * elapsed / period).cos().abs()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hidden_until_delay() {
        let r = Reveal::slide_up(0.4);
        assert_eq!(r.sample(0.0), (0.0, 30.0));
        assert_eq!(r.sample(0.4), (0.0, 30.0));
        assert!(!r.is_done(1.0));
    }

    #[test]
    fn test_settles_at_rest() {
        let r = Reveal::slide_up(0.2);
        let (alpha, offset) = r.sample(1.5);
        assert!((alpha - 1.0).abs() < 1e-6);
        assert!(offset.abs() < 1e-4);
        assert!(r.is_done(1.5));
    }

    #[test]
    fn test_fade_has_no_offset() {
        let r = Reveal::fade(0.6, 1.0);
        let (alpha, offset) = r.sample(1.1);
        assert!(alpha > 0.5 && alpha < 1.0);
        assert_eq!(offset, 0.0);
    }

    #[test]
    fn test_bounce_lift_cycle() {
        assert!((bounce_lift(0.0, 1.0, 8.0) - 8.0).abs() < 1e-5);
        assert!(bounce_lift(0.5, 1.0, 8.0).abs() < 1e-4);
        assert!((bounce_lift(3.0, 1.0, 8.0) - 8.0).abs() < 1e-3);
        for i in 0..100 {
            let lift = bounce_lift(i as f32 * 0.037, 1.0, 8.0);
            assert!((0.0..=8.0).contains(&lift));
        }
        assert_eq!(bounce_lift(0.3, 0.0, 8.0), 0.0);
    }
}
