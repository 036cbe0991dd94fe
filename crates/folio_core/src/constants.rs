// Units are logical pixels unless noted. Particle motion is per rendered
// frame, not per second.

/// Particles in the hero background
pub const PARTICLE_COUNT: u32 = 80;

/// Distance under which two particles are linked
pub const LINK_DISTANCE: f32 = 120.0;

/// Link opacity at zero distance
pub const LINK_MAX_OPACITY: f32 = 0.2;

/// Velocity components are drawn from (-range/2, range/2)
pub const PARTICLE_SPEED_RANGE: f32 = 0.5;

/// Particle radius lower bound
pub const PARTICLE_MIN_RADIUS: f32 = 1.0;

/// Particle radius spread above the lower bound
pub const PARTICLE_RADIUS_SPREAD: f32 = 2.0;

/// Particle fill color (rgba, 0-1)
pub const PARTICLE_COLOR: [f32; 4] = [100.0 / 255.0, 1.0, 218.0 / 255.0, 0.5];

/// Opacity of the whole particle layer
pub const PARTICLE_LAYER_OPACITY: f32 = 0.3;

/// Scroll offset past which the nav bar turns solid
pub const SCROLL_THRESHOLD: f32 = 50.0;

/// Section line for active-section detection (viewport y)
pub const SECTION_LINE: f32 = 100.0;

/// Counter animation length (ms)
pub const COUNTER_DURATION_MS: f64 = 2000.0;

/// Intersection ratio at which a counter becomes visible
pub const VISIBILITY_THRESHOLD: f32 = 0.5;

/// Mobile/desktop split (md breakpoint)
pub const MOBILE_BREAKPOINT: f32 = 768.0;

/// Widest grid layout kicks in here (lg breakpoint)
pub const WIDE_BREAKPOINT: f32 = 1024.0;

/// Pixels scrolled per mouse-wheel line
pub const WHEEL_LINE_HEIGHT: f32 = 40.0;

/// Smooth scroll convergence rate (1/s)
pub const SMOOTH_SCROLL_RATE: f32 = 10.0;

/// Smooth scroll snaps to target within this distance
pub const SMOOTH_SCROLL_SNAP: f32 = 0.5;

/// Height of the fixed nav bar
pub const NAV_BAR_HEIGHT: f32 = 72.0;
