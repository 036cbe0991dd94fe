use serde::{Deserialize, Serialize};

/// Addressable page sections, in page order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SectionId {
    #[default]
    Home,
    About,
    Experience,
    Projects,
    Skills,
    Achievements,
    Contact,
}

impl SectionId {
    /// Fixed scan order for active-section detection
    pub const ALL: [SectionId; 7] = [
        Self::Home,
        Self::About,
        Self::Experience,
        Self::Projects,
        Self::Skills,
        Self::Achievements,
        Self::Contact,
    ];

    /// Anchor id, as used in `#fragment` links
    pub fn anchor(&self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::About => "about",
            Self::Experience => "experience",
            Self::Projects => "projects",
            Self::Skills => "skills",
            Self::Achievements => "achievements",
            Self::Contact => "contact",
        }
    }

    /// Label shown in the navigation bar
    pub fn label(&self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::About => "About",
            Self::Experience => "Experience",
            Self::Projects => "Projects",
            Self::Skills => "Skills",
            Self::Achievements => "Achievements",
            Self::Contact => "Contact",
        }
    }

    pub fn index(&self) -> usize {
        *self as usize
    }
}

/// Axis-aligned rectangle in viewport coordinates (origin top-left, y down)
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ViewRect {
    pub top: f32,
    pub bottom: f32,
    pub left: f32,
    pub right: f32,
}

impl ViewRect {
    pub fn new(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self {
            top,
            bottom: top + height,
            left,
            right: left + width,
        }
    }

    pub fn height(&self) -> f32 {
        self.bottom - self.top
    }

    pub fn width(&self) -> f32 {
        self.right - self.left
    }

    /// Whether the horizontal line `y` crosses this rect (edges inclusive)
    pub fn spans_y(&self, y: f32) -> bool {
        self.top <= y && y <= self.bottom
    }
}

/// Drawing surface size (the viewport)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub width: f32,
    pub height: f32,
}

impl Bounds {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// Layout class derived from the viewport width
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LayoutClass {
    /// Below the mobile breakpoint: single column, hamburger menu
    Narrow,
    /// Between the breakpoints
    Medium,
    /// At or above the wide breakpoint
    #[default]
    Wide,
}

impl LayoutClass {
    pub fn from_width(width: f32, mobile_breakpoint: f32, wide_breakpoint: f32) -> Self {
        if width < mobile_breakpoint {
            Self::Narrow
        } else if width < wide_breakpoint {
            Self::Medium
        } else {
            Self::Wide
        }
    }

    pub fn is_narrow(&self) -> bool {
        matches!(self, Self::Narrow)
    }
}
