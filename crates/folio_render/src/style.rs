use bevy::prelude::*;
use folio_core::content::Tone;

// Slate / emerald palette
pub const SLATE_950: Color = Color::srgb(0.008, 0.024, 0.090);
pub const SLATE_900: Color = Color::srgb(0.059, 0.090, 0.165);
pub const SLATE_800: Color = Color::srgb(0.118, 0.161, 0.231);
pub const SLATE_500: Color = Color::srgb(0.392, 0.455, 0.545);
pub const SLATE_400: Color = Color::srgb(0.580, 0.639, 0.722);
pub const SLATE_300: Color = Color::srgb(0.796, 0.835, 0.882);
pub const SLATE_100: Color = Color::srgb(0.945, 0.961, 0.976);
pub const EMERALD_400: Color = Color::srgb(0.204, 0.827, 0.600);
pub const EMERALD_300: Color = Color::srgb(0.431, 0.906, 0.718);
pub const AMBER_400: Color = Color::srgb(0.984, 0.749, 0.141);
pub const BLUE_400: Color = Color::srgb(0.376, 0.647, 0.980);

pub const TRANSPARENT: Color = Color::NONE;

pub fn with_alpha(color: Color, alpha: f32) -> Color {
    color.with_alpha(alpha)
}

/// Solid nav bar once the page is scrolled
pub fn nav_background(scrolled: bool) -> Color {
    if scrolled {
        with_alpha(SLATE_950, 0.95)
    } else {
        TRANSPARENT
    }
}

/// Card surface used by most sections
pub fn card_background() -> Color {
    with_alpha(SLATE_900, 0.5)
}

pub fn tone_color(tone: Tone) -> Color {
    match tone {
        Tone::Emerald => EMERALD_400,
        Tone::Amber => AMBER_400,
        Tone::Blue => BLUE_400,
    }
}

/// Font sizes
pub const TEXT_XS: f32 = 12.0;
pub const TEXT_SM: f32 = 14.0;
pub const TEXT_BASE: f32 = 16.0;
pub const TEXT_LG: f32 = 18.0;
pub const TEXT_XL: f32 = 20.0;
pub const TEXT_2XL: f32 = 24.0;
pub const TEXT_5XL: f32 = 48.0;
pub const TEXT_7XL: f32 = 72.0;

/// Content column width for most sections
pub const CONTENT_WIDTH: f32 = 1152.0;
/// Narrower column for the contact section
pub const NARROW_CONTENT_WIDTH: f32 = 896.0;

pub fn font(size: f32) -> TextFont {
    TextFont {
        font_size: size,
        ..default()
    }
}
