use bevy::prelude::*;
use folio_core::{PageConfig, SectionId, ViewRect};

/// Latest measured section rectangles, in viewport coordinates
#[derive(Resource, Debug, Clone, Default)]
pub struct SectionLayout {
    rects: [Option<ViewRect>; 7],
}

impl SectionLayout {
    pub fn set(&mut self, section: SectionId, rect: ViewRect) {
        self.rects[section.index()] = Some(rect);
    }

    pub fn get(&self, section: SectionId) -> Option<ViewRect> {
        self.rects[section.index()]
    }

    pub fn clear(&mut self) {
        self.rects = Default::default();
    }
}

/// First section, in page order, whose rect crosses the section line
pub fn resolve_active_section(layout: &SectionLayout, section_line: f32) -> Option<SectionId> {
    SectionId::ALL
        .into_iter()
        .find(|s| layout.get(*s).is_some_and(|r| r.spans_y(section_line)))
}

/// View state owned by the page shell
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct NavState {
    pub active: SectionId,
    /// Scrolled past the threshold (nav bar goes solid)
    pub scrolled: bool,
    pub menu_open: bool,
    scroll_threshold: f32,
    section_line: f32,
}

impl Default for NavState {
    fn default() -> Self {
        Self::new(&PageConfig::default())
    }
}

impl NavState {
    pub fn new(config: &PageConfig) -> Self {
        Self {
            active: SectionId::Home,
            scrolled: false,
            menu_open: false,
            scroll_threshold: config.scroll_threshold,
            section_line: config.section_line,
        }
    }

    /// Recompute from the scroll offset and the current section rects.
    /// When no section crosses the section line (a gap between sections, or
    /// nothing laid out yet) the previous active section is kept.
    /// Returns true if the active section changed.
    pub fn on_scroll(&mut self, offset: f32, layout: &SectionLayout) -> bool {
        self.scrolled = offset > self.scroll_threshold;
        match resolve_active_section(layout, self.section_line) {
            Some(section) if section != self.active => {
                self.active = section;
                true
            }
            _ => false,
        }
    }

    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    /// Scroll offset that brings `section` to the top of the viewport.
    /// Closes the mobile menu. None if the section has not been laid out.
    pub fn navigate(&mut self, section: SectionId, layout: &SectionLayout, offset: f32) -> Option<f32> {
        let rect = layout.get(section)?;
        self.menu_open = false;
        Some((offset + rect.top).max(0.0))
    }
}
