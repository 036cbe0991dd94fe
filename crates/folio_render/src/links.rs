use bevy::prelude::*;
use folio_core::SectionId;
use folio_shell::nav::{NavState, SectionLayout};
use folio_shell::scroll::SmoothScroll;

use crate::page::ScrollRoot;
use crate::scroll::current_offset;

/// Button that hands a URL (https or mailto) to the OS
#[derive(Component, Debug, Clone, Copy)]
pub struct OutboundLink(pub &'static str);

/// Button that scrolls the page to a section
#[derive(Component, Debug, Clone, Copy)]
pub struct SectionLink(pub SectionId);

/// Background colors for a button's idle and hovered states
#[derive(Component, Debug, Clone, Copy)]
pub struct ButtonTint {
    pub normal: Color,
    pub hovered: Color,
}

pub fn button_tint_system(
    mut query: Query<(&Interaction, &ButtonTint, &mut BackgroundColor), Changed<Interaction>>,
) {
    for (interaction, tint, mut bg) in &mut query {
        *bg = match interaction {
            Interaction::Hovered | Interaction::Pressed => tint.hovered.into(),
            Interaction::None => tint.normal.into(),
        };
    }
}

/// Label colors for a button's idle and hovered states
#[derive(Component, Debug, Clone, Copy)]
pub struct HoverText {
    pub normal: Color,
    pub hovered: Color,
}

pub fn hover_text_system(
    buttons: Query<(&Interaction, &HoverText, &Children), Changed<Interaction>>,
    mut labels: Query<&mut TextColor>,
) {
    for (interaction, tint, children) in &buttons {
        let color = match interaction {
            Interaction::Hovered | Interaction::Pressed => tint.hovered,
            Interaction::None => tint.normal,
        };
        for child in children.iter() {
            if let Ok(mut text_color) = labels.get_mut(*child) {
                text_color.0 = color;
            }
        }
    }
}

pub fn outbound_link_system(query: Query<(&Interaction, &OutboundLink), Changed<Interaction>>) {
    for (interaction, link) in &query {
        if *interaction != Interaction::Pressed {
            continue;
        }
        match open::that(link.0) {
            Ok(()) => info!("Opened {}", link.0),
            Err(e) => warn!("Failed to open {}: {}", link.0, e),
        }
    }
}

/// Start a smooth scroll toward `section`. Closes the mobile menu.
pub fn scroll_to_section(
    section: SectionId,
    nav: &mut NavState,
    layout: &SectionLayout,
    smooth: &mut SmoothScroll,
    offset: f32,
) {
    match nav.navigate(section, layout, offset) {
        Some(target) => {
            debug!("Scrolling to {} at {:.0}", section.anchor(), target);
            smooth.start(target);
        }
        None => debug!("Section {} not laid out yet", section.anchor()),
    }
}

pub fn section_link_system(
    query: Query<(&Interaction, &SectionLink), Changed<Interaction>>,
    nav: Option<ResMut<NavState>>,
    layout: Option<Res<SectionLayout>>,
    smooth: Option<ResMut<SmoothScroll>>,
    root: Query<&ScrollPosition, With<ScrollRoot>>,
) {
    let (Some(mut nav), Some(layout), Some(mut smooth)) = (nav, layout, smooth) else {
        return;
    };
    let offset = current_offset(&root);

    for (interaction, link) in &query {
        if *interaction == Interaction::Pressed {
            scroll_to_section(link.0, &mut nav, &layout, &mut smooth, offset);
        }
    }
}
