use bevy::input::mouse::{AccumulatedMouseScroll, MouseScrollUnit};
use bevy::prelude::*;
use folio_core::{ViewRect, WHEEL_LINE_HEIGHT};
use folio_shell::nav::{NavState, SectionLayout};
use folio_shell::scroll::SmoothScroll;

use crate::page::{ScrollRoot, SectionAnchor};

/// Wheel delta in logical pixels, positive = content moves up
fn wheel_pixels(scroll: &AccumulatedMouseScroll) -> f32 {
    let dy = match scroll.unit {
        MouseScrollUnit::Line => scroll.delta.y * WHEEL_LINE_HEIGHT,
        MouseScrollUnit::Pixel => scroll.delta.y,
    };
    -dy
}

/// Mouse wheel drives the page. Any wheel input cancels a smooth scroll.
pub fn wheel_scroll_system(
    scroll: Res<AccumulatedMouseScroll>,
    smooth: Option<ResMut<SmoothScroll>>,
    mut root: Query<&mut ScrollPosition, With<ScrollRoot>>,
) {
    if scroll.delta.y == 0.0 {
        return;
    }
    let Ok(mut position) = root.get_single_mut() else {
        return;
    };
    if let Some(mut smooth) = smooth {
        if smooth.is_active() {
            smooth.cancel();
        }
    }
    // Layout clamps the far end
    position.offset_y = (position.offset_y + wheel_pixels(&scroll)).max(0.0);
}

pub fn smooth_scroll_system(
    time: Res<Time>,
    smooth: Option<ResMut<SmoothScroll>>,
    mut root: Query<&mut ScrollPosition, With<ScrollRoot>>,
) {
    let Some(mut smooth) = smooth else { return };
    if !smooth.is_active() {
        return;
    }
    let Ok(mut position) = root.get_single_mut() else {
        return;
    };
    if let Some(next) = smooth.advance(position.offset_y, time.delta_secs()) {
        position.offset_y = next;
    }
}

/// Node rectangle in logical viewport pixels
pub fn node_rect(node: &ComputedNode, transform: &GlobalTransform) -> ViewRect {
    logical_rect(
        node.size(),
        transform.translation().truncate(),
        node.inverse_scale_factor(),
    )
}

/// Physical-pixel size and center (as laid out by the UI) to a logical rect
fn logical_rect(physical_size: Vec2, physical_center: Vec2, inverse_scale_factor: f32) -> ViewRect {
    let size = physical_size * inverse_scale_factor;
    let center = physical_center * inverse_scale_factor;
    ViewRect::new(center.x - size.x * 0.5, center.y - size.y * 0.5, size.x, size.y)
}

/// Record where every section sits, then update the nav state from it
pub fn measure_sections(
    layout: Option<ResMut<SectionLayout>>,
    nav: Option<ResMut<NavState>>,
    sections: Query<(&SectionAnchor, &ComputedNode, &GlobalTransform)>,
    root: Query<&ScrollPosition, With<ScrollRoot>>,
) {
    let (Some(mut layout), Some(mut nav)) = (layout, nav) else {
        return;
    };
    layout.clear();
    for (anchor, node, transform) in &sections {
        if node.size().y > 0.0 {
            layout.set(anchor.0, node_rect(node, transform));
        }
    }

    let offset = current_offset(&root);
    let was_scrolled = nav.scrolled;
    if nav.on_scroll(offset, &layout) {
        debug!("Active section: {}", nav.active.anchor());
    }
    if nav.scrolled != was_scrolled {
        debug!("Nav bar {}", if nav.scrolled { "solid" } else { "transparent" });
    }
}

/// Offset of the page root, 0 before it exists
pub fn current_offset(root: &Query<&ScrollPosition, With<ScrollRoot>>) -> f32 {
    root.get_single().map(|p| p.offset_y).unwrap_or(0.0)
}
