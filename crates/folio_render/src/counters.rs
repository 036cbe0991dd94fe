use bevy::prelude::*;
use bevy::window::PrimaryWindow;
use folio_core::content::METRICS;
use folio_effects::counter::AnimatedCounter;
use folio_shell::scroll::intersection_ratio;

use crate::scroll::node_rect;

/// Text entity showing an animated metric
#[derive(Component, Debug, Clone)]
pub struct CounterView {
    /// Index into `METRICS`
    pub metric: usize,
    pub counter: AnimatedCounter,
}

/// Start each counter the first time half of it is on screen
pub fn observe_counters(
    window_query: Query<&Window, With<PrimaryWindow>>,
    mut query: Query<(&mut CounterView, &ComputedNode, &GlobalTransform)>,
) {
    let Ok(window) = window_query.get_single() else {
        return;
    };
    for (mut view, node, transform) in &mut query {
        if view.counter.is_settled() || node.size().y <= 0.0 {
            continue;
        }
        let ratio = intersection_ratio(node_rect(node, transform), window.height());
        if view.counter.observe(ratio) {
            debug!("Counter {} visible ({:.2})", view.metric, ratio);
        }
    }
}

/// Advance running counters and refresh their text
pub fn tick_counters(time: Res<Time>, mut query: Query<(&mut CounterView, &mut Text)>) {
    let now_ms = time.elapsed_secs_f64() * 1000.0;
    for (mut view, mut text) in &mut query {
        if !view.counter.tick(now_ms) {
            continue;
        }
        if let Some(metric) = METRICS.get(view.metric) {
            text.0 = metric.display(view.counter.value());
        }
        if view.counter.is_settled() {
            debug!("Counter {} settled at {}", view.metric, view.counter.value());
        }
    }
}
