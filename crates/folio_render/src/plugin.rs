use bevy::gizmos::config::GizmoConfigStore;
use bevy::prelude::*;
use folio_shell::{AppState, ShellSystems};

use super::camera;
use super::counters;
use super::links;
use super::nav_bar;
use super::page;
use super::particles;
use super::responsive::{self, CurrentLayout};
use super::reveal;
use super::scroll;

/// Draws the page: UI tree, nav bar, particle layer
pub struct FolioRenderPlugin;

impl Plugin for FolioRenderPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<CurrentLayout>()
            .add_systems(Startup, camera::spawn_camera)
            .add_systems(
                OnEnter(AppState::Landing),
                (
                    page::spawn_page,
                    nav_bar::spawn_nav_bar,
                    particles::spawn_particle_visuals.after(ShellSystems::Mount),
                ),
            )
            .add_systems(
                OnExit(AppState::Landing),
                (
                    page::despawn_page,
                    nav_bar::despawn_nav_bar,
                    particles::despawn_particle_visuals,
                ),
            )
            .add_systems(
                Update,
                (
                    responsive::track_layout_class,
                    responsive::apply_layout_class.after(responsive::track_layout_class),
                    scroll::wheel_scroll_system,
                    links::section_link_system,
                    scroll::smooth_scroll_system
                        .after(scroll::wheel_scroll_system)
                        .after(links::section_link_system),
                    scroll::measure_sections.after(scroll::smooth_scroll_system),
                    nav_bar::menu_toggle_system,
                    nav_bar::sync_nav_bar
                        .after(nav_bar::menu_toggle_system)
                        .after(links::section_link_system)
                        .after(scroll::measure_sections),
                    nav_bar::nav_item_color_system.after(scroll::measure_sections),
                    links::button_tint_system,
                    links::hover_text_system,
                    links::outbound_link_system,
                )
                    .run_if(in_state(AppState::Landing)),
            )
            .add_systems(
                Update,
                (
                    counters::observe_counters,
                    counters::tick_counters.after(counters::observe_counters),
                    reveal::animate_reveals,
                    reveal::bounce_scroll_hint,
                    particles::update_particle_visuals
                        .after(ShellSystems::Network)
                        .after(scroll::measure_sections),
                    particles::draw_particle_links
                        .after(ShellSystems::Network)
                        .after(scroll::measure_sections)
                        .run_if(resource_exists::<GizmoConfigStore>),
                )
                    .run_if(in_state(AppState::Landing)),
            );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy::input::mouse::{AccumulatedMouseScroll, MouseScrollUnit};
    use bevy::state::app::StatesPlugin;
    use bevy::window::PrimaryWindow;
    use folio_core::PageConfig;
    use folio_core::content::METRICS;
    use folio_effects::counter::CounterPhase;
    use folio_shell::Settings;
    use folio_shell::ShellPlugin;

    use crate::counters::CounterView;
    use crate::nav_bar::NavBarRoot;
    use crate::page::ScrollRoot;
    use crate::particles::ParticleDot;
    use crate::reveal::PageClock;

    fn test_app() -> App {
        let mut app = App::new();
        app.add_plugins((MinimalPlugins, StatesPlugin))
            .insert_resource(AccumulatedMouseScroll {
                unit: MouseScrollUnit::Line,
                delta: Vec2::ZERO,
            })
            .init_resource::<Assets<Mesh>>()
            .init_resource::<Assets<ColorMaterial>>()
            .insert_resource(Settings(PageConfig {
                seed: Some(3),
                ..PageConfig::default()
            }))
            .init_state::<AppState>()
            .add_plugins((ShellPlugin, FolioRenderPlugin));
        app.world_mut().spawn((Window::default(), PrimaryWindow));
        app
    }

    fn mount(app: &mut App) {
        for _ in 0..3 {
            app.update();
        }
        assert_eq!(*app.world().resource::<State<AppState>>().get(), AppState::Landing);
    }

    fn unmount(app: &mut App) {
        app.world_mut()
            .resource_mut::<NextState<AppState>>()
            .set(AppState::Boot);
        app.update();
    }

    fn count<C: Component>(app: &mut App) -> usize {
        app.world_mut().query::<&C>().iter(app.world()).count()
    }

    #[test]
    fn test_mount_builds_page() {
        let mut app = test_app();
        mount(&mut app);

        assert_eq!(count::<ParticleDot>(&mut app), 80);
        assert_eq!(count::<CounterView>(&mut app), METRICS.len());
        assert_eq!(count::<ScrollRoot>(&mut app), 1);
        assert_eq!(count::<NavBarRoot>(&mut app), 1);
        assert!(app.world().contains_resource::<PageClock>());
    }

    #[test]
    fn test_unmount_leaves_nothing_behind() {
        let mut app = test_app();
        mount(&mut app);
        unmount(&mut app);

        assert_eq!(count::<ParticleDot>(&mut app), 0);
        assert_eq!(count::<CounterView>(&mut app), 0);
        assert_eq!(count::<ScrollRoot>(&mut app), 0);
        assert_eq!(count::<NavBarRoot>(&mut app), 0);
        assert!(!app.world().contains_resource::<PageClock>());
    }

    #[test]
    fn test_remount_resets_counters() {
        let mut app = test_app();
        mount(&mut app);

        let mut views = app.world_mut().query::<&mut CounterView>();
        for mut view in views.iter_mut(app.world_mut()) {
            view.counter.observe(1.0);
        }
        app.update();
        let mut phases = app.world_mut().query::<&CounterView>();
        assert!(
            phases
                .iter(app.world())
                .all(|v| v.counter.phase() != CounterPhase::Unseen)
        );

        unmount(&mut app);
        mount(&mut app);

        assert_eq!(count::<ParticleDot>(&mut app), 80);
        let mut phases = app.world_mut().query::<&CounterView>();
        let phases: Vec<_> = phases.iter(app.world()).map(|v| v.counter.phase()).collect();
        assert_eq!(phases.len(), METRICS.len());
        assert!(phases.iter().all(|p| *p == CounterPhase::Unseen));
    }
}
