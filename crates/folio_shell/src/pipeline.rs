use bevy::prelude::*;
use bevy::window::PrimaryWindow;
use folio_core::{Bounds, PageConfig};

use super::nav::{NavState, SectionLayout};
use super::network::ParticleNetwork;
use super::scroll::SmoothScroll;
use super::state::AppState;

/// Validated page configuration
#[derive(Resource, Debug, Clone, Default, Deref)]
pub struct Settings(pub PageConfig);

/// Ordering handles for systems that read shell state
#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShellSystems {
    /// Shell resources inserted (OnEnter)
    Mount,
    /// Particle network advanced for this frame (Update)
    Network,
}

/// Page lifecycle and per-frame animation state
pub struct ShellPlugin;

impl Plugin for ShellPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<Settings>()
            .add_systems(Startup, check_settings)
            .add_systems(Update, finish_boot.run_if(in_state(AppState::Boot)))
            .add_systems(OnEnter(AppState::Landing), mount_shell.in_set(ShellSystems::Mount))
            .add_systems(OnExit(AppState::Landing), unmount_shell)
            .add_systems(
                Update,
                (resize_network, network_tick.after(resize_network))
                    .in_set(ShellSystems::Network)
                    .run_if(in_state(AppState::Landing)),
            );
    }
}

/// Fall back to the built-in tuning when the supplied config is unusable
fn check_settings(mut settings: ResMut<Settings>) {
    if let Err(e) = settings.validate() {
        error!("Invalid page config ({}); using defaults", e);
        *settings = Settings::default();
    }
}

fn window_bounds(window: &Window) -> Bounds {
    Bounds::new(window.width(), window.height())
}

/// Leave Boot once the primary window has a usable size
fn finish_boot(
    window_query: Query<&Window, With<PrimaryWindow>>,
    mut next_state: ResMut<NextState<AppState>>,
) {
    let Ok(window) = window_query.get_single() else {
        return;
    };
    if window.width() > 0.0 && window.height() > 0.0 {
        next_state.set(AppState::Landing);
    }
}

fn mount_shell(
    mut commands: Commands,
    settings: Res<Settings>,
    window_query: Query<&Window, With<PrimaryWindow>>,
) {
    commands.insert_resource(NavState::new(&settings));
    commands.insert_resource(SectionLayout::default());
    commands.insert_resource(SmoothScroll::default());

    let Ok(window) = window_query.get_single() else {
        warn!("No primary window; particle background disabled");
        return;
    };
    let network = ParticleNetwork::new(&settings, window_bounds(window));
    info!(
        "Particle network mounted: {} particles, {} links, {:.0}x{:.0}",
        network.particles.len(),
        network.links.len(),
        network.bounds.width,
        network.bounds.height
    );
    commands.insert_resource(network);
}

fn unmount_shell(mut commands: Commands) {
    commands.remove_resource::<ParticleNetwork>();
    commands.remove_resource::<NavState>();
    commands.remove_resource::<SectionLayout>();
    commands.remove_resource::<SmoothScroll>();
    info!("Page unmounted");
}

/// Keep the drawing surface sized to the window
fn resize_network(
    network: Option<ResMut<ParticleNetwork>>,
    window_query: Query<&Window, (With<PrimaryWindow>, Changed<Window>)>,
) {
    let Some(mut network) = network else { return };
    let Ok(window) = window_query.get_single() else {
        return;
    };
    let bounds = window_bounds(window);
    if network.resize(bounds) {
        debug!("Particle surface resized to {:.0}x{:.0}", bounds.width, bounds.height);
    }
}

/// One animation step per rendered frame
fn network_tick(network: Option<ResMut<ParticleNetwork>>) {
    let Some(mut network) = network else { return };
    network.tick();
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy::state::app::StatesPlugin;

    fn test_app() -> App {
        let mut app = App::new();
        app.add_plugins((MinimalPlugins, StatesPlugin))
            .insert_resource(Settings(PageConfig {
                seed: Some(9),
                ..PageConfig::default()
            }))
            .init_state::<AppState>()
            .add_plugins(ShellPlugin);
        app.world_mut().spawn((Window::default(), PrimaryWindow));
        app
    }

    /// Run frames until the page is mounted
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

    #[test]
    fn test_mount_creates_network() {
        let mut app = test_app();
        mount(&mut app);

        let network = app.world().resource::<ParticleNetwork>();
        assert_eq!(network.particles.len(), 80);
        assert!(network.frame > 0, "tick should run while mounted");
        assert!(app.world().contains_resource::<NavState>());
    }

    #[test]
    fn test_unmount_stops_animation() {
        let mut app = test_app();
        mount(&mut app);
        unmount(&mut app);

        assert!(!app.world().contains_resource::<ParticleNetwork>());
        assert!(!app.world().contains_resource::<NavState>());
    }

    #[test]
    fn test_remount_starts_fresh() {
        let mut app = test_app();
        for _ in 0..3 {
            mount(&mut app);
            unmount(&mut app);
        }
        mount(&mut app);
        let network = app.world().resource::<ParticleNetwork>();
        assert_eq!(network.particles.len(), 80);
        assert!(network.frame <= 3, "frame counter carried over a remount");
    }

    #[test]
    fn test_invalid_settings_fall_back_to_defaults() {
        let mut app = App::new();
        app.add_plugins((MinimalPlugins, StatesPlugin))
            .insert_resource(Settings(PageConfig {
                link_distance: 0.0,
                ..PageConfig::default()
            }))
            .init_state::<AppState>()
            .add_plugins(ShellPlugin);
        app.update();

        assert_eq!(app.world().resource::<Settings>().0, PageConfig::default());
    }

    #[test]
    fn test_valid_settings_are_kept() {
        let mut app = test_app();
        app.update();
        assert_eq!(app.world().resource::<Settings>().seed, Some(9));
    }

    #[test]
    fn test_resize_updates_bounds() {
        let mut app = test_app();
        mount(&mut app);

        let mut windows = app
            .world_mut()
            .query_filtered::<&mut Window, With<PrimaryWindow>>();
        let mut window = windows.single_mut(app.world_mut());
        window.resolution.set(640.0, 480.0);
        app.update();

        let network = app.world().resource::<ParticleNetwork>();
        assert_eq!(network.bounds, Bounds::new(640.0, 480.0));
    }
}
