use bevy::prelude::*;
use bevy::window::PrimaryWindow;
use folio_core::LayoutClass;
use folio_shell::Settings;

/// Current layout class, tracked from the primary window width
#[derive(Resource, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CurrentLayout(pub LayoutClass);

/// Grid whose column count follows the layout class
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResponsiveGrid {
    pub narrow: u16,
    pub medium: u16,
    pub wide: u16,
}

impl ResponsiveGrid {
    pub const fn new(narrow: u16, medium: u16, wide: u16) -> Self {
        Self { narrow, medium, wide }
    }

    pub fn columns(&self, class: LayoutClass) -> u16 {
        match class {
            LayoutClass::Narrow => self.narrow,
            LayoutClass::Medium => self.medium,
            LayoutClass::Wide => self.wide,
        }
    }
}

/// Shown only at medium width and up (desktop nav links)
#[derive(Component)]
pub struct DesktopOnly;

/// Shown only below the mobile breakpoint (menu toggle)
#[derive(Component)]
pub struct MobileOnly;

pub fn track_layout_class(
    settings: Res<Settings>,
    window_query: Query<&Window, (With<PrimaryWindow>, Changed<Window>)>,
    mut current: ResMut<CurrentLayout>,
) {
    let Ok(window) = window_query.get_single() else {
        return;
    };
    let class = LayoutClass::from_width(window.width(), settings.mobile_breakpoint, settings.wide_breakpoint);
    if current.0 != class {
        debug!("Layout class {:?} at {:.0}px", class, window.width());
        current.0 = class;
    }
}

fn display_for(visible: bool) -> Display {
    if visible { Display::Flex } else { Display::None }
}

/// Re-apply column counts and visibility whenever the class changes, or new nodes appear
pub fn apply_layout_class(
    current: Res<CurrentLayout>,
    mut grids: Query<(Ref<ResponsiveGrid>, &mut Node), (Without<DesktopOnly>, Without<MobileOnly>)>,
    mut desktop: Query<(Ref<DesktopOnly>, &mut Node), Without<MobileOnly>>,
    mut mobile: Query<(Ref<MobileOnly>, &mut Node), Without<DesktopOnly>>,
) {
    let class = current.0;
    let all = current.is_changed();

    for (grid, mut node) in &mut grids {
        if all || grid.is_added() {
            node.grid_template_columns = RepeatedGridTrack::flex(grid.columns(class), 1.0);
        }
    }
    for (marker, mut node) in &mut desktop {
        if all || marker.is_added() {
            node.display = display_for(!class.is_narrow());
        }
    }
    for (marker, mut node) in &mut mobile {
        if all || marker.is_added() {
            node.display = display_for(class.is_narrow());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_columns_follow_class() {
        let grid = ResponsiveGrid::new(1, 2, 3);
        assert_eq!(grid.columns(LayoutClass::Narrow), 1);
        assert_eq!(grid.columns(LayoutClass::Medium), 2);
        assert_eq!(grid.columns(LayoutClass::Wide), 3);
    }

    #[test]
    fn test_narrow_window_hides_desktop_nodes() {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins)
            .init_resource::<Settings>()
            .init_resource::<CurrentLayout>()
            .add_systems(Update, (track_layout_class, apply_layout_class).chain());

        let mut window = Window::default();
        window.resolution.set(500.0, 800.0);
        app.world_mut().spawn((window, PrimaryWindow));
        let desktop = app.world_mut().spawn((Node::default(), DesktopOnly)).id();
        let mobile = app.world_mut().spawn((Node::default(), MobileOnly)).id();
        let grid = app
            .world_mut()
            .spawn((Node::default(), ResponsiveGrid::new(1, 2, 3)))
            .id();
        app.update();

        let one_column: Vec<RepeatedGridTrack> = RepeatedGridTrack::flex(1, 1.0);
        let world = app.world();
        assert_eq!(world.resource::<CurrentLayout>().0, LayoutClass::Narrow);
        assert_eq!(world.get::<Node>(desktop).map(|n| n.display), Some(Display::None));
        assert_eq!(world.get::<Node>(mobile).map(|n| n.display), Some(Display::Flex));
        assert_eq!(
            world.get::<Node>(grid).map(|n| n.grid_template_columns.clone()),
            Some(one_column)
        );
    }
}
