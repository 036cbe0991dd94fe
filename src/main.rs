use bevy::prelude::*;
use folio_core::PageConfig;
use folio_core::content::PROFILE;
use folio_render::FolioRenderPlugin;
use folio_render::style::SLATE_950;
use folio_shell::{AppState, Settings, ShellPlugin};

fn main() {
    let mut app = App::new();
    app.add_plugins(DefaultPlugins.set(WindowPlugin {
        primary_window: Some(Window {
            title: format!("{} | {}", PROFILE.name, PROFILE.tagline),
            resolution: (1440.0, 900.0).into(),
            ..default()
        }),
        ..default()
    }));

    app.insert_resource(ClearColor(SLATE_950))
        .insert_resource(Settings(PageConfig::default()))
        .init_state::<AppState>()
        .add_plugins(ShellPlugin)
        .add_plugins(FolioRenderPlugin)
        .run();
}
