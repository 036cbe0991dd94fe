use bevy::prelude::*;

/// The single 2D camera: draws the particle layer and hosts the UI
#[derive(Component)]
pub struct PageCamera;

pub fn spawn_camera(mut commands: Commands) {
    commands.spawn((Camera2d, IsDefaultUiCamera, PageCamera));
}
