use bevy::prelude::*;

/// Page lifecycle. Entering `Landing` mounts the page and its animations;
/// leaving it tears them down.
#[derive(States, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AppState {
    /// Waiting for the primary window to report a size
    #[default]
    Boot,
    Landing,
}
