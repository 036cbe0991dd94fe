pub mod nav;
pub mod network;
pub mod pipeline;
pub mod scroll;
pub mod state;

pub use pipeline::{Settings, ShellPlugin, ShellSystems};
pub use state::AppState;
