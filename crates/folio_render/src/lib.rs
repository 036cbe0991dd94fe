pub mod camera;
pub mod counters;
pub mod links;
pub mod nav_bar;
pub mod page;
pub mod particles;
pub mod plugin;
pub mod responsive;
pub mod reveal;
pub mod scroll;
pub mod style;

pub use plugin::FolioRenderPlugin;
