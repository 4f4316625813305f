pub mod app;
pub mod catalog;
pub mod constants;
pub mod controls;
pub mod labels;
pub mod picking;
pub mod render;
pub mod scene;
pub mod state;

pub use app::*;
pub use catalog::*;
pub use constants::*;
pub use controls::*;
pub use labels::*;
pub use picking::*;
pub use render::GpuState;
pub use scene::*;
pub use state::*;

// Shaders bundled as string constants
pub static SCENE_WGSL: &str = include_str!("../shaders/scene.wgsl");
