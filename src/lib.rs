pub mod camera;
pub mod error;
pub mod math;
pub mod mesh;
pub mod pacing;
pub mod renderer;
pub mod shader;
pub mod state;

pub use camera::CursorCamera;
pub use error::ViewerError;
pub use renderer::RendererState;
pub use state::LoopState;
