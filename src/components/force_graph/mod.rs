mod component;
mod forces;
mod frame_loop;
mod render;
mod scale;
mod state;
mod types;

pub use component::ForceGraphCanvas;
pub use render::kind_color;
