//! wgpu rendering module
//!
//! Shapes are tessellated on the CPU into one colored triangle list per frame.

pub mod batch;
pub mod pipeline;
pub mod shapes;
pub mod vertex;

pub use batch::ShapeBatch;
pub use pipeline::RenderState;
pub use vertex::Vertex;
