use thiserror::Error;

/// Broken mesh invariants. These indicate a bug in a producing stage, not bad user input.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MeshError {
    #[error("index buffer length {0} is not a multiple of 3")]
    RaggedIndexBuffer(usize),
    #[error("vertex index {index} out of range for {vertex_count} vertices")]
    VertexOutOfRange { index: u32, vertex_count: usize },
}
