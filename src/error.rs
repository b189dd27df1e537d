use crate::math::MatrixError;
use thiserror::Error;

/// Fatal initialization and rendering errors.
///
/// Nothing here is recoverable: every variant terminates the process after
/// being reported. There is no retry path anywhere in the viewer.
#[derive(Debug, Error)]
pub enum ViewerError {
    #[error("graphics context initialization failed: {0}")]
    ContextInit(String),

    #[error("{stage} shader failed to compile: {log}")]
    ShaderCompile { stage: &'static str, log: String },

    #[error("shader program failed to link: {log}")]
    ShaderLink { log: String },

    #[error("GPU buffer allocation failed: {0}")]
    BufferAlloc(String),

    /// The uniform name was not found in the cube program. This is a caller
    /// bug (the three uniform names are fixed), not a runtime condition.
    #[error("uniform `{0}` not found in shader program")]
    UniformNotFound(String),

    #[error(transparent)]
    Matrix(#[from] MatrixError),

    #[error("surface error: {0}")]
    Surface(#[from] wgpu::SurfaceError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_messages_carry_context() {
        let err = ViewerError::ShaderCompile {
            stage: "vertex",
            log: "expected ';'".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("vertex"));
        assert!(msg.contains("expected ';'"));
    }

    #[test]
    fn uniform_not_found_names_the_uniform() {
        let err = ViewerError::UniformNotFound("normal_matrix".to_string());
        assert!(err.to_string().contains("normal_matrix"));
    }
}
