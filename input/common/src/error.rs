use crate::span::Span;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ShellError {
    #[error("Asset fetch failed for '{url}': {message}")]
    AssetFetch { url: String, message: String },

    #[error("Audio backend error: {message}")]
    AudioBackend { message: String },

    #[error("Runtime instantiation failed: {message}")]
    RuntimeInstantiate { message: String },

    #[error("Trace error: {message}")]
    TraceSyntax { message: String, span: Span },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl ShellError {
    pub fn span(&self) -> Option<Span> {
        match self {
            ShellError::TraceSyntax { span, .. } => Some(*span),
            _ => None,
        }
    }
}
