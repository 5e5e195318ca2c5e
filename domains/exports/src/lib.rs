//! Exports domain: renders artifact payloads into downloadable `.docx` documents

pub mod assembler;
pub mod blocks;
pub mod engine;
pub mod error;
pub mod format;
pub mod payload;
pub mod registry;
pub mod renderers;

// Re-export the pipeline at the crate root
pub use assembler::{Assembler, DEFAULT_BRAND_MARK, DOCX_CONTENT_TYPE, DOCX_EXTENSION};
pub use blocks::{Block, BlockBuilder, TableBlock};
pub use engine::{render, render_blocks, ExportedDocument, Exporter};
pub use error::ExportError;
pub use payload::ValueProposition;
pub use registry::{resolve, tool_info, ArtifactType, Phase, ToolInfo, CATALOG};
pub use renderers::Renderer;
