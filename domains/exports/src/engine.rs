//! Export entry point: registry lookup, render, assemble

use serde_json::Value;

use crate::assembler::{Assembler, DOCX_CONTENT_TYPE, DOCX_EXTENSION};
use crate::blocks::Block;
use crate::error::ExportError;
use crate::payload::ValueProposition;
use crate::registry::{self, ArtifactType};

/// Rendered `.docx` ready to be streamed
#[derive(Debug, Clone)]
pub struct ExportedDocument {
    pub title: String,
    pub bytes: Vec<u8>,
    pub block_count: usize,
}

impl ExportedDocument {
    pub fn content_type(&self) -> &'static str {
        DOCX_CONTENT_TYPE
    }

    pub fn extension(&self) -> &'static str {
        DOCX_EXTENSION
    }
}

/// Project a payload into blocks with the renderer registered for `kind`.
///
/// Never fails. Deterministic for identical inputs.
pub fn render_blocks(
    kind: &ArtifactType,
    data: &Value,
    value_proposition: Option<&ValueProposition>,
) -> Vec<Block> {
    let renderer = registry::resolve(kind);
    renderer(data, value_proposition)
}

/// Stateless exporter; holds only the brand mark used by the document shell
#[derive(Debug, Clone, Default)]
pub struct Exporter {
    assembler: Assembler,
}

impl Exporter {
    pub fn new(brand_mark: impl Into<String>) -> Self {
        Self {
            assembler: Assembler::new(brand_mark),
        }
    }

    /// Render one artifact to `.docx` bytes.
    ///
    /// The document title is the tool's display title. Only serialization
    /// can fail.
    pub fn export(
        &self,
        kind: &ArtifactType,
        data: &Value,
        value_proposition: Option<&ValueProposition>,
        team_name: &str,
    ) -> Result<ExportedDocument, ExportError> {
        let title = kind.title();
        let blocks = render_blocks(kind, data, value_proposition);
        let bytes = self.assembler.build(team_name, &title, &blocks)?;

        tracing::info!(
            artifact_type = %kind,
            bespoke = kind.has_bespoke_renderer(),
            blocks = blocks.len(),
            bytes = bytes.len(),
            "Rendered artifact export"
        );

        Ok(ExportedDocument {
            title,
            bytes,
            block_count: blocks.len(),
        })
    }
}

/// Render with the default brand mark
pub fn render(
    artifact_type: &str,
    data: &Value,
    value_proposition: Option<&ValueProposition>,
    team_name: &str,
) -> Result<Vec<u8>, ExportError> {
    Exporter::default()
        .export(
            &ArtifactType::from_tag(artifact_type),
            data,
            value_proposition,
            team_name,
        )
        .map(|document| document.bytes)
}
