//! Document blocks: the renderer output, prior to serialization
//!
//! Renderers describe content as an ordered list of [`Block`]s and never
//! touch the docx layer directly. [`BlockBuilder`] holds the formatting
//! conventions every renderer shares (labelled fields, placeholders,
//! the value-proposition preamble).

use serde::Serialize;

use crate::format::{or_placeholder, PLACEHOLDER};
use crate::payload::ValueProposition;

/// One unit of document content
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", content = "content", rename_all = "snake_case")]
pub enum Block {
    Heading1(String),
    Heading2(String),
    /// Bold field name above a body paragraph
    Label(String),
    Body(String),
    Bullet(String),
    Divider,
    Table(TableBlock),
}

impl Block {
    /// Plain text carried by the block, for searching and tests
    pub fn text(&self) -> Option<&str> {
        match self {
            Block::Heading1(t)
            | Block::Heading2(t)
            | Block::Label(t)
            | Block::Body(t)
            | Block::Bullet(t) => Some(t),
            Block::Divider | Block::Table(_) => None,
        }
    }
}

/// Table with a bold header row and an optional bold total row
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct TableBlock {
    pub header: Vec<String>,
    pub rows: Vec<Vec<String>>,
    pub total: Option<Vec<String>>,
}

impl TableBlock {
    pub fn new<I, S>(header: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            header: header.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    pub fn row(mut self, cells: Vec<String>) -> Self {
        self.rows.push(cells);
        self
    }

    pub fn total(mut self, cells: Vec<String>) -> Self {
        self.total = Some(cells);
        self
    }
}

/// Accumulates blocks in order
#[derive(Debug, Default)]
pub struct BlockBuilder {
    blocks: Vec<Block>,
}

impl BlockBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subheading(mut self, text: impl Into<String>) -> Self {
        self.blocks.push(Block::Heading2(text.into()));
        self
    }

    pub fn label(mut self, text: impl Into<String>) -> Self {
        self.blocks.push(Block::Label(text.into()));
        self
    }

    pub fn body(mut self, text: impl Into<String>) -> Self {
        self.blocks.push(Block::Body(text.into()));
        self
    }

    pub fn placeholder(self) -> Self {
        self.body(PLACEHOLDER)
    }

    pub fn divider(mut self) -> Self {
        self.blocks.push(Block::Divider);
        self
    }

    pub fn table(mut self, table: TableBlock) -> Self {
        self.blocks.push(Block::Table(table));
        self
    }

    /// Label followed by the value, or the placeholder when absent
    pub fn field(self, label: &str, value: Option<&str>) -> Self {
        self.label(label).body(or_placeholder(value))
    }

    /// Single `Label: value` paragraph
    pub fn inline(self, label: &str, value: Option<&str>) -> Self {
        let text = format!("{label}: {}", or_placeholder(value));
        self.body(text)
    }

    /// Label followed by one bullet per item, or the placeholder when empty
    pub fn bullets(mut self, label: &str, items: &[String]) -> Self {
        self = self.label(label);
        if items.is_empty() {
            return self.placeholder();
        }
        self.blocks
            .extend(items.iter().map(|item| Block::Bullet(item.clone())));
        self
    }

    /// Value-proposition preamble: sentence then divider. Nothing when `None`.
    pub fn value_proposition(self, vp: Option<&ValueProposition>) -> Self {
        match vp {
            Some(vp) => self.label("Value Proposition").body(vp.sentence()).divider(),
            None => self,
        }
    }

    pub fn build(self) -> Vec<Block> {
        self.blocks
    }
}
