use crate::style::BlockStyle;

/// The content of one layout block.
#[derive(Debug, Clone, PartialEq)]
pub enum BlockKind {
    /// A large heading line with a smaller line beneath it.
    Title { text: String, subtitle: String },
    /// Label/value rows laid out in two fixed-width columns.
    KeyValueTable {
        rows: Vec<(String, String)>,
        column_widths: [f32; 2],
    },
    /// A single prominent line.
    EmphasizedLine { text: String },
    Paragraph { text: String },
    /// Vertical whitespace of a fixed height in points.
    Spacer { height: f32 },
}

/// One visual unit placed on the page in sequence order.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutBlock {
    pub kind: BlockKind,
    pub style: BlockStyle,
}

impl LayoutBlock {
    pub fn new(kind: BlockKind, style: BlockStyle) -> Self {
        Self { kind, style }
    }

    pub fn kind_name(&self) -> &'static str {
        match self.kind {
            BlockKind::Title { .. } => "title",
            BlockKind::KeyValueTable { .. } => "table",
            BlockKind::EmphasizedLine { .. } => "emphasized",
            BlockKind::Paragraph { .. } => "paragraph",
            BlockKind::Spacer { .. } => "spacer",
        }
    }

    /// Every piece of text the block will draw, in drawing order.
    pub fn texts(&self) -> Vec<&str> {
        match &self.kind {
            BlockKind::Title { text, subtitle } => vec![text.as_str(), subtitle.as_str()],
            BlockKind::KeyValueTable { rows, .. } => rows
                .iter()
                .flat_map(|(key, value)| [key.as_str(), value.as_str()])
                .collect(),
            BlockKind::EmphasizedLine { text } | BlockKind::Paragraph { text } => {
                vec![text.as_str()]
            }
            BlockKind::Spacer { .. } => Vec::new(),
        }
    }
}
