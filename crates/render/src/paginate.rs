//! Places a block sequence onto fixed-size pages.
//!
//! Coordinates are in points with the origin at the top-left corner of the
//! page; `y` is the top of a line box.

use crate::error::RenderError;
use crate::geometry::PageGeometry;
use crate::text::wrap_text;
use invoicer_compose::style::{LEADING, SUBTITLE_SCALE};
use invoicer_compose::{BlockKind, BlockStyle, Color, LayoutBlock, TextAlign};
use invoicer_fonts::FontHandle;

/// Padding inside each key/value table cell: top, right, bottom, left.
const CELL_PADDING: [f32; 4] = [3.0, 6.0, 6.0, 6.0];

/// One line of text at its final position.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedText {
    pub x: f32,
    pub y: f32,
    pub text: String,
    pub font: FontHandle,
    pub size: f32,
    pub color: Color,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Page {
    pub items: Vec<PlacedText>,
}

/// Lays `blocks` out top to bottom, starting a new page whenever the next
/// line or table row would cross the bottom margin.
///
/// Always yields at least one page.
pub fn paginate(blocks: &[LayoutBlock], geometry: &PageGeometry) -> Result<Vec<Page>, RenderError> {
    for (index, block) in blocks.iter().enumerate() {
        validate(index, block, geometry)?;
    }

    let mut paginator = Paginator::new(geometry);
    for block in blocks {
        paginator.place(block);
    }
    Ok(paginator.finish())
}

fn validate(index: usize, block: &LayoutBlock, geometry: &PageGeometry) -> Result<(), RenderError> {
    let invalid = |reason: String| RenderError::InvalidBlock {
        index,
        kind: block.kind_name(),
        reason,
    };

    let style = &block.style;
    if !style.size.is_finite() || style.size <= 0.0 {
        return Err(invalid(format!("font size {} is not positive", style.size)));
    }
    if !style.space_after.is_finite() || style.space_after < 0.0 {
        return Err(invalid(format!("space after {} is negative", style.space_after)));
    }

    match &block.kind {
        BlockKind::Spacer { height } if !height.is_finite() || *height < 0.0 => {
            Err(invalid(format!("spacer height {height} is negative")))
        }
        BlockKind::KeyValueTable { column_widths, .. } => {
            if column_widths.iter().any(|w| !w.is_finite() || *w <= 0.0) {
                return Err(invalid(format!("column widths {column_widths:?} must be positive")));
            }
            let total: f32 = column_widths.iter().sum();
            if total > geometry.content_width() {
                return Err(invalid(format!(
                    "table width {total} exceeds the content width {}",
                    geometry.content_width()
                )));
            }
            Ok(())
        }
        _ => Ok(()),
    }
}

struct Paginator<'a> {
    geometry: &'a PageGeometry,
    pages: Vec<Page>,
    current: Page,
    /// Distance from the top margin to the next free line.
    cursor: f32,
}

impl<'a> Paginator<'a> {
    fn new(geometry: &'a PageGeometry) -> Self {
        Self {
            geometry,
            pages: Vec::new(),
            current: Page::default(),
            cursor: 0.0,
        }
    }

    fn at_page_top(&self) -> bool {
        self.cursor <= 0.0
    }

    /// Breaks the page unless `height` more points still fit. Content taller
    /// than a whole page is placed anyway rather than looping.
    fn reserve(&mut self, height: f32) {
        if !self.at_page_top() && self.cursor + height > self.geometry.content_height() {
            self.pages.push(std::mem::take(&mut self.current));
            self.cursor = 0.0;
        }
    }

    fn top(&self) -> f32 {
        self.geometry.margin() + self.cursor
    }

    fn aligned_x(&self, width: f32, align: TextAlign) -> f32 {
        let free = (self.geometry.content_width() - width).max(0.0);
        let offset = match align {
            TextAlign::Left => 0.0,
            TextAlign::Center => free / 2.0,
            TextAlign::Right => free,
        };
        self.geometry.margin() + offset
    }

    fn place(&mut self, block: &LayoutBlock) {
        let style = &block.style;
        match &block.kind {
            BlockKind::Title { text, subtitle } => {
                self.place_lines(text, style, style.size);
                self.place_lines(subtitle, style, style.size * SUBTITLE_SCALE);
            }
            BlockKind::EmphasizedLine { text } | BlockKind::Paragraph { text } => {
                self.place_lines(text, style, style.size);
            }
            BlockKind::KeyValueTable {
                rows,
                column_widths,
            } => self.place_table(rows, *column_widths, style),
            BlockKind::Spacer { height } => {
                if !self.at_page_top() {
                    self.cursor += height;
                }
            }
        }

        if !self.at_page_top() {
            self.cursor += style.space_after;
        }
    }

    fn place_lines(&mut self, text: &str, style: &BlockStyle, size: f32) {
        let line_height = size * LEADING;
        for line in wrap_text(&style.font, text, size, self.geometry.content_width()) {
            self.reserve(line_height);
            let width = style.font.measure(&line, size);
            let item = PlacedText {
                x: self.aligned_x(width, style.align),
                y: self.top(),
                text: line,
                font: style.font.clone(),
                size,
                color: style.color,
            };
            self.current.items.push(item);
            self.cursor += line_height;
        }
    }

    fn place_table(&mut self, rows: &[(String, String)], widths: [f32; 2], style: &BlockStyle) {
        let [pad_top, pad_right, pad_bottom, pad_left] = CELL_PADDING;
        let line_height = style.line_height();
        let table_x = self.aligned_x(widths[0] + widths[1], style.align);

        for (key, value) in rows {
            let cells: Vec<Vec<String>> = [key, value]
                .iter()
                .zip(widths)
                .map(|(text, width)| {
                    let inner = (width - pad_left - pad_right).max(style.size);
                    wrap_text(&style.font, text, style.size, inner)
                })
                .collect();
            let line_count = cells.iter().map(Vec::len).max().unwrap_or(0).max(1);
            let row_height = pad_top + line_count as f32 * line_height + pad_bottom;

            self.reserve(row_height);
            let row_top = self.top() + pad_top;
            let mut cell_x = table_x;
            for (lines, width) in cells.into_iter().zip(widths) {
                for (i, line) in lines.into_iter().enumerate() {
                    self.current.items.push(PlacedText {
                        x: cell_x + pad_left,
                        y: row_top + i as f32 * line_height,
                        text: line,
                        font: style.font.clone(),
                        size: style.size,
                        color: style.color,
                    });
                }
                cell_x += width;
            }
            self.cursor += row_height;
        }
    }

    fn finish(mut self) -> Vec<Page> {
        if !self.current.items.is_empty() || self.pages.is_empty() {
            self.pages.push(self.current);
        }
        self.pages
    }
}
