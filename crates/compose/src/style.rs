use invoicer_fonts::FontHandle;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const DARK_BLUE: Color = Color::rgb(0, 0, 139);
    pub const DARK_RED: Color = Color::rgb(139, 0, 0);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Components scaled to `0.0..=1.0`.
    pub fn as_unit(&self) -> (f32, f32, f32) {
        (
            self.r as f32 / 255.0,
            self.g as f32 / 255.0,
            self.b as f32 / 255.0,
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TextAlign {
    #[default]
    Left,
    Center,
    Right,
}

/// Visual properties of one block. Sizes are in points.
#[derive(Debug, Clone, PartialEq)]
pub struct BlockStyle {
    pub font: FontHandle,
    pub size: f32,
    pub color: Color,
    pub align: TextAlign,
    /// Vertical gap left below the block.
    pub space_after: f32,
}

impl BlockStyle {
    /// Distance between consecutive baselines.
    pub fn line_height(&self) -> f32 {
        self.size * LEADING
    }
}

/// Line height as a multiple of the font size.
pub const LEADING: f32 = 1.2;

/// Title subtitle size relative to the title size.
pub const SUBTITLE_SCALE: f32 = 0.5;

/// Fixed design constants of the invoice layout.
pub mod design {
    use super::{BlockStyle, Color, TextAlign};
    use invoicer_fonts::FontHandle;

    pub const TABLE_COLUMN_WIDTHS: [f32; 2] = [100.0, 200.0];
    pub const SECTION_GAP: f32 = 20.0;
    pub const CLOSING_GAP: f32 = 30.0;

    pub fn title(font: &FontHandle) -> BlockStyle {
        BlockStyle {
            font: font.clone(),
            size: 24.0,
            color: Color::DARK_BLUE,
            align: TextAlign::Center,
            space_after: 30.0,
        }
    }

    pub fn heading(font: &FontHandle) -> BlockStyle {
        BlockStyle {
            font: font.clone(),
            size: 16.0,
            color: Color::DARK_BLUE,
            align: TextAlign::Left,
            space_after: 12.0,
        }
    }

    pub fn body(font: &FontHandle) -> BlockStyle {
        BlockStyle {
            font: font.clone(),
            size: 12.0,
            color: Color::BLACK,
            align: TextAlign::Left,
            space_after: 6.0,
        }
    }

    pub fn table(font: &FontHandle) -> BlockStyle {
        BlockStyle {
            align: TextAlign::Center,
            space_after: 0.0,
            ..body(font)
        }
    }

    pub fn amount(font: &FontHandle) -> BlockStyle {
        BlockStyle {
            font: font.clone(),
            size: 20.0,
            color: Color::DARK_RED,
            align: TextAlign::Center,
            space_after: 20.0,
        }
    }

    pub fn spacer(font: &FontHandle) -> BlockStyle {
        BlockStyle {
            space_after: 0.0,
            ..body(font)
        }
    }
}
