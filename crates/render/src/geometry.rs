pub const PT_PER_MM: f32 = 72.0 / 25.4;

/// A fixed page size with uniform margins, in millimetres.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageGeometry {
    pub width_mm: f32,
    pub height_mm: f32,
    pub margin_mm: f32,
}

impl Default for PageGeometry {
    fn default() -> Self {
        Self::A4
    }
}

impl PageGeometry {
    pub const A4: PageGeometry = PageGeometry {
        width_mm: 210.0,
        height_mm: 297.0,
        margin_mm: 20.0,
    };

    pub fn width(&self) -> f32 {
        self.width_mm * PT_PER_MM
    }

    pub fn height(&self) -> f32 {
        self.height_mm * PT_PER_MM
    }

    pub fn margin(&self) -> f32 {
        self.margin_mm * PT_PER_MM
    }

    pub fn content_width(&self) -> f32 {
        self.width() - 2.0 * self.margin()
    }

    pub fn content_height(&self) -> f32 {
        self.height() - 2.0 * self.margin()
    }
}

/// Convert layout Y coordinate to PDF Y coordinate (flip origin)
pub fn flip_y(y: f32, page_height: f32) -> f32 {
    page_height - y
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn a4_in_points() {
        let page = PageGeometry::A4;
        assert!((page.width() - 595.28).abs() < 0.01);
        assert!((page.height() - 841.89).abs() < 0.01);
        assert!((page.margin() - 56.69).abs() < 0.01);
        assert!((page.content_width() - (page.width() - 2.0 * page.margin())).abs() < 1e-3);
    }

    #[test]
    fn flips_origin() {
        assert_eq!(flip_y(0.0, 800.0), 800.0);
        assert_eq!(flip_y(100.0, 800.0), 700.0);
    }
}
