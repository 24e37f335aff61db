//! PDF emission through printpdf.

use crate::error::RenderError;
use crate::geometry::{PageGeometry, flip_y};
use crate::paginate::{Page, PlacedText};
use invoicer_fonts::{FontHandle, is_latin1};
use printpdf::font::ParsedFont;
use printpdf::text::TextItem;
use printpdf::{BuiltinFont, FontId, Mm, Op, PdfDocument, PdfPage, PdfSaveOptions, Pt, Rgb, TextMatrix};
use std::collections::HashMap;

/// Serializes laid-out pages into a complete PDF file.
pub fn write_pdf(pages: &[Page], geometry: &PageGeometry, title: &str) -> Result<Vec<u8>, RenderError> {
    let mut writer = PdfWriter::new(title);
    for page in pages {
        writer.add_page(page, geometry)?;
    }
    Ok(writer.finish())
}

struct PdfWriter {
    document: PdfDocument,
    /// Embedded faces already added to the document, keyed by PostScript name and path.
    fonts: HashMap<(String, String), FontId>,
}

impl PdfWriter {
    fn new(title: &str) -> Self {
        Self {
            document: PdfDocument::new(title),
            fonts: HashMap::new(),
        }
    }

    fn font_id(&mut self, font: &FontHandle) -> Result<Option<FontId>, RenderError> {
        let FontHandle::Embedded(embedded) = font else {
            return Ok(None);
        };
        let key = (embedded.name.clone(), embedded.path.display().to_string());
        if let Some(id) = self.fonts.get(&key) {
            return Ok(Some(id.clone()));
        }

        let mut warnings = Vec::new();
        let parsed = ParsedFont::from_bytes(&embedded.data, embedded.index as usize, &mut warnings)
            .ok_or_else(|| RenderError::Font(embedded.name.clone()))?;
        let id = self.document.add_font(&parsed);
        log::debug!("Embedded font '{}' into the document", embedded.name);
        self.fonts.insert(key, id.clone());
        Ok(Some(id))
    }

    fn add_page(&mut self, page: &Page, geometry: &PageGeometry) -> Result<(), RenderError> {
        let mut ops = Vec::new();
        for item in &page.items {
            self.text_ops(item, geometry.height(), &mut ops)?;
        }
        self.document.pages.push(PdfPage::new(
            Mm(geometry.width_mm),
            Mm(geometry.height_mm),
            ops,
        ));
        Ok(())
    }

    fn text_ops(&mut self, item: &PlacedText, page_height: f32, ops: &mut Vec<Op>) -> Result<(), RenderError> {
        if item.text.is_empty() {
            return Ok(());
        }

        let (r, g, b) = item.color.as_unit();
        ops.push(Op::SetFillColor {
            col: printpdf::color::Color::Rgb(Rgb::new(r, g, b, None)),
        });
        ops.push(Op::StartTextSection);

        // Baseline sits one font size below the top of the line box.
        let matrix = TextMatrix::Translate(Pt(item.x), Pt(flip_y(item.y + item.size, page_height)));

        match self.font_id(&item.font)? {
            Some(font) => {
                ops.push(Op::SetFontSize {
                    size: Pt(item.size),
                    font: font.clone(),
                });
                ops.push(Op::SetTextMatrix { matrix });
                ops.push(Op::WriteText {
                    items: vec![TextItem::Text(item.text.clone())],
                    font,
                });
            }
            None => {
                ops.push(Op::SetFontSizeBuiltinFont {
                    size: Pt(item.size),
                    font: BuiltinFont::Helvetica,
                });
                ops.push(Op::SetTextMatrix { matrix });
                ops.push(Op::WriteTextBuiltinFont {
                    items: vec![TextItem::Text(builtin_safe(&item.text))],
                    font: BuiltinFont::Helvetica,
                });
            }
        }

        ops.push(Op::EndTextSection);
        Ok(())
    }

    fn finish(self) -> Vec<u8> {
        let mut warnings = Vec::new();
        let bytes = self.document.save(&PdfSaveOptions::default(), &mut warnings);
        if !warnings.is_empty() {
            log::debug!("PDF serialization reported {} warnings", warnings.len());
        }
        bytes
    }
}

/// Replaces characters the builtin face cannot encode with `?`.
fn builtin_safe(text: &str) -> String {
    text.chars().map(|c| if is_latin1(c) { c } else { '?' }).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use invoicer_compose::Color;
    use invoicer_fonts::resolve_font;

    fn page_in(text: &str, font: &FontHandle) -> Page {
        Page {
            items: vec![PlacedText {
                x: 60.0,
                y: 60.0,
                text: text.to_string(),
                font: font.clone(),
                size: 12.0,
                color: Color::BLACK,
            }],
        }
    }

    fn page_with(text: &str) -> Page {
        page_in(text, &FontHandle::builtin())
    }

    /// Font dictionaries other than CID descendants.
    fn top_level_fonts(document: &lopdf::Document) -> usize {
        fn name<'a>(dict: &'a lopdf::Dictionary, key: &[u8]) -> Option<&'a [u8]> {
            dict.get(key).ok()?.as_name().ok()
        }
        document
            .objects
            .values()
            .filter_map(|object| object.as_dict().ok())
            .filter(|dict| name(dict, b"Type") == Some(b"Font".as_slice()))
            .filter(|dict| {
                !matches!(
                    name(dict, b"Subtype"),
                    Some(b"CIDFontType0") | Some(b"CIDFontType2")
                )
            })
            .count()
    }

    #[test]
    fn builtin_text_is_sanitized() {
        assert_eq!(builtin_safe("Amount: 500 ₽"), "Amount: 500 ?");
        assert_eq!(builtin_safe("Café"), "Café");
    }

    #[test]
    fn writes_one_pdf_page_per_layout_page() {
        let pages = vec![page_with("first"), page_with("second"), Page::default()];
        let bytes = write_pdf(&pages, &PageGeometry::A4, "test").unwrap();
        assert!(bytes.starts_with(b"%PDF"));

        let document = lopdf::Document::load_mem(&bytes).unwrap();
        assert_eq!(document.get_pages().len(), 3);
    }

    #[test]
    fn embedded_font_is_added_once_across_pages() {
        let font = resolve_font();
        if !font.is_embedded() {
            eprintln!("no embeddable system font installed; skipping");
            return;
        }

        let pages = vec![
            page_in("Счёт № 1", &font),
            page_in("Сумма: 500 ₽", &font),
            page_in("Amount: 500", &font),
        ];
        let mut writer = PdfWriter::new("test");
        for page in &pages {
            writer.add_page(page, &PageGeometry::A4).unwrap();
        }
        assert_eq!(writer.fonts.len(), 1);

        let bytes = writer.finish();
        let document = lopdf::Document::load_mem(&bytes).unwrap();
        assert_eq!(document.get_pages().len(), 3);
        assert_eq!(top_level_fonts(&document), 1);
    }
}
