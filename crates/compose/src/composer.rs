use crate::block::{BlockKind, LayoutBlock};
use crate::style::design;
use invoicer_fonts::FontHandle;
use invoicer_source::NormalizedRecord;

/// Static label text of the invoice document.
pub mod labels {
    pub const TITLE: &str = "INVOICE";
    pub const NUMBER_PREFIX: &str = "No.";
    pub const CUSTOMER: &str = "Customer:";
    pub const DATE: &str = "Date:";
    pub const INVOICE_NUMBER: &str = "Invoice number:";
    pub const AMOUNT: &str = "Amount:";
    pub const CURRENCY_SUFFIX: &str = "₽";
    pub const DESCRIPTION_HEADING: &str = "Description of services:";
    pub const THANK_YOU: &str = "Thank you for your order!";
    pub const CREATED_ON: &str = "Created on:";
}

/// Lays out one invoice as an ordered block sequence.
///
/// Absent fields render as the placeholder; composing never fails.
pub fn compose(record: &NormalizedRecord, font: &FontHandle) -> Vec<LayoutBlock> {
    let invoice_id = record.invoice_id();
    let date = record.date();

    vec![
        LayoutBlock::new(
            BlockKind::Title {
                text: labels::TITLE.to_string(),
                subtitle: format!("{} {}", labels::NUMBER_PREFIX, invoice_id),
            },
            design::title(font),
        ),
        LayoutBlock::new(
            BlockKind::KeyValueTable {
                rows: vec![
                    (labels::CUSTOMER.to_string(), record.customer_name()),
                    (labels::DATE.to_string(), date.clone()),
                    (labels::INVOICE_NUMBER.to_string(), invoice_id),
                ],
                column_widths: design::TABLE_COLUMN_WIDTHS,
            },
            design::table(font),
        ),
        spacer(design::SECTION_GAP, font),
        LayoutBlock::new(
            BlockKind::EmphasizedLine {
                text: format!(
                    "{} {} {}",
                    labels::AMOUNT,
                    record.amount(),
                    labels::CURRENCY_SUFFIX
                ),
            },
            design::amount(font),
        ),
        paragraph(labels::DESCRIPTION_HEADING, design::heading(font)),
        LayoutBlock::new(
            BlockKind::Paragraph {
                text: record.description(),
            },
            design::body(font),
        ),
        spacer(design::CLOSING_GAP, font),
        paragraph(labels::THANK_YOU, design::body(font)),
        LayoutBlock::new(
            BlockKind::Paragraph {
                text: format!("{} {}", labels::CREATED_ON, date),
            },
            design::body(font),
        ),
    ]
}

fn spacer(height: f32, font: &FontHandle) -> LayoutBlock {
    LayoutBlock::new(BlockKind::Spacer { height }, design::spacer(font))
}

fn paragraph(text: &str, style: crate::style::BlockStyle) -> LayoutBlock {
    LayoutBlock::new(
        BlockKind::Paragraph {
            text: text.to_string(),
        },
        style,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use invoicer_source::PLACEHOLDER;
    use serde_json::{Value, json};

    fn record(value: Value) -> NormalizedRecord {
        match value {
            Value::Object(map) => NormalizedRecord::from(map),
            other => panic!("fixture must be an object, got {other}"),
        }
    }

    fn count(blocks: &[LayoutBlock], name: &str) -> usize {
        blocks.iter().filter(|b| b.kind_name() == name).count()
    }

    fn full_record() -> NormalizedRecord {
        record(json!({
            "invoice_id": "INV-1",
            "customer_name": "Acme",
            "date": "2024-01-01",
            "amount": "500",
            "description": "Consulting"
        }))
    }

    #[test]
    fn full_record_produces_nine_blocks_in_order() {
        let blocks = compose(&full_record(), &FontHandle::builtin());
        let kinds: Vec<_> = blocks.iter().map(|b| b.kind_name()).collect();
        assert_eq!(
            kinds,
            vec![
                "title",
                "table",
                "spacer",
                "emphasized",
                "paragraph",
                "paragraph",
                "spacer",
                "paragraph",
                "paragraph"
            ]
        );

        assert_eq!(blocks[0].texts(), vec!["INVOICE", "No. INV-1"]);
        assert_eq!(
            blocks[1].kind,
            BlockKind::KeyValueTable {
                rows: vec![
                    ("Customer:".into(), "Acme".into()),
                    ("Date:".into(), "2024-01-01".into()),
                    ("Invoice number:".into(), "INV-1".into()),
                ],
                column_widths: [100.0, 200.0],
            }
        );
        assert_eq!(blocks[3].texts(), vec!["Amount: 500 ₽"]);
        assert_eq!(blocks[4].texts(), vec!["Description of services:"]);
        assert_eq!(blocks[5].texts(), vec!["Consulting"]);
        assert_eq!(blocks[8].texts(), vec!["Created on: 2024-01-01"]);
    }

    #[test]
    fn singleton_blocks_exist_for_any_record() {
        for value in [json!({}), json!({"amount": 3}), json!({"id": "only-fallback"})] {
            let blocks = compose(&record(value), &FontHandle::builtin());
            assert_eq!(count(&blocks, "title"), 1);
            assert_eq!(count(&blocks, "table"), 1);
            assert_eq!(count(&blocks, "emphasized"), 1);
            let table = blocks.iter().find(|b| b.kind_name() == "table").unwrap();
            match &table.kind {
                BlockKind::KeyValueTable { rows, .. } => assert_eq!(rows.len(), 3),
                other => panic!("expected a table, got {other:?}"),
            }
        }
    }

    #[test]
    fn missing_amount_and_description_degrade_to_placeholder() {
        let blocks = compose(
            &record(json!({"invoice_id": "INV-2", "customer_name": "Globex"})),
            &FontHandle::builtin(),
        );
        assert_eq!(blocks[3].texts(), vec![format!("Amount: {PLACEHOLDER} ₽").as_str()]);
        assert_eq!(blocks[5].texts(), vec![PLACEHOLDER]);
        assert_eq!(blocks[8].texts(), vec![format!("Created on: {PLACEHOLDER}").as_str()]);
    }

    #[test]
    fn every_block_carries_the_given_font() {
        let font = FontHandle::builtin();
        let blocks = compose(&full_record(), &font);
        assert!(blocks.iter().all(|b| b.style.font == font));
    }

    #[test]
    fn composition_is_deterministic() {
        let font = FontHandle::builtin();
        assert_eq!(compose(&full_record(), &font), compose(&full_record(), &font));
    }

    #[test]
    fn resolved_fonts_must_cover_the_currency_suffix() {
        assert!(invoicer_fonts::REQUIRED_GLYPHS.contains(labels::CURRENCY_SUFFIX));
    }
}
