//! Record lookup across tabular and hierarchical sources.

use crate::record::{NormalizedRecord, scalar_text};
use crate::table::SourceTable;
use crate::Source;
use serde::Deserialize;
use serde_json::Value;

/// Field names the locator uses to find records and their identifiers.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LocatorConfig {
    /// Key of the record list in a `{collection: [...]}` document.
    pub collection_field: String,
    /// Identifier field consulted first.
    pub primary: String,
    /// Identifier field consulted only when the primary is absent.
    pub fallback: String,
}

impl Default for LocatorConfig {
    fn default() -> Self {
        Self {
            collection_field: "invoices".to_string(),
            primary: "invoice_id".to_string(),
            fallback: "id".to_string(),
        }
    }
}

/// The recognized shapes of a source, borrowed for one lookup.
enum Shape<'a> {
    Table {
        table: &'a SourceTable,
        id_column: &'a str,
    },
    Records(&'a [Value]),
    Unrecognized,
}

/// Resolves identifiers and records using one [`LocatorConfig`].
#[derive(Debug, Clone, Default)]
pub struct Locator {
    config: LocatorConfig,
}

impl Locator {
    pub fn new(config: LocatorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &LocatorConfig {
        &self.config
    }

    fn shape<'a>(&'a self, source: &'a Source) -> Shape<'a> {
        match source {
            Source::Table(table) => {
                let id_column = [&self.config.primary, &self.config.fallback]
                    .into_iter()
                    .find(|name| table.has_column(name));
                match id_column {
                    Some(id_column) => Shape::Table { table, id_column },
                    None => Shape::Unrecognized,
                }
            }
            Source::Document(Value::Object(map)) => match map.get(&self.config.collection_field) {
                Some(Value::Array(records)) => Shape::Records(records),
                _ => Shape::Unrecognized,
            },
            Source::Document(Value::Array(records)) => Shape::Records(records),
            Source::Document(_) => Shape::Unrecognized,
        }
    }

    /// Identifier of one hierarchical record: primary field, else fallback,
    /// else the empty string.
    fn record_identifier(&self, record: &Value) -> String {
        let Value::Object(map) = record else {
            return String::new();
        };
        map.get(&self.config.primary)
            .and_then(scalar_text)
            .or_else(|| map.get(&self.config.fallback).and_then(scalar_text))
            .unwrap_or_default()
    }

    /// Every identifier in source order, or an empty list when the source
    /// shape is not recognized.
    pub fn list_identifiers(&self, source: &Source) -> Vec<String> {
        match self.shape(source) {
            Shape::Table { table, id_column } => table
                .column(id_column)
                .map(|cells| cells.map(|v| scalar_text(v).unwrap_or_default()).collect())
                .unwrap_or_default(),
            Shape::Records(records) => records.iter().map(|r| self.record_identifier(r)).collect(),
            Shape::Unrecognized => {
                log::debug!("Source shape not recognized; no identifiers resolvable");
                Vec::new()
            }
        }
    }

    /// The first record whose identifier equals `identifier`.
    ///
    /// `None` covers both an absent identifier and an unrecognized source.
    /// The empty identifier matches the first record that carries none, the
    /// same way [`Locator::list_identifiers`] reports it.
    pub fn get_record(&self, source: &Source, identifier: &str) -> Option<NormalizedRecord> {
        match self.shape(source) {
            Shape::Table { table, id_column } => {
                let index = table
                    .column(id_column)?
                    .position(|cell| scalar_text(cell).unwrap_or_default() == identifier)?;
                table.record(index).map(NormalizedRecord::from)
            }
            Shape::Records(records) => records
                .iter()
                .filter(|r| self.record_identifier(r) == identifier)
                .find_map(|r| match r {
                    Value::Object(map) => Some(NormalizedRecord::from(map.clone())),
                    _ => None,
                }),
            Shape::Unrecognized => None,
        }
    }
}

/// [`Locator::list_identifiers`] with the default field names.
pub fn list_identifiers(source: &Source) -> Vec<String> {
    Locator::default().list_identifiers(source)
}

/// [`Locator::get_record`] with the default field names.
pub fn get_record(source: &Source, identifier: &str) -> Option<NormalizedRecord> {
    Locator::default().get_record(source, identifier)
}
