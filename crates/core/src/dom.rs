//! Headless stand-ins for the parts of a rendered page the behaviors touch.
//!
//! Pages are server-rendered, so these types only carry what the behaviors
//! read or mutate: class names, table cells, and overlay trigger flags.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClassList(BTreeSet<String>);

impl ClassList {
    pub fn add(&mut self, class: &str) {
        self.0.insert(class.to_string());
    }

    pub fn remove(&mut self, class: &str) {
        self.0.remove(class);
    }

    /// Flips `class` and reports whether it is present afterwards.
    pub fn toggle(&mut self, class: &str) -> bool {
        if self.0.remove(class) {
            false
        } else {
            self.0.insert(class.to_string());
            true
        }
    }

    pub fn contains(&self, class: &str) -> bool {
        self.0.contains(class)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum CellKind {
    Header,
    #[default]
    Data,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableCell {
    #[serde(default)]
    pub kind: CellKind,
    pub text: String,
    /// Present on cells that display a stock quantity; holds the raw
    /// configured minimum, which may itself be absent.
    #[serde(default)]
    pub stock: Option<StockThreshold>,
}

impl TableCell {
    pub fn header(text: impl Into<String>) -> Self {
        Self {
            kind: CellKind::Header,
            text: text.into(),
            stock: None,
        }
    }

    pub fn data(text: impl Into<String>) -> Self {
        Self {
            kind: CellKind::Data,
            text: text.into(),
            stock: None,
        }
    }

    pub fn stock_quantity(text: impl Into<String>, min_stock: Option<&str>) -> Self {
        Self {
            kind: CellKind::Data,
            text: text.into(),
            stock: Some(StockThreshold {
                min_stock: min_stock.map(str::to_string),
            }),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockThreshold {
    #[serde(default)]
    pub min_stock: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TableRow {
    pub cells: Vec<TableCell>,
    #[serde(default)]
    pub classes: ClassList,
}

impl TableRow {
    pub fn new(cells: Vec<TableCell>) -> Self {
        Self {
            cells,
            classes: ClassList::default(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Table {
    pub rows: Vec<TableRow>,
}

impl Table {
    pub fn from_text_rows<R, C>(rows: R) -> Self
    where
        R: IntoIterator<Item = C>,
        C: IntoIterator,
        C::Item: Into<String>,
    {
        Self {
            rows: rows
                .into_iter()
                .map(|row| TableRow::new(row.into_iter().map(TableCell::data).collect()))
                .collect(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OverlayKind {
    Tooltip,
    Popover,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OverlayTrigger {
    pub kind: OverlayKind,
    pub title: String,
    #[serde(default)]
    pub active: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Document {
    #[serde(default)]
    pub body: ClassList,
    #[serde(default)]
    pub tables: BTreeMap<String, Table>,
    #[serde(default)]
    pub overlays: Vec<OverlayTrigger>,
}

impl Document {
    pub fn with_table(mut self, id: impl Into<String>, table: Table) -> Self {
        self.tables.insert(id.into(), table);
        self
    }

    /// Looks a table up by `#id` or bare `id`.
    pub fn table(&self, target: &str) -> Option<&Table> {
        self.tables.get(target.trim_start_matches('#'))
    }
}
