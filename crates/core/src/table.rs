use crate::dom::{Document, Table, TableRow};
use crate::format::parse_integer_prefix;
use crate::PageError;
use std::path::{Path, PathBuf};
use tracing::info;

pub const HOVER_CLASS: &str = "table-active";
pub const LOW_STOCK_CLASS: &str = "low-stock-row";
pub const EXPORT_FILE_NAME: &str = "export.csv";
pub const EXPORT_MIME: &str = "text/csv";

pub fn on_pointer_enter(row: &mut TableRow) {
    row.classes.add(HOVER_CLASS);
}

pub fn on_pointer_leave(row: &mut TableRow) {
    row.classes.remove(HOVER_CLASS);
}

/// Marks rows whose stock quantity is at or below their configured minimum.
///
/// Runs once at page load. A missing or unparsable minimum counts as zero;
/// an unparsable quantity never flags its row. Returns the number of rows
/// flagged.
pub fn flag_low_stock(table: &mut Table) -> usize {
    let mut flagged = 0;
    for row in &mut table.rows {
        let is_low = row.cells.iter().any(|cell| {
            let Some(threshold) = &cell.stock else {
                return false;
            };
            let minimum = threshold
                .min_stock
                .as_deref()
                .and_then(parse_integer_prefix)
                .unwrap_or(0);
            parse_integer_prefix(&cell.text).is_some_and(|quantity| quantity <= minimum)
        });

        if is_low {
            row.classes.add(LOW_STOCK_CLASS);
            flagged += 1;
        }
    }
    flagged
}

/// Cells joined with `,`, rows with `\n`. Cell text goes out verbatim, so
/// values containing commas, quotes or newlines are not escaped.
pub fn export_csv(table: &Table) -> String {
    table
        .rows
        .iter()
        .map(|row| {
            row.cells
                .iter()
                .map(|cell| cell.text.as_str())
                .collect::<Vec<_>>()
                .join(",")
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvDownload {
    pub file_name: String,
    pub mime: &'static str,
    pub content: String,
}

impl CsvDownload {
    pub fn new(content: String) -> Self {
        Self {
            file_name: EXPORT_FILE_NAME.to_string(),
            mime: EXPORT_MIME,
            content,
        }
    }

    pub async fn save_into(&self, dir: &Path) -> Result<PathBuf, PageError> {
        tokio::fs::create_dir_all(dir).await?;
        let path = dir.join(&self.file_name);
        tokio::fs::write(&path, self.content.as_bytes()).await?;
        info!(path = %path.display(), bytes = self.content.len(), "csv export written");
        Ok(path)
    }
}

/// Export button; `target` is the table selector it was configured with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportControl {
    pub target: String,
}

impl ExportControl {
    pub fn new(target: impl Into<String>) -> Self {
        Self {
            target: target.into(),
        }
    }

    pub fn on_click(&self, document: &Document) -> Result<CsvDownload, PageError> {
        let table = document
            .table(&self.target)
            .ok_or_else(|| PageError::UnknownTable(self.target.clone()))?;
        Ok(CsvDownload::new(export_csv(table)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::TableCell;
    use tempfile::tempdir;

    fn stock_row(name: &str, quantity: &str, min_stock: Option<&str>) -> TableRow {
        TableRow::new(vec![
            TableCell::data(name),
            TableCell::stock_quantity(quantity, min_stock),
        ])
    }

    #[test]
    fn hover_toggles_highlight() {
        let mut row = TableRow::default();
        on_pointer_enter(&mut row);
        assert!(row.classes.contains(HOVER_CLASS));
        on_pointer_leave(&mut row);
        assert!(!row.classes.contains(HOVER_CLASS));
    }

    #[test]
    fn rows_at_or_below_minimum_are_flagged() {
        let mut table = Table {
            rows: vec![
                stock_row("Bolt", "5", Some("5")),
                stock_row("Nut", "6", Some("5")),
                stock_row("Washer", "0", None),
                stock_row("Screw", "3", None),
                stock_row("Rivet", "n/a", Some("10")),
                stock_row("Pin", "2", Some("lots")),
                TableRow::new(vec![TableCell::data("Header-ish"), TableCell::data("0")]),
            ],
        };

        assert_eq!(flag_low_stock(&mut table), 2);
        let flagged: Vec<bool> = table
            .rows
            .iter()
            .map(|row| row.classes.contains(LOW_STOCK_CLASS))
            .collect();
        assert_eq!(flagged, vec![true, false, true, false, false, false, false]);
    }

    #[test]
    fn csv_joins_cells_without_escaping() {
        let table = Table::from_text_rows([["A", "1"], ["B", "2"]]);
        assert_eq!(export_csv(&table), "A,1\nB,2");

        let awkward = Table::from_text_rows([["Bolts, large", "\"3\""]]);
        assert_eq!(export_csv(&awkward), "Bolts, large,\"3\"");
    }

    #[test]
    fn header_cells_are_exported_in_order() {
        let table = Table {
            rows: vec![
                TableRow::new(vec![TableCell::header("Product"), TableCell::header("Qty")]),
                TableRow::new(vec![TableCell::data("Bolt"), TableCell::data("4")]),
            ],
        };
        assert_eq!(export_csv(&table), "Product,Qty\nBolt,4");
    }

    #[test]
    fn unknown_export_target_is_an_error() {
        let control = ExportControl::new("#missing");
        assert!(matches!(
            control.on_click(&Document::default()),
            Err(PageError::UnknownTable(target)) if target == "#missing"
        ));
    }

    #[tokio::test]
    async fn download_is_written_as_export_csv() -> Result<(), Box<dyn std::error::Error>> {
        let dir = tempdir()?;
        let table = Table::from_text_rows([["A", "1"], ["B", "2"]]);
        let document = Document::default().with_table("stock-table", table);
        let download = ExportControl::new("#stock-table").on_click(&document)?;
        assert_eq!(download.mime, "text/csv");

        let path = download.save_into(dir.path()).await?;
        assert_eq!(path.file_name().and_then(|name| name.to_str()), Some("export.csv"));
        assert_eq!(std::fs::read_to_string(path)?, "A,1\nB,2");
        Ok(())
    }
}
