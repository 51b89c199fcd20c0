use crate::format::format_currency;
use crate::models::StockRecord;

pub const NO_RESULTS_NOTICE: &str = "No products found matching your search.";

#[derive(Debug, Clone, PartialEq)]
pub struct ResultItem {
    pub name: String,
    pub quantity_label: String,
    pub price_line: String,
    pub sku_line: Option<String>,
}

impl ResultItem {
    pub fn from_record(record: &StockRecord) -> Self {
        let mut price_line = format!("Price: {}", format_currency(record.price));
        if let Some(supplier) = present(&record.supplier) {
            price_line.push_str(" | Supplier: ");
            price_line.push_str(supplier);
        }

        Self {
            name: record.product_name.clone(),
            quantity_label: format!("Qty: {}", format_quantity(record.quantity)),
            price_line,
            sku_line: present(&record.sku).map(|sku| format!("SKU: {sku}")),
        }
    }

    fn write_html(&self, out: &mut String) {
        out.push_str(r#"<div class="list-group-item">"#);
        out.push_str(r#"<div class="d-flex w-100 justify-content-between">"#);
        out.push_str(r#"<h6 class="mb-1">"#);
        out.push_str(&escape_html(&self.name));
        out.push_str("</h6><small>");
        out.push_str(&escape_html(&self.quantity_label));
        out.push_str("</small></div>");
        out.push_str(r#"<p class="mb-1">"#);
        out.push_str(&escape_html(&self.price_line));
        out.push_str("</p>");
        if let Some(sku) = &self.sku_line {
            out.push_str("<small>");
            out.push_str(&escape_html(sku));
            out.push_str("</small>");
        }
        out.push_str("</div>");
    }
}

/// What the `#stock-results` container currently shows.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum ResultsPanel {
    #[default]
    Empty,
    Items(Vec<ResultItem>),
    Notice(String),
}

impl ResultsPanel {
    pub fn from_records(records: &[StockRecord]) -> Self {
        if records.is_empty() {
            Self::Notice(NO_RESULTS_NOTICE.to_string())
        } else {
            Self::Items(records.iter().map(ResultItem::from_record).collect())
        }
    }

    pub fn clear(&mut self) {
        *self = Self::Empty;
    }

    pub fn item_count(&self) -> usize {
        match self {
            Self::Items(items) => items.len(),
            _ => 0,
        }
    }

    pub fn to_html(&self) -> String {
        let mut out = String::new();
        match self {
            Self::Empty => {}
            Self::Items(items) => {
                out.push_str(r#"<div class="list-group">"#);
                for item in items {
                    item.write_html(&mut out);
                }
                out.push_str("</div>");
            }
            Self::Notice(text) => {
                out.push_str(r#"<div class="alert alert-info">"#);
                out.push_str(&escape_html(text));
                out.push_str("</div>");
            }
        }
        out
    }
}

/// Whole numbers print without a fraction, so `4` and `4.0` both read `4`.
fn format_quantity(quantity: f64) -> String {
    // adding zero folds -0.0 into 0.0
    format!("{}", quantity + 0.0)
}

fn present(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|value| !value.is_empty())
}

pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            other => escaped.push(other),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str, price: f64, supplier: Option<&str>, sku: Option<&str>) -> StockRecord {
        StockRecord {
            id: None,
            product_name: name.to_string(),
            quantity: 4.0,
            price,
            supplier: supplier.map(str::to_string),
            sku: sku.map(str::to_string),
            category: None,
        }
    }

    #[test]
    fn one_item_per_record() {
        let records = vec![
            record("Bolt", 3.0, None, None),
            record("Nut", 0.5, Some("Acme"), Some("N-1")),
            record("Washer", 19.999, None, Some("W-9")),
        ];
        let panel = ResultsPanel::from_records(&records);
        assert_eq!(panel.item_count(), 3);
    }

    #[test]
    fn empty_results_render_a_single_notice() {
        let panel = ResultsPanel::from_records(&[]);
        assert_eq!(panel, ResultsPanel::Notice(NO_RESULTS_NOTICE.to_string()));
        let html = panel.to_html();
        assert_eq!(html.matches("alert alert-info").count(), 1);
        assert!(!html.contains("list-group"));
    }

    #[test]
    fn optional_fields_shape_the_item() {
        let bare = ResultItem::from_record(&record("Bolt", 3.0, None, None));
        assert_eq!(bare.quantity_label, "Qty: 4");
        assert_eq!(bare.price_line, "Price: $3.00");
        assert_eq!(bare.sku_line, None);

        let full = ResultItem::from_record(&record("Nut", 19.999, Some("Acme"), Some("N-1")));
        assert_eq!(full.price_line, "Price: $20.00 | Supplier: Acme");
        assert_eq!(full.sku_line.as_deref(), Some("SKU: N-1"));
    }

    #[test]
    fn quantities_print_like_plain_numbers() {
        let mut whole = record("Bolt", 1.0, None, None);
        whole.quantity = 12.0;
        assert_eq!(ResultItem::from_record(&whole).quantity_label, "Qty: 12");

        let mut fractional = record("Cable", 1.0, None, None);
        fractional.quantity = 2.5;
        assert_eq!(ResultItem::from_record(&fractional).quantity_label, "Qty: 2.5");

        let mut zero = record("Pin", 1.0, None, None);
        zero.quantity = -0.0;
        assert_eq!(ResultItem::from_record(&zero).quantity_label, "Qty: 0");
    }

    #[test]
    fn blank_optional_fields_are_omitted() {
        let item = ResultItem::from_record(&record("Bolt", 1.0, Some(""), Some("")));
        assert_eq!(item.price_line, "Price: $1.00");
        assert_eq!(item.sku_line, None);
    }

    #[test]
    fn markup_escapes_server_text() {
        let panel = ResultsPanel::from_records(&[record("<b>Bolt</b>", 1.0, None, None)]);
        let html = panel.to_html();
        assert!(html.contains("&lt;b&gt;Bolt&lt;/b&gt;"));
        assert_eq!(html.matches(r#"class="list-group-item""#).count(), 1);
    }

    #[test]
    fn cleared_panel_renders_nothing() {
        let mut panel = ResultsPanel::from_records(&[record("Bolt", 1.0, None, None)]);
        panel.clear();
        assert_eq!(panel.to_html(), "");
    }
}
