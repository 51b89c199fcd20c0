use crate::format::{file_name_from_path, format_currency, parse_number_or_zero};

pub const PROCESSING_LABEL: &str = r#"<i class="fas fa-spinner fa-spin me-2"></i>Processing..."#;
const FILE_ICON: &str = r#"<i class="fas fa-file me-2"></i>"#;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitControl {
    pub label: String,
    pub disabled: bool,
}

impl SubmitControl {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            disabled: false,
        }
    }

    /// Runs as the form submits. Purely cosmetic: the submission itself
    /// proceeds, and the control is never re-enabled.
    pub fn guard(&mut self) {
        self.disabled = true;
        self.label = PROCESSING_LABEL.to_string();
    }
}

/// Quantity and unit-price inputs of the sale form plus the total display.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SaleForm {
    quantity: String,
    unit_price: String,
    display: String,
}

impl SaleForm {
    pub fn set_quantity(&mut self, value: impl Into<String>) -> &str {
        self.quantity = value.into();
        self.recompute()
    }

    pub fn set_unit_price(&mut self, value: impl Into<String>) -> &str {
        self.unit_price = value.into();
        self.recompute()
    }

    pub fn display(&self) -> &str {
        &self.display
    }

    pub fn total(&self) -> f64 {
        sale_total(&self.quantity, &self.unit_price)
    }

    fn recompute(&mut self) -> &str {
        self.display = format!("Total: {}", format_currency(self.total()));
        &self.display
    }
}

pub fn sale_total(quantity: &str, unit_price: &str) -> f64 {
    parse_number_or_zero(quantity) * parse_number_or_zero(unit_price)
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileInput {
    pub help_text: String,
}

impl FileInput {
    pub fn on_change(&mut self, selected_path: &str) -> &str {
        self.help_text = format!("{FILE_ICON}{}", file_name_from_path(selected_path));
        &self.help_text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn guard_disables_and_shows_spinner() {
        let mut submit = SubmitControl::new("Save");
        submit.guard();
        assert!(submit.disabled);
        assert_eq!(submit.label, PROCESSING_LABEL);

        submit.guard();
        assert!(submit.disabled);
    }

    #[test]
    fn unparsable_quantity_counts_as_zero() {
        let mut form = SaleForm::default();
        form.set_quantity("abc");
        assert_eq!(form.set_unit_price("5"), "Total: $0.00");
    }

    #[test]
    fn total_updates_from_either_field() {
        let mut form = SaleForm::default();
        assert_eq!(form.set_unit_price("2.5"), "Total: $0.00");
        assert_eq!(form.set_quantity("3"), "Total: $7.50");
        assert_eq!(form.total(), 7.5);
    }

    #[test]
    fn file_name_is_echoed_without_path() {
        let mut input = FileInput::default();
        let echoed = input.on_change(r"C:\fakepath\inventory.csv");
        assert!(echoed.ends_with("inventory.csv"));
        assert!(!echoed.contains("fakepath"));
    }
}
