use crate::dom::{Document, OverlayKind};
use crate::traits::{ConfirmDialog, Navigator, PrintService};
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteControl {
    pub href: String,
    pub item_name: String,
}

impl DeleteControl {
    pub fn new(href: impl Into<String>, item_name: impl Into<String>) -> Self {
        Self {
            href: href.into(),
            item_name: item_name.into(),
        }
    }

    pub fn confirmation_message(&self) -> String {
        format!(
            "Are you sure you want to delete \"{}\"? This action cannot be undone.",
            self.item_name
        )
    }
}

/// The default link action is always suppressed; navigation happens only
/// after the user affirms the dialog. Returns whether it navigated.
pub fn confirm_delete(
    control: &DeleteControl,
    dialog: &dyn ConfirmDialog,
    navigator: &mut dyn Navigator,
) -> bool {
    if !dialog.confirm(&control.confirmation_message()) {
        debug!(item = %control.item_name, "delete declined");
        return false;
    }
    navigator.navigate(&control.href);
    true
}

pub fn trigger_print(printer: &dyn PrintService) {
    printer.print();
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OverlayActivation {
    pub tooltips: usize,
    pub popovers: usize,
}

/// Activates every flagged tooltip and popover trigger on the page.
pub fn activate_overlays(document: &mut Document) -> OverlayActivation {
    let mut activation = OverlayActivation::default();
    for trigger in &mut document.overlays {
        trigger.active = true;
        match trigger.kind {
            OverlayKind::Tooltip => activation.tooltips += 1,
            OverlayKind::Popover => activation.popovers += 1,
        }
    }
    activation
}
