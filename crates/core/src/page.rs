use crate::actions::{activate_overlays, OverlayActivation};
use crate::dom::Document;
use crate::table::flag_low_stock;
use crate::theme::apply_stored_theme;
use crate::traits::PreferenceStore;
use crate::PageError;
use tracing::info;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReadyReport {
    pub low_stock_rows: usize,
    pub overlays: OverlayActivation,
    pub dark_mode: bool,
}

/// The synchronous page-ready pass: low-stock flags on every table, overlay
/// activation, and the stored theme. The alert timer is scheduled separately.
pub fn on_page_ready<S>(document: &mut Document, store: &S) -> Result<ReadyReport, PageError>
where
    S: PreferenceStore + ?Sized,
{
    let low_stock_rows: usize = document.tables.values_mut().map(flag_low_stock).sum();
    let overlays = activate_overlays(document);
    let dark_mode = apply_stored_theme(&mut document.body, store)?;

    info!(
        low_stock_rows,
        tooltips = overlays.tooltips,
        popovers = overlays.popovers,
        dark_mode,
        "page ready"
    );
    Ok(ReadyReport {
        low_stock_rows,
        overlays,
        dark_mode,
    })
}
