pub mod actions;
pub mod alerts;
pub mod dom;
pub mod error;
pub mod format;
pub mod forms;
pub mod install;
pub mod models;
pub mod offline;
pub mod page;
pub mod render;
pub mod search;
pub mod stores;
pub mod table;
pub mod theme;
pub mod traits;

pub use actions::{
    activate_overlays, confirm_delete, trigger_print, DeleteControl, OverlayActivation,
};
pub use alerts::{schedule_alert_dismissal, Alert, AlertTray, ALERT_DISMISS_DELAY};
pub use dom::{
    CellKind, ClassList, Document, OverlayKind, OverlayTrigger, Table, TableCell, TableRow,
};
pub use error::{CacheError, PageError, SearchError};
pub use format::{
    file_name_from_path, format_currency, format_price, parse_integer_prefix, parse_number_or_zero,
};
pub use forms::{sale_total, FileInput, SaleForm, SubmitControl};
pub use install::InstallPromptSlot;
pub use models::{InstallOutcome, PageConfig, StockQueryResponse, StockRecord, WorkerConfig};
pub use offline::{
    register_worker, CacheStorage, FetchRequest, HttpResponse, OfflineWorker, Registration,
    ResponseSource, ServedResponse, WorkerState,
};
pub use page::{on_page_ready, ReadyReport};
pub use render::{ResultItem, ResultsPanel};
pub use search::{SearchOutcome, StockSearch};
pub use stores::{
    HttpFetcher, HttpStockQuery, JsonFilePreferences, MemoryPreferences, ScriptProbeRegistry,
};
pub use table::{export_csv, flag_low_stock, CsvDownload, ExportControl};
pub use theme::{apply_stored_theme, toggle_dark_mode};
pub use traits::{
    ConfirmDialog, DeferredPrompt, Fetcher, Navigator, PreferenceStore, PrintService,
    StockQueryBackend, WorkerRegistry,
};
