use chrono::Utc;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::{Path, PathBuf};
use stockfront_core::{
    apply_stored_theme, on_page_ready, register_worker, toggle_dark_mode, Document,
    ExportControl, FetchRequest, HttpFetcher, HttpStockQuery, JsonFilePreferences, OfflineWorker,
    PageConfig, PreferenceStore, ResultsPanel, SaleForm, ScriptProbeRegistry, SearchOutcome,
    StockSearch, WorkerConfig,
};
use stockfront_core::theme::DARK_MODE_KEY;
use tracing::{info, warn};
use url::Url;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser)]
#[command(name = "stockfront", version)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Base URL of the inventory server
    #[arg(long, env = "STOCKFRONT_BASE_URL", default_value = "http://localhost:8000")]
    base_url: String,

    /// Directory holding persisted preferences
    #[arg(long, env = "STOCKFRONT_STATE_DIR")]
    state_dir: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Command {
    /// Run one incremental stock search and print the results panel.
    Search {
        /// Text typed into the search field
        #[arg(long)]
        query: String,
        /// Print the panel markup instead of plain text.
        #[arg(long, default_value_t = false)]
        html: bool,
    },
    /// Compute a sale total the way the sale form does.
    Total {
        #[arg(long)]
        quantity: String,
        #[arg(long)]
        price: String,
    },
    /// Export a table from a page snapshot to export.csv.
    Export {
        /// JSON page snapshot with tables keyed by id.
        #[arg(long)]
        document_file: PathBuf,
        /// Table selector, e.g. `#stock-table`.
        #[arg(long)]
        target: String,
        #[arg(long, default_value = ".")]
        out_dir: PathBuf,
    },
    /// Run the page-ready pass over a page snapshot and report low-stock rows.
    LowStock {
        #[arg(long)]
        document_file: PathBuf,
    },
    /// Show or flip the persisted dark-mode preference.
    DarkMode {
        #[arg(value_enum, default_value_t = DarkModeAction::Status)]
        action: DarkModeAction,
    },
    /// Install the offline cache worker, then serve each path through it.
    Offline {
        /// Paths to request after install.
        #[arg(long = "path", required = true)]
        paths: Vec<String>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum DarkModeAction {
    Status,
    Toggle,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let app_version = env!("CARGO_PKG_VERSION");

    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(fmt::layer())
        .init();

    let cli = Cli::parse();
    let config = PageConfig::default();
    info!(
        version = app_version,
        base_url = %cli.base_url,
        started_at = %Utc::now().to_rfc3339(),
        "stockfront boot"
    );

    match cli.command {
        Command::Search { query, html } => {
            let base = Url::parse(&cli.base_url)?;
            let backend = HttpStockQuery::new(&base, &config.search_path)?;
            let search = StockSearch::with_min_chars(backend, config.min_query_chars);

            match search.on_input(&query).await {
                SearchOutcome::Cleared => println!("query too short; results cleared"),
                SearchOutcome::Failed => println!("search failed; see log"),
                SearchOutcome::Stale { ticket } => println!("response {ticket} superseded"),
                SearchOutcome::Rendered { items } => {
                    let panel = search.panel().await;
                    if html {
                        println!("{}", panel.to_html());
                    } else {
                        print_panel(&panel);
                    }
                    info!(items, "results rendered");
                }
            }
        }
        Command::Total { quantity, price } => {
            let mut form = SaleForm::default();
            form.set_quantity(quantity);
            println!("{}", form.set_unit_price(price));
        }
        Command::Export {
            document_file,
            target,
            out_dir,
        } => {
            let document = load_document(&document_file)?;
            let download = ExportControl::new(target).on_click(&document)?;
            let path = download.save_into(&out_dir).await?;
            println!("{} ({} bytes)", path.display(), download.content.len());
        }
        Command::LowStock { document_file } => {
            let mut document = load_document(&document_file)?;
            let store = open_preferences(cli.state_dir.as_deref())?;
            let report = on_page_ready(&mut document, &store)?;

            for (id, table) in &document.tables {
                for (index, row) in table.rows.iter().enumerate() {
                    if row.classes.contains(stockfront_core::table::LOW_STOCK_CLASS) {
                        let cells: Vec<&str> =
                            row.cells.iter().map(|cell| cell.text.as_str()).collect();
                        println!("#{id} row {index}: {}", cells.join(" | "));
                    }
                }
            }
            println!("low-stock rows: {}", report.low_stock_rows);
        }
        Command::DarkMode { action } => {
            let mut store = open_preferences(cli.state_dir.as_deref())?;
            let mut document = Document::default();
            let enabled = match action {
                DarkModeAction::Status => {
                    apply_stored_theme(&mut document.body, &store)?
                }
                DarkModeAction::Toggle => {
                    apply_stored_theme(&mut document.body, &store)?;
                    toggle_dark_mode(&mut document.body, &mut store)?
                }
            };
            println!(
                "dark mode: {} ({}={:?} in {})",
                if enabled { "on" } else { "off" },
                DARK_MODE_KEY,
                store.get(DARK_MODE_KEY)?,
                store.path().display()
            );
        }
        Command::Offline { paths } => {
            let origin = Url::parse(&cli.base_url)?;
            let worker_config = WorkerConfig::default();

            let registry = ScriptProbeRegistry::new(HttpFetcher::new(), origin.clone());
            if register_worker(&registry, &worker_config.script_path).await.is_none() {
                warn!("continuing without a registered worker script");
            }

            let worker = OfflineWorker::new(HttpFetcher::new(), &origin, worker_config)?;
            match worker.install().await {
                Ok(stored) => println!("installed: {stored} seed assets cached"),
                Err(error) => println!("install failed ({error}); requests go to the network"),
            }

            for path in paths {
                let request = FetchRequest::get(origin.join(&path)?);
                match worker.handle_fetch(&request).await {
                    Ok(served) => println!(
                        "{path}: {:?} status={} bytes={}",
                        served.source,
                        served.response.status,
                        served.response.body.len()
                    ),
                    Err(error) => println!("{path}: failed: {error}"),
                }
            }
        }
    }

    Ok(())
}

fn print_panel(panel: &ResultsPanel) {
    match panel {
        ResultsPanel::Empty => {}
        ResultsPanel::Notice(text) => println!("{text}"),
        ResultsPanel::Items(items) => {
            for item in items {
                println!("{}  {}", item.name, item.quantity_label);
                println!("  {}", item.price_line);
                if let Some(sku) = &item.sku_line {
                    println!("  {sku}");
                }
            }
        }
    }
}

fn load_document(path: &Path) -> anyhow::Result<Document> {
    let raw = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&raw)?)
}

fn open_preferences(state_dir: Option<&Path>) -> anyhow::Result<JsonFilePreferences> {
    let dir = match state_dir {
        Some(dir) => dir.to_path_buf(),
        None => JsonFilePreferences::default_dir()?,
    };
    Ok(JsonFilePreferences::open_in(&dir)?)
}
