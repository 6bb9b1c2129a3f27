use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result, bail};
use tracing::{info, info_span, warn};

use divscan_ingest::{
    Dataset, DatasetLoader, DatasetSource, DirectorySource, HttpSource, LoadReport,
};
use divscan_model::Category;
use divscan_view::{
    ExportOptions, GiftMatch, HighYieldRow, RenderedView, ViewState, apply_sort,
    collect_high_yield, load_filter, match_gifts, read_gift_file, render, select_category,
    write_gift_matches_file, write_high_yield_file,
};

use crate::cli::{ExportArgs, GiftArgs, ShowArgs, SourceArgs};
use crate::config::{DEFAULT_DATA_DIR, Settings};

/// Default file name of the high-yield report.
pub const HIGH_YIELD_FILE: &str = "high_yield_stocks.csv";
/// Default gift list, looked up in the data directory.
pub const GIFT_LIST_FILE: &str = "股東會紀念品.csv";
/// Default file name of the gift cross-reference.
pub const GIFT_MATCH_FILE: &str = "gift_and_high_yield.csv";

/// Where category files are read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataOrigin {
    Directory(PathBuf),
    Remote(String),
}

impl DataOrigin {
    /// Flags first, then settings, then `./data`.
    pub fn resolve(args: &SourceArgs, settings: &Settings) -> Self {
        if let Some(dir) = &args.data_dir {
            return Self::Directory(dir.clone());
        }
        if let Some(url) = &args.base_url {
            return Self::Remote(url.clone());
        }
        if let Some(dir) = &settings.data_dir {
            return Self::Directory(dir.clone());
        }
        if let Some(url) = &settings.base_url {
            return Self::Remote(url.clone());
        }
        Self::Directory(PathBuf::from(DEFAULT_DATA_DIR))
    }

    /// Directory for default report paths; the working directory for remote data.
    pub fn output_dir(&self) -> &Path {
        match self {
            Self::Directory(dir) => dir,
            Self::Remote(_) => Path::new("."),
        }
    }
}

/// A loaded dataset together with what went wrong while loading it.
#[derive(Debug)]
pub struct Session {
    pub origin: DataOrigin,
    pub dataset: Dataset,
    pub report: LoadReport,
}

/// Loads every category from `origin` through the load-stage filter.
pub fn load_session(origin: DataOrigin) -> Result<Session> {
    let span = info_span!("load", origin = ?origin);
    let _guard = span.enter();
    let start = Instant::now();

    let (dataset, report) = match &origin {
        DataOrigin::Directory(dir) => load_all(
            DirectorySource::new(dir)
                .with_context(|| format!("open data directory {}", dir.display()))?,
        ),
        DataOrigin::Remote(url) => {
            load_all(HttpSource::new(url.clone()).context("build HTTP client")?)
        }
    };

    if report.failures.len() == Category::ALL.len() {
        warn!("no category could be loaded");
    }
    info!(
        records = dataset.total_records(),
        failed = report.failures.len(),
        duration_ms = start.elapsed().as_millis(),
        "dataset ready"
    );
    Ok(Session {
        origin,
        dataset,
        report,
    })
}

fn load_all<S: DatasetSource>(source: S) -> (Dataset, LoadReport) {
    DatasetLoader::new(source).load(&Category::ALL, load_filter)
}

/// Category badge counts, in display order.
pub fn run_categories(dataset: &Dataset) -> Vec<(Category, usize)> {
    Category::ALL
        .iter()
        .map(|&category| (category, dataset.count(category)))
        .collect()
}

/// Replays the requested selection and header clicks.
pub fn show_state(args: &ShowArgs) -> ViewState {
    let category = args.category.unwrap_or(Category::Etf);
    let mut state = select_category(ViewState::default(), category);
    for &field in &args.sort {
        state = apply_sort(state, field);
    }
    if args.ascending && !state.sort.ascending {
        state = apply_sort(state, state.sort.field);
    }
    state
}

pub fn run_show(dataset: &Dataset, args: &ShowArgs) -> RenderedView {
    render(&show_state(args), dataset)
}

pub fn export_options(settings: &Settings) -> ExportOptions {
    match &settings.blacklist {
        Some(codes) => ExportOptions::default().with_blacklist(codes.iter().cloned()),
        None => ExportOptions::default(),
    }
}

#[derive(Debug)]
pub struct ExportOutcome {
    pub path: PathBuf,
    pub rows: Vec<HighYieldRow>,
}

pub fn run_export(
    session: &Session,
    args: &ExportArgs,
    settings: &Settings,
) -> Result<ExportOutcome> {
    let rows = collect_high_yield(&session.dataset, &export_options(settings));
    let path = args
        .output
        .clone()
        .unwrap_or_else(|| session.origin.output_dir().join(HIGH_YIELD_FILE));
    write_high_yield_file(&rows, &path)
        .with_context(|| format!("write high-yield report {}", path.display()))?;
    Ok(ExportOutcome { path, rows })
}

#[derive(Debug)]
pub struct GiftOutcome {
    pub path: PathBuf,
    pub matches: Vec<GiftMatch>,
}

pub fn run_gifts(session: &Session, args: &GiftArgs, settings: &Settings) -> Result<GiftOutcome> {
    let gift_file = gift_file(session, args, settings)?;
    let gifts = read_gift_file(&gift_file)
        .with_context(|| format!("read gift list {}", gift_file.display()))?;
    let rows = collect_high_yield(&session.dataset, &export_options(settings));
    let matches = match_gifts(&gifts, &rows);

    let path = args
        .output
        .clone()
        .unwrap_or_else(|| session.origin.output_dir().join(GIFT_MATCH_FILE));
    write_gift_matches_file(&matches, &path)
        .with_context(|| format!("write gift cross-reference {}", path.display()))?;
    Ok(GiftOutcome { path, matches })
}

fn gift_file(session: &Session, args: &GiftArgs, settings: &Settings) -> Result<PathBuf> {
    if let Some(path) = args.gift_file.as_ref().or(settings.gift_file.as_ref()) {
        return Ok(path.clone());
    }
    match &session.origin {
        DataOrigin::Directory(dir) => Ok(dir.join(GIFT_LIST_FILE)),
        DataOrigin::Remote(_) => bail!("no gift list given; pass --gift-file or set gift_file"),
    }
}
