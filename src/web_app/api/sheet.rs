// web_app/api/sheet.rs - Sheet loading and normalization
//
// Turns the CSV export of the gallery sheet into an ordered list of gems:
//
//   fetch -> parse (header row names the fields) -> drop blank rows
//         -> trim every field -> sort by id, descending
//
// Transport failures fail the whole load. Anything wrong inside the CSV is
// handled per row and never fails the load.

use std::cmp::Ordering;
use std::sync::Arc;

use csv::{ReaderBuilder, StringRecord};
use tracing::{info, warn};

use super::config::SheetConfig;
use super::error::LoaderError;
use super::source::{HttpSheetSource, SheetSource};
use crate::web_app::model::Gem;

pub const COLUMN_ID: &str = "gem_id";
pub const COLUMN_CATEGORY: &str = "gem_category";
pub const COLUMN_NAME: &str = "gem_name";
pub const COLUMN_DESCRIPTION: &str = "gem_desc";
pub const COLUMN_IMAGE_URL: &str = "gem_imageurl";

/// Fetches a published sheet and normalizes it into gems
///
/// Stateless apart from its configuration: every call re-fetches, nothing is
/// cached, and the returned vector is fresh.
#[derive(Clone)]
pub struct SheetDataLoader {
    config: SheetConfig,
    source: Arc<dyn SheetSource>,
}

impl std::fmt::Debug for SheetDataLoader {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SheetDataLoader")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl SheetDataLoader {
    /// Loader that fetches over HTTP
    pub fn new(config: SheetConfig) -> Self {
        Self::with_source(config, Arc::new(HttpSheetSource))
    }

    /// Loader with a custom transport
    pub fn with_source(config: SheetConfig, source: Arc<dyn SheetSource>) -> Self {
        Self { config, source }
    }

    pub fn config(&self) -> &SheetConfig {
        &self.config
    }

    /// Fetch and normalize on the current thread
    pub fn load_blocking(&self) -> Result<Vec<Gem>, LoaderError> {
        let url = self.config.export_url();
        info!("Fetching sheet '{}'", self.config.sheet_id);
        let body = self.source.fetch_csv(&url)?;
        Ok(normalize_csv(&body))
    }

    /// Fetch and normalize without blocking the async runtime
    ///
    /// The request runs on Tokio's blocking pool. Dropping the future does not
    /// abort the request; its result is discarded.
    pub async fn load(&self) -> Result<Vec<Gem>, LoaderError> {
        let loader = self.clone();
        tokio::task::spawn_blocking(move || loader.load_blocking())
            .await
            .map_err(|err| LoaderError::Task(err.to_string()))?
    }
}

/// Load the gems of `sheet_id` over HTTP
pub async fn fetch_sheet_data(sheet_id: &str) -> Result<Vec<Gem>, LoaderError> {
    SheetDataLoader::new(SheetConfig::new(sheet_id)).load().await
}

/// Positions of the known columns in the header row
#[derive(Debug, Default)]
struct SheetColumns {
    id: Option<usize>,
    category: Option<usize>,
    name: Option<usize>,
    description: Option<usize>,
    image_url: Option<usize>,
}

impl SheetColumns {
    fn locate(headers: &StringRecord) -> Self {
        let position = |column: &str| {
            headers
                .iter()
                .position(|h| h.trim_start_matches('\u{feff}').trim() == column)
        };

        Self {
            id: position(COLUMN_ID),
            category: position(COLUMN_CATEGORY),
            name: position(COLUMN_NAME),
            description: position(COLUMN_DESCRIPTION),
            image_url: position(COLUMN_IMAGE_URL),
        }
    }

    /// The trimmed gem for `record`, or `None` when both id and name are blank
    fn gem_from(&self, record: &StringRecord) -> Option<Gem> {
        let field = |column: Option<usize>| {
            column
                .and_then(|i| record.get(i))
                .map(str::trim)
                .unwrap_or_default()
                .to_string()
        };

        let gem = Gem {
            id: field(self.id),
            category: field(self.category),
            name: field(self.name),
            description: field(self.description),
            image_url: field(self.image_url),
        };

        (!gem.id.is_empty() || !gem.name.is_empty()).then_some(gem)
    }
}

/// Parse, filter, trim and sort the CSV export of a sheet
///
/// The first row names the fields. Extra columns are ignored and missing
/// ones read as `""`. Short or long rows are accepted. A row the reader
/// cannot decode is skipped; an unreadable header yields no rows.
pub fn normalize_csv(body: &str) -> Vec<Gem> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(body.as_bytes());

    let columns = match reader.headers() {
        Ok(headers) => SheetColumns::locate(headers),
        Err(err) => {
            warn!("Unreadable sheet header, treating sheet as empty: {}", err);
            return Vec::new();
        }
    };

    let mut raw_rows = 0_usize;
    let mut gems = Vec::new();
    for result in reader.records() {
        raw_rows += 1;
        match result {
            Ok(record) => gems.extend(columns.gem_from(&record)),
            Err(err) => warn!("Skipping undecodable sheet row {}: {}", raw_rows, err),
        }
    }
    info!("Raw rows from sheet: {}", raw_rows);

    sort_by_id_desc(&mut gems);
    info!("Cleaned rows after filter: {}", gems.len());

    gems
}

/// Numeric reading of an id: its leading decimal number, if finite
///
/// `"12"`, `"12.5"`, `"-3"`, `"1e3"` and `"7b"` (read as 7) are numeric;
/// `"x1"`, `""`, `"."` and `"Infinity"` are not.
pub fn parse_numeric_id(id: &str) -> Option<f64> {
    let s = id.trim_start();
    let bytes = s.as_bytes();
    let digits_from = |start: usize| {
        bytes[start..]
            .iter()
            .take_while(|b| b.is_ascii_digit())
            .count()
    };

    let mut end = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));
    let int_digits = digits_from(end);
    end += int_digits;

    let mut frac_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        frac_digits = digits_from(end + 1);
        if frac_digits > 0 {
            end += 1 + frac_digits;
        }
    }
    if int_digits + frac_digits == 0 {
        return None;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+' | b'-')) {
            exp_end += 1;
        }
        let exp_digits = digits_from(exp_end);
        if exp_digits > 0 {
            end = exp_end + exp_digits;
        }
    }

    s[..end].parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Descending id order
///
/// Numeric when both ids are numeric, lexicographic otherwise. A numeric id
/// against a non-numeric one compares as strings, so mixed sheets are not
/// totally ordered. String order is by code point, not locale collation:
/// uppercase sorts before lowercase, so `"a1"` comes ahead of `"B1"`.
pub fn compare_ids_desc(a: &str, b: &str) -> Ordering {
    match (parse_numeric_id(a), parse_numeric_id(b)) {
        (Some(x), Some(y)) => y.partial_cmp(&x).unwrap_or(Ordering::Equal),
        _ => b.cmp(a),
    }
}

/// Stable sort by [`compare_ids_desc`]
///
/// `slice::sort_by` may panic on a comparator that is not a total order,
/// which this one is not for mixed ids, hence the merge sort.
pub fn sort_by_id_desc(gems: &mut Vec<Gem>) {
    let items = std::mem::take(gems);
    *gems = merge_sort(items, &|a: &Gem, b: &Gem| compare_ids_desc(&a.id, &b.id));
}

fn merge_sort<T, F>(mut items: Vec<T>, compare: &F) -> Vec<T>
where
    F: Fn(&T, &T) -> Ordering,
{
    if items.len() <= 1 {
        return items;
    }

    let right = items.split_off(items.len() / 2);
    let left = merge_sort(items, compare);
    let right = merge_sort(right, compare);

    let mut merged = Vec::with_capacity(left.len() + right.len());
    let mut left = left.into_iter().peekable();
    let mut right = right.into_iter().peekable();
    loop {
        // Ties keep the left element first
        let take_right = match (left.peek(), right.peek()) {
            (Some(l), Some(r)) => compare(l, r) == Ordering::Greater,
            (Some(_), None) => false,
            (None, Some(_)) => true,
            (None, None) => break,
        };
        merged.extend(if take_right { right.next() } else { left.next() });
    }
    merged
}
