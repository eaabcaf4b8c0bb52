// web_app/model/mod.rs - Shared data models for client and server
//
// These types travel between the server function and the browser, so they
// must stay free of server-only dependencies. The pure gallery helpers
// (search, pagination, page markers) live here so both sides and the tests
// can use them without a Leptos runtime.

use serde::{Deserialize, Serialize};

/// Number of cards shown per gallery page
pub const ITEMS_PER_PAGE: usize = 8;

/// Public directory holding record images, named `{id}.png`
pub const IMAGE_DIR: &str = "/img";

/// Image shown when a record has no image of its own
pub const FALLBACK_IMAGE: &str = "/img/noimage.png";

/// One normalized row of the gallery sheet
///
/// Every field is trimmed and never absent: missing columns become `""`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Gem {
    pub id: String,
    pub category: String,
    pub name: String,
    pub description: String,
    /// Not used for rendering; images are resolved from `id`.
    pub image_url: String,
}

impl Gem {
    /// Path of the image associated with this record
    pub fn image_src(&self) -> String {
        format!("{}/{}.png", IMAGE_DIR, self.id)
    }

    /// Alt text for the card image
    pub fn image_alt(&self) -> String {
        if self.name.is_empty() {
            "No title".to_string()
        } else {
            self.name.clone()
        }
    }

    /// Case-insensitive substring match on name, description or category
    pub fn matches(&self, term: &str) -> bool {
        let needle = term.to_lowercase();
        self.name.to_lowercase().contains(&needle)
            || self.description.to_lowercase().contains(&needle)
            || self.category.to_lowercase().contains(&needle)
    }
}

/// Records matching the search box, in their original order
pub fn filter_gems(gems: &[Gem], term: &str) -> Vec<Gem> {
    gems.iter().filter(|g| g.matches(term)).cloned().collect()
}

/// Number of pages needed for `total_items` cards
pub fn total_pages(total_items: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    total_items.div_ceil(page_size)
}

/// Cards on the 1-based `page`; out-of-range pages are empty
pub fn page_slice(gems: &[Gem], page: usize, page_size: usize) -> Vec<Gem> {
    if page == 0 || page_size == 0 {
        return Vec::new();
    }
    gems.iter()
        .skip((page - 1) * page_size)
        .take(page_size)
        .cloned()
        .collect()
}

/// One slot in the page-number strip
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum PageMarker {
    /// A clickable page number (1-based)
    Page(usize),
    /// A gap standing in for the page at this position
    Ellipsis(usize),
}

/// Page-number strip for `current` of `total` pages
///
/// The first page, the last page and every page within one of `current` get
/// a button. The page two before and two after `current` become an ellipsis
/// unless they are the first or last page. Everything else is omitted.
pub fn page_markers(current: usize, total: usize) -> Vec<PageMarker> {
    (1..=total)
        .filter_map(|page| {
            if page == 1 || page == total || current.abs_diff(page) <= 1 {
                Some(PageMarker::Page(page))
            } else if (page + 2 == current && page > 1) || (page == current + 2 && page < total) {
                Some(PageMarker::Ellipsis(page))
            } else {
                None
            }
        })
        .collect()
}

/// Where a pagination strip sits relative to the grid
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaginationPosition {
    #[default]
    Top,
    Bottom,
}

impl PaginationPosition {
    /// Spacing between the strip and the grid
    pub fn spacing_class(&self) -> &'static str {
        match self {
            PaginationPosition::Top => "mb-6",
            PaginationPosition::Bottom => "mt-10",
        }
    }
}

impl std::fmt::Display for PaginationPosition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PaginationPosition::Top => write!(f, "top"),
            PaginationPosition::Bottom => write!(f, "bottom"),
        }
    }
}

/// Next expanded-card id after the toggle on card `id` is clicked
///
/// Only one card is expanded at a time; clicking the open card closes it.
pub fn toggle_expanded(current: Option<&str>, id: &str) -> Option<String> {
    if current == Some(id) {
        None
    } else {
        Some(id.to_string())
    }
}
