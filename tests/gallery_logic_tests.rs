// tests/gallery_logic_tests.rs
// Search, paging and card state as the gallery page drives them

use gem_gallery::web_app::model::*;

fn gem(id: &str, name: &str, description: &str, category: &str) -> Gem {
    Gem {
        id: id.to_string(),
        category: category.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        image_url: String::new(),
    }
}

fn catalogue(n: usize) -> Vec<Gem> {
    (0..n)
        .map(|i| {
            let category = if i % 3 == 0 { "Portrait" } else { "Landscape" };
            gem(&(n - i).to_string(), &format!("Prompt {}", n - i), "", category)
        })
        .collect()
}

#[test]
fn test_items_per_page_constant() {
    assert_eq!(ITEMS_PER_PAGE, 8);
}

#[test]
fn test_image_paths() {
    let g = gem("31", "", "", "");
    assert_eq!(g.image_src(), "/img/31.png");
    assert_eq!(FALLBACK_IMAGE, "/img/noimage.png");
    assert!(FALLBACK_IMAGE.starts_with(IMAGE_DIR));
}

#[test]
fn test_empty_search_shows_everything() {
    let all = catalogue(20);
    assert_eq!(filter_gems(&all, "").len(), 20);
}

#[test]
fn test_search_on_category() {
    let all = catalogue(20);
    let portraits = filter_gems(&all, "PORTRAIT");
    assert_eq!(portraits.len(), 7);
    assert!(portraits.iter().all(|g| g.category == "Portrait"));
}

#[test]
fn test_search_on_description() {
    let all = vec![
        gem("2", "Plain", "neon CITY at night", "Scene"),
        gem("1", "Other", "forest", "Scene"),
    ];
    let found = filter_gems(&all, "city");
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].id, "2");
}

#[test]
fn test_no_match_is_empty() {
    let all = catalogue(5);
    let found = filter_gems(&all, "zzz");
    assert!(found.is_empty());
    assert_eq!(total_pages(found.len(), ITEMS_PER_PAGE), 0);
}

#[test]
fn test_pages_cover_all_items_once() {
    let all = catalogue(21);
    let pages = total_pages(all.len(), ITEMS_PER_PAGE);
    assert_eq!(pages, 3);

    let mut seen: Vec<Gem> = Vec::new();
    for page in 1..=pages {
        let slice = page_slice(&all, page, ITEMS_PER_PAGE);
        assert!(slice.len() <= ITEMS_PER_PAGE);
        seen.extend(slice);
    }
    assert_eq!(seen, all);
}

#[test]
fn test_strip_for_many_pages() {
    use PageMarker::*;
    let markers = page_markers(6, 12);
    assert_eq!(
        markers,
        vec![Page(1), Ellipsis(4), Page(5), Page(6), Page(7), Ellipsis(8), Page(12)]
    );
}

#[test]
fn test_strip_current_page_always_present() {
    for total in 1..15 {
        for current in 1..=total {
            assert!(page_markers(current, total).contains(&PageMarker::Page(current)));
            assert!(page_markers(current, total).contains(&PageMarker::Page(1)));
            assert!(page_markers(current, total).contains(&PageMarker::Page(total)));
        }
    }
}

#[test]
fn test_expand_one_card_at_a_time() {
    let mut expanded: Option<String> = None;
    expanded = toggle_expanded(expanded.as_deref(), "3");
    assert_eq!(expanded.as_deref(), Some("3"));

    expanded = toggle_expanded(expanded.as_deref(), "4");
    assert_eq!(expanded.as_deref(), Some("4"));

    expanded = toggle_expanded(expanded.as_deref(), "4");
    assert_eq!(expanded, None);
}

#[test]
fn test_search_resets_to_first_page() {
    let all = catalogue(30);
    let mut current_page = 4_usize;
    assert!(page_slice(&all, current_page, ITEMS_PER_PAGE).len() == 6);

    // What the search box does on input
    let query = "prompt 1";
    current_page = 1;

    let filtered = filter_gems(&all, query);
    let shown = page_slice(&filtered, current_page, ITEMS_PER_PAGE);
    assert!(!shown.is_empty());
}
