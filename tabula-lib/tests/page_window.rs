use tabula_lib::page::PageEntry::{self, Ellipsis, Page};
use tabula_lib::page::page_window;

// ============================================================================
// Small page counts
// ============================================================================

#[test]
fn test_single_page() {
    assert_eq!(page_window(1, 1), vec![Page(1)]);
}

#[test]
fn test_two_pages_regardless_of_current() {
    assert_eq!(page_window(2, 1), vec![Page(1), Page(2)]);
    assert_eq!(page_window(2, 2), vec![Page(1), Page(2)]);
}

#[test]
fn test_three_pages_shows_all() {
    for current in 1..=3 {
        assert_eq!(page_window(3, current), vec![Page(1), Page(2), Page(3)]);
    }
}

// ============================================================================
// Ten pages
// ============================================================================

#[test]
fn test_first_page() {
    assert_eq!(page_window(10, 1), vec![Page(1), Page(2), Ellipsis, Page(10)]);
}

#[test]
fn test_second_page() {
    assert_eq!(
        page_window(10, 2),
        vec![Page(1), Page(2), Page(3), Ellipsis, Page(10)]
    );
}

#[test]
fn test_interior_page_hides_neighbours() {
    assert_eq!(
        page_window(10, 5),
        vec![Page(1), Ellipsis, Page(5), Ellipsis, Page(10)]
    );
}

#[test]
fn test_second_to_last_page() {
    assert_eq!(page_window(10, 9), vec![Page(1), Ellipsis, Page(9), Page(10)]);
}

#[test]
fn test_last_page() {
    assert_eq!(page_window(10, 10), vec![Page(1), Ellipsis, Page(9), Page(10)]);
}

// ============================================================================
// Four pages: cases overlap
// ============================================================================

#[test]
fn test_four_pages_every_current() {
    assert_eq!(page_window(4, 1), vec![Page(1), Page(2), Ellipsis, Page(4)]);
    assert_eq!(page_window(4, 2), vec![Page(1), Page(2), Page(3), Ellipsis, Page(4)]);
    assert_eq!(page_window(4, 3), vec![Page(1), Ellipsis, Page(3), Page(4)]);
    assert_eq!(page_window(4, 4), vec![Page(1), Ellipsis, Page(3), Page(4)]);
}

#[test]
fn test_window_is_deterministic() {
    for total in 1..=12 {
        for current in 1..=total {
            assert_eq!(page_window(total, current), page_window(total, current));
        }
    }
}

#[test]
fn test_window_always_starts_at_one_and_ends_at_total() {
    for total in 1..=12 {
        for current in 1..=total {
            let window = page_window(total, current);
            assert_eq!(window.first(), Some(&Page(1)));
            assert_eq!(window.last(), Some(&Page(total)));
        }
    }
}

// ============================================================================
// Serialization
// ============================================================================

#[test]
fn test_entries_serialize_as_numbers_and_ellipsis() {
    let json = serde_json::to_string(&page_window(5, 3)).unwrap();
    assert_eq!(json, r#"[1,"…",3,"…",5]"#);
}

#[test]
fn test_entries_deserialize() {
    let entries: Vec<PageEntry> = serde_json::from_str(r#"[1,"…",4,5]"#).unwrap();
    assert_eq!(entries, vec![Page(1), Ellipsis, Page(4), Page(5)]);
    assert!(serde_json::from_str::<PageEntry>(r#""..""#).is_err());
}
