use super::*;

fn paging(current: u64, total_pages: u64, total_items: u64) -> Pagination {
    Pagination { items_per_page: 20, total_items, current_page: current, total_pages }
}

#[test]
fn first_page_has_no_previous() {
    let p = paging(1, 5, 90);
    assert!(!has_prev(&p));
    assert!(has_next(&p));
}

#[test]
fn last_page_has_no_next() {
    let p = paging(5, 5, 90);
    assert!(has_prev(&p));
    assert!(!has_next(&p));
}

#[test]
fn single_page_has_neither() {
    let p = paging(1, 1, 3);
    assert!(!has_prev(&p));
    assert!(!has_next(&p));
}

#[test]
fn summary_formats_counts() {
    assert_eq!(page_summary(&paging(2, 5, 90)), "Page 2 of 5 (90 total)");
    assert_eq!(page_summary(&paging(0, 0, 0)), "No results");
}
