// Copyright (c) 2025 Tiku Project. All rights reserved.
// Released under the GPL-3.0 license as described in the file LICENSE.

use itertools::Itertools;

use crate::html;

/// Maximum number of consecutive page buttons around the current page.
pub const MAX_VISIBLE: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageItem {
    Page { number: usize, active: bool },
    Gap,
}

/// Compute the page buttons for `current` out of `total_pages`.
///
/// `current` is not clamped: an out-of-range page still yields a window that
/// lies inside `[1, total_pages]`.
pub fn page_items(current: usize, total_pages: usize) -> Vec<PageItem> {
    if total_pages <= 1 {
        return vec![];
    }

    let mut start = current.saturating_sub(MAX_VISIBLE / 2).max(1);
    let end = total_pages.min(start.saturating_add(MAX_VISIBLE - 1));
    if end.saturating_sub(start) + 1 < MAX_VISIBLE {
        start = end.saturating_sub(MAX_VISIBLE - 1).max(1);
    }

    let page = |number: usize| PageItem::Page {
        number,
        active: number == current,
    };

    let mut items = vec![];
    if start > 1 {
        items.push(page(1));
        if start > 2 {
            items.push(PageItem::Gap);
        }
    }
    items.extend((start..=end).map(page));
    if end < total_pages {
        if end < total_pages - 1 {
            items.push(PageItem::Gap);
        }
        items.push(page(total_pages));
    }
    items
}

pub fn html_page_item(item: &PageItem) -> String {
    match *item {
        PageItem::Page { number, active } => {
            let class_name = match active {
                true => "page-btn active",
                false => "page-btn",
            };
            html!(button class = class_name, onclick = format!("goToPage({})", number) => {number})
        }
        PageItem::Gap => html!(span style = "padding:0 4px;" => "…"),
    }
}

pub fn render_pagination(current: usize, total_pages: usize) -> String {
    page_items(current, total_pages)
        .iter()
        .map(html_page_item)
        .join("")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn numbers(items: &[PageItem]) -> Vec<Option<usize>> {
        items
            .iter()
            .map(|item| match item {
                PageItem::Page { number, .. } => Some(*number),
                PageItem::Gap => None,
            })
            .collect()
    }

    #[test]
    fn test_single_page_has_no_buttons() {
        assert!(page_items(1, 1).is_empty());
        assert!(page_items(1, 0).is_empty());
        assert_eq!(render_pagination(1, 1), "");
    }

    #[test]
    fn test_first_page() {
        let items = page_items(1, 10);
        assert_eq!(
            numbers(&items),
            [Some(1), Some(2), Some(3), Some(4), Some(5), None, Some(10)]
        );
        assert_eq!(items[0], PageItem::Page { number: 1, active: true });
    }

    #[test]
    fn test_centered_window() {
        let items = page_items(5, 10);
        assert_eq!(
            numbers(&items),
            [Some(1), None, Some(3), Some(4), Some(5), Some(6), Some(7), None, Some(10)]
        );
        let active: Vec<_> = items
            .iter()
            .filter(|i| matches!(i, PageItem::Page { active: true, .. }))
            .collect();
        assert_eq!(active, [&PageItem::Page { number: 5, active: true }]);
    }

    #[test]
    fn test_last_page_shifts_window() {
        assert_eq!(
            numbers(&page_items(10, 10)),
            [Some(1), None, Some(6), Some(7), Some(8), Some(9), Some(10)]
        );
    }

    #[test]
    fn test_no_gap_for_adjacent_edges() {
        // Window 2..=6, page 1 sits right next to it.
        assert_eq!(
            numbers(&page_items(4, 7)),
            [Some(1), Some(2), Some(3), Some(4), Some(5), Some(6), Some(7)]
        );
    }

    #[test]
    fn test_few_pages() {
        assert_eq!(numbers(&page_items(2, 3)), [Some(1), Some(2), Some(3)]);
    }

    #[test]
    fn test_out_of_range_current() {
        assert_eq!(
            numbers(&page_items(12, 10)),
            [Some(1), None, Some(6), Some(7), Some(8), Some(9), Some(10)]
        );
        assert_eq!(numbers(&page_items(0, 3)), [Some(1), Some(2), Some(3)]);

        let items = page_items(usize::MAX, 3);
        assert_eq!(numbers(&items), [Some(1), Some(2), Some(3)]);
        assert!(!items.iter().any(|i| matches!(i, PageItem::Page { active: true, .. })));
        let last = usize::MAX;
        assert_eq!(
            numbers(&page_items(last, last)),
            [Some(1), None, Some(last - 4), Some(last - 3), Some(last - 2), Some(last - 1), Some(last)]
        );
    }

    #[test]
    fn test_markup() {
        assert_eq!(
            render_pagination(2, 2),
            concat!(
                r#"<button class="page-btn" onclick="goToPage(1)">1</button>"#,
                r#"<button class="page-btn active" onclick="goToPage(2)">2</button>"#,
            )
        );
        assert!(render_pagination(1, 10).contains(r#"<span style="padding:0 4px;">…</span>"#));
    }
}
