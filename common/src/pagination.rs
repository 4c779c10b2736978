//! Page links shown under the search results.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageLink {
    Page(u64),
    Gap,
}

pub fn total_pages(count: u64, page_size: u64) -> u64 {
    if page_size == 0 {
        return 0;
    }
    count.div_ceil(page_size)
}

/// Up to seven pages are listed in full. Past that: first page, the pages
/// around `current`, last page, with gaps where pages are skipped.
pub fn page_links(current: u64, total: u64) -> Vec<PageLink> {
    if total <= 7 {
        return (1..=total).map(PageLink::Page).collect();
    }

    let mut links = vec![PageLink::Page(1)];
    if current > 3 {
        links.push(PageLink::Gap);
    }
    let start = current.saturating_sub(1).max(2);
    let end = (current + 1).min(total - 1);
    links.extend((start..=end).map(PageLink::Page));
    if current + 2 < total {
        links.push(PageLink::Gap);
    }
    links.push(PageLink::Page(total));
    links
}

pub fn has_previous(current: u64) -> bool {
    current > 1
}

pub fn has_next(current: u64, total: u64) -> bool {
    current < total
}

/// "1 result", "2,345 results".
pub fn result_count_label(count: u64) -> String {
    let digits = count.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, digit) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    let noun = if count == 1 { "result" } else { "results" };
    format!("{grouped} {noun}")
}


#[cfg(test)]
mod tests {
    use super::PageLink::{Gap, Page};
    use super::*;

    #[test]
    fn counts_pages() {
        assert_eq!(total_pages(0, 15), 0);
        assert_eq!(total_pages(15, 15), 1);
        assert_eq!(total_pages(16, 15), 2);
    }

    #[test]
    fn short_ranges_are_listed_in_full() {
        assert_eq!(page_links(2, 5), [Page(1), Page(2), Page(3), Page(4), Page(5)]);
        assert!(page_links(1, 0).is_empty());
    }

    #[test]
    fn long_ranges_collapse_around_current() {
        assert_eq!(page_links(1, 20), [Page(1), Page(2), Gap, Page(20)]);
        assert_eq!(page_links(3, 20), [Page(1), Page(2), Page(3), Page(4), Gap, Page(20)]);
        assert_eq!(page_links(10, 20), [Page(1), Gap, Page(9), Page(10), Page(11), Gap, Page(20)]);
        assert_eq!(page_links(20, 20), [Page(1), Gap, Page(19), Page(20)]);
        assert_eq!(page_links(18, 20), [Page(1), Gap, Page(17), Page(18), Page(19), Page(20)]);
    }

    #[test]
    fn count_labels() {
        assert_eq!(result_count_label(1), "1 result");
        assert_eq!(result_count_label(0), "0 results");
        assert_eq!(result_count_label(2345), "2,345 results");
        assert_eq!(result_count_label(1_000_000), "1,000,000 results");
    }
}
