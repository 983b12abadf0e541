//! Pagination math for the ranked tables. Pages are 1-based; the server
//! owns the total page count, the client only windows and clamps.

/// Rows per page, fixed server-side.
pub const PAGE_SIZE: u64 = 10;

/// Page links to show around `current`: all pages when there are at most
/// three, otherwise a 3-wide window pinned to the nearest end when
/// `current` is within one page of it and centered on `current` elsewhere.
pub fn window(total_pages: u32, current: u32) -> Vec<u32> {
    if total_pages == 0 {
        return Vec::new();
    }
    if total_pages <= 3 {
        return (1..=total_pages).collect();
    }
    let start = if current <= 2 {
        1
    } else if current >= total_pages - 1 {
        total_pages - 2
    } else {
        current - 1
    };
    (start..start + 3).collect()
}

/// Previous page, clamped at the first.
pub fn prev(current: u32) -> u32 {
    current.saturating_sub(1).max(1)
}

/// Next page, clamped at the last.
pub fn next(current: u32, total_pages: u32) -> u32 {
    (current + 1).min(total_pages.max(1))
}

/// Serial number of a row: `index` is the row's offset within `page`.
pub fn row_number(page: u32, index: usize) -> u64 {
    (page as u64 - 1) * PAGE_SIZE + index as u64 + 1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn window_is_pinned_or_centered() {
        assert_eq!(window(10, 1), vec![1, 2, 3]);
        assert_eq!(window(10, 2), vec![1, 2, 3]);
        assert_eq!(window(10, 5), vec![4, 5, 6]);
        assert_eq!(window(10, 9), vec![8, 9, 10]);
        assert_eq!(window(10, 10), vec![8, 9, 10]);
    }

    #[test]
    fn window_shows_everything_for_small_listings() {
        assert_eq!(window(2, 1), vec![1, 2]);
        assert_eq!(window(2, 2), vec![1, 2]);
        assert_eq!(window(3, 2), vec![1, 2, 3]);
        assert_eq!(window(1, 1), vec![1]);
        assert!(window(0, 1).is_empty());
    }

    #[test]
    fn prev_and_next_clamp_at_the_ends() {
        assert_eq!(prev(1), 1);
        assert_eq!(prev(2), 1);
        assert_eq!(next(10, 10), 10);
        assert_eq!(next(9, 10), 10);
        assert_eq!(next(1, 0), 1);
    }

    #[test]
    fn row_numbers_continue_across_pages() {
        assert_eq!(row_number(1, 0), 1);
        assert_eq!(row_number(1, 9), 10);
        assert_eq!(row_number(2, 0), 11);
        assert_eq!(row_number(4, 3), 34);
    }
}
