/// Maximum number of page buttons shown at once.
pub const MAX_VISIBLE_PAGES: u32 = 5;

/// Page numbers from two before `current`, at most [`MAX_VISIBLE_PAGES`],
/// clamped to `[1, total]`. Near the last page the window shrinks.
pub fn visible_pages(current: u32, total: u32) -> Vec<u32> {
    if total == 0 {
        return Vec::new();
    }
    let current = current.clamp(1, total);
    let half = MAX_VISIBLE_PAGES / 2;
    let start = current.saturating_sub(half).max(1);
    let end = (start + MAX_VISIBLE_PAGES - 1).min(total);
    (start..=end).collect()
}

pub fn has_previous(current: u32) -> bool {
    current > 1
}

pub fn has_next(current: u32, total: u32) -> bool {
    current < total
}

/// Last existing page when `current` points past the end, e.g. after a bulk
/// delete emptied the final page. `None` when no move is needed.
pub fn clamp_page(current: u32, total: u32) -> Option<u32> {
    (total >= 1 && current > total).then_some(total)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn small_result_shows_every_page() {
        assert_eq!(visible_pages(2, 5), vec![1, 2, 3, 4, 5]);
        assert_eq!(visible_pages(1, 3), vec![1, 2, 3]);
        assert_eq!(visible_pages(1, 1), vec![1]);
    }

    #[test]
    fn window_is_centered_on_current() {
        assert_eq!(visible_pages(4, 20), vec![2, 3, 4, 5, 6]);
        assert_eq!(visible_pages(10, 20), vec![8, 9, 10, 11, 12]);
    }

    #[test]
    fn window_is_clamped_at_both_ends() {
        assert_eq!(visible_pages(1, 20), vec![1, 2, 3, 4, 5]);
        assert_eq!(visible_pages(20, 20), vec![18, 19, 20]);
        assert_eq!(visible_pages(19, 20), vec![17, 18, 19, 20]);
        assert_eq!(visible_pages(99, 20), vec![18, 19, 20]);
        assert!(visible_pages(1, 0).is_empty());
    }

    #[test]
    fn boundaries_disable_navigation() {
        assert!(!has_previous(1));
        assert!(has_previous(2));
        assert!(has_next(4, 5));
        assert!(!has_next(5, 5));
    }

    #[test]
    fn page_past_the_end_moves_to_last_page() {
        assert_eq!(clamp_page(4, 3), Some(3));
        assert_eq!(clamp_page(3, 3), None);
        assert_eq!(clamp_page(1, 5), None);
        assert_eq!(clamp_page(2, 0), None);
    }
}
