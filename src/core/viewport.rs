/// Visible slice of a list after keeping the selection inside the window.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Window {
    pub scroll_offset: usize,
    pub start: usize,
    pub end: usize,
}

/// Scrollbar thumb geometry in viewport rows. `None` means the whole list
/// fits and no scrollbar is drawn.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Scrollbar {
    pub thumb_size: usize,
    pub thumb_offset: usize,
}

/// Compute the visible window for a list, scrolling just enough to keep
/// `selected` inside it. Pure: same inputs always yield the same window.
pub fn compute_window(
    item_count: usize,
    viewport_height: usize,
    selected: usize,
    scroll_offset: usize,
) -> Window {
    if item_count == 0 || viewport_height == 0 {
        return Window {
            scroll_offset: 0,
            start: 0,
            end: 0,
        };
    }

    let selected = selected.min(item_count - 1);
    let max_offset = item_count.saturating_sub(viewport_height);

    let mut offset = scroll_offset.min(max_offset);
    if selected < offset {
        offset = selected;
    } else if selected >= offset + viewport_height {
        offset = selected + 1 - viewport_height;
    }

    Window {
        scroll_offset: offset,
        start: offset,
        end: (offset + viewport_height).min(item_count),
    }
}

pub fn scrollbar(item_count: usize, viewport_height: usize, scroll_offset: usize) -> Option<Scrollbar> {
    if viewport_height == 0 || item_count <= viewport_height {
        return None;
    }

    let h = viewport_height as f64;
    let n = item_count as f64;
    let thumb_size = ((h / n * h).round() as usize).clamp(1, viewport_height);

    let track = viewport_height - thumb_size;
    let max_offset = item_count - viewport_height;
    let thumb_offset = ((scroll_offset as f64 / max_offset as f64) * track as f64).round() as usize;

    Some(Scrollbar {
        thumb_size,
        thumb_offset: thumb_offset.min(track),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selection_above_window_scrolls_up_to_it() {
        let window = compute_window(50, 10, 3, 20);
        assert_eq!(window.scroll_offset, 3);
        assert_eq!(window.start, 3);
        assert_eq!(window.end, 13);
    }

    #[test]
    fn selection_below_window_scrolls_down_to_reveal_it() {
        let window = compute_window(100, 10, 15, 0);
        assert_eq!(window.scroll_offset, 6);
        assert_eq!(window.end, 16);
    }

    #[test]
    fn selection_inside_window_leaves_offset_unchanged() {
        let window = compute_window(100, 10, 25, 20);
        assert_eq!(window.scroll_offset, 20);
    }

    #[test]
    fn window_end_clamps_to_item_count() {
        let window = compute_window(5, 10, 4, 0);
        assert_eq!(window.start, 0);
        assert_eq!(window.end, 5);
    }

    #[test]
    fn empty_list_yields_empty_window() {
        let window = compute_window(0, 10, 0, 0);
        assert_eq!(window, Window { scroll_offset: 0, start: 0, end: 0 });
    }

    #[test]
    fn compute_window_is_idempotent() {
        let first = compute_window(100, 10, 15, 0);
        let second = compute_window(100, 10, 15, first.scroll_offset);
        assert_eq!(first, second);
        let third = compute_window(100, 10, 15, 0);
        assert_eq!(first, third);
    }

    #[test]
    fn no_scrollbar_when_list_fits() {
        assert_eq!(scrollbar(10, 10, 0), None);
        assert_eq!(scrollbar(3, 10, 0), None);
        assert_eq!(scrollbar(0, 10, 0), None);
    }

    #[test]
    fn scrollbar_thumb_scales_with_list_size() {
        let bar = scrollbar(100, 10, 0).expect("scrollbar");
        assert_eq!(bar.thumb_size, 1);
        assert_eq!(bar.thumb_offset, 0);

        let bar = scrollbar(20, 10, 10).expect("scrollbar");
        assert_eq!(bar.thumb_size, 5);
        assert_eq!(bar.thumb_offset, 5);
    }

    #[test]
    fn scrollbar_thumb_reaches_bottom_at_max_offset() {
        let bar = scrollbar(100, 10, 90).expect("scrollbar");
        assert_eq!(bar.thumb_offset + bar.thumb_size, 10);
    }
}
