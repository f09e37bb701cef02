#![allow(clippy::unwrap_used)]

use super::util::*;

// ── truncate ──────────────────────────────────────────────────

#[test]
fn test_truncate_short_string() {
    assert_eq!(truncate("groceries", 10), "groceries");
}

#[test]
fn test_truncate_long_string() {
    assert_eq!(truncate("entertainment", 6), "enter…");
}

#[test]
fn test_truncate_zero_max() {
    assert_eq!(truncate("bills", 0), "");
}

#[test]
fn test_truncate_multibyte() {
    assert_eq!(truncate("crème brûlée", 6), "crème…");
}

// ── progress_bar ──────────────────────────────────────────────

#[test]
fn test_progress_bar_half() {
    assert_eq!(progress_bar(0.5, 4), "[██░░]");
}

#[test]
fn test_progress_bar_clamps() {
    assert_eq!(progress_bar(3.0, 3), "[███]");
    assert_eq!(progress_bar(-1.0, 3), "[░░░]");
}

// ── scrolling ─────────────────────────────────────────────────

#[test]
fn test_scroll_down_moves_window() {
    let (mut index, mut scroll) = (2, 0);
    scroll_down(&mut index, &mut scroll, 10, 3);
    assert_eq!((index, scroll), (3, 1));
}

#[test]
fn test_scroll_down_stops_at_end() {
    let (mut index, mut scroll) = (4, 2);
    scroll_down(&mut index, &mut scroll, 5, 3);
    assert_eq!((index, scroll), (4, 2));
}

#[test]
fn test_scroll_up_pulls_window() {
    let (mut index, mut scroll) = (3, 3);
    scroll_up(&mut index, &mut scroll);
    assert_eq!((index, scroll), (2, 2));
}

#[test]
fn test_scroll_to_bottom_and_top() {
    let (mut index, mut scroll) = (0, 0);
    scroll_to_bottom(&mut index, &mut scroll, 10, 4);
    assert_eq!((index, scroll), (9, 6));
    scroll_to_top(&mut index, &mut scroll);
    assert_eq!((index, scroll), (0, 0));
}

#[test]
fn test_scroll_to_bottom_empty_list() {
    let (mut index, mut scroll) = (0, 0);
    scroll_to_bottom(&mut index, &mut scroll, 0, 4);
    assert_eq!((index, scroll), (0, 0));
}
