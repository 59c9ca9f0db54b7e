// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::slot::{SLOT_MINUTES, SLOTS_PER_DAY, SlotRange};

#[test]
fn test_constants_cover_a_fourteen_hour_window() {
    let total_minutes: u16 = u16::from(SLOTS_PER_DAY) * u16::from(SLOT_MINUTES);
    assert_eq!(total_minutes, 14 * 60);
}

#[test]
fn test_full_day_range_is_valid() {
    let range: SlotRange = SlotRange::new(0, SLOTS_PER_DAY);
    assert!(range.is_valid());
}

#[test]
fn test_empty_range_is_invalid() {
    let range: SlotRange = SlotRange::new(10, 10);
    assert!(!range.is_valid());
}

#[test]
fn test_inverted_range_is_invalid() {
    let range: SlotRange = SlotRange::new(20, 10);
    assert!(!range.is_valid());
}

#[test]
fn test_range_past_end_of_day_is_invalid() {
    let range: SlotRange = SlotRange::new(0, SLOTS_PER_DAY + 1);
    assert!(!range.is_valid());
}

#[test]
fn test_contains_accepts_equal_range() {
    let parent: SlotRange = SlotRange::new(8, 20);
    let child: SlotRange = SlotRange::new(8, 20);
    assert!(parent.contains(&child));
}

#[test]
fn test_contains_accepts_inner_range() {
    let parent: SlotRange = SlotRange::new(8, 20);
    let child: SlotRange = SlotRange::new(10, 12);
    assert!(parent.contains(&child));
}

#[test]
fn test_contains_rejects_range_starting_early() {
    let parent: SlotRange = SlotRange::new(8, 20);
    let child: SlotRange = SlotRange::new(7, 12);
    assert!(!parent.contains(&child));
}

#[test]
fn test_contains_rejects_range_ending_late() {
    let parent: SlotRange = SlotRange::new(8, 20);
    let child: SlotRange = SlotRange::new(10, 21);
    assert!(!parent.contains(&child));
}

#[test]
fn test_touching_ranges_do_not_overlap() {
    let a: SlotRange = SlotRange::new(0, 10);
    let b: SlotRange = SlotRange::new(10, 20);
    assert!(!a.overlaps(&b));
    assert!(!b.overlaps(&a));
}

#[test]
fn test_intersecting_ranges_overlap() {
    let a: SlotRange = SlotRange::new(0, 10);
    let b: SlotRange = SlotRange::new(9, 20);
    assert!(a.overlaps(&b));
    assert!(b.overlaps(&a));
}

#[test]
fn test_empty_range_overlaps_nothing() {
    let empty: SlotRange = SlotRange::new(5, 5);
    let other: SlotRange = SlotRange::new(0, 10);
    assert!(!empty.overlaps(&other));
    assert!(!other.overlaps(&empty));
}

#[test]
fn test_duration_of_single_slot() {
    let range: SlotRange = SlotRange::new(4, 5);
    assert_eq!(range.duration_minutes(), u16::from(SLOT_MINUTES));
}

#[test]
fn test_duration_of_inverted_range_is_zero() {
    let range: SlotRange = SlotRange::new(5, 4);
    assert_eq!(range.duration_minutes(), 0);
}
