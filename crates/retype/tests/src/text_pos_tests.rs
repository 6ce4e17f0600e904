use super::*;

fn at(offset: u32) -> TextSize {
    TextSize::from(offset)
}

#[test]
fn line_count_ignores_trailing_newline() {
    assert_eq!(LineIndex::new("package main\n").line_count(), 1);
    assert_eq!(LineIndex::new("package main\n\ntype T int\n").line_count(), 3);
    assert_eq!(LineIndex::new("a\nb").line_count(), 2);
}

#[test]
fn empty_text_has_one_line() {
    let index = LineIndex::new("");
    assert_eq!(index.line_count(), 1);
    assert_eq!(index.line_of(at(0)), 1);
}

#[test]
fn line_of_maps_offsets_to_one_based_lines() {
    let index = LineIndex::new("ab\ncd\nef");
    assert_eq!(index.line_of(at(0)), 1);
    assert_eq!(index.line_of(at(2)), 1);
    assert_eq!(index.line_of(at(3)), 2);
    assert_eq!(index.line_of(at(5)), 2);
    assert_eq!(index.line_of(at(6)), 3);
}

#[test]
fn offsets_past_the_end_map_to_last_line() {
    let index = LineIndex::new("ab\ncd\n");
    assert_eq!(index.line_of(at(6)), 2);
    assert_eq!(index.line_of(at(100)), 2);
}

#[test]
fn line_col_counts_bytes_from_line_start() {
    let index = LineIndex::new("package p\ntype T int\n");
    assert_eq!(index.line_col(at(0)), (1, 1));
    assert_eq!(index.line_col(at(15)), (2, 6));
}
