use super::Span;

#[test]
fn from_len_sets_end() {
    let span = Span::from_len(4, 3);
    assert_eq!(span, Span::new(4, 7));
    assert_eq!(span.len(), 3);
    assert!(!span.is_empty());
}

#[test]
fn default_is_empty() {
    assert!(Span::default().is_empty());
}

#[test]
fn contains_is_half_open() {
    let span = Span::new(2, 5);
    assert!(!span.contains(1));
    assert!(span.contains(2));
    assert!(span.contains(4));
    assert!(!span.contains(5));
}

#[test]
fn to_range_slices_source() {
    let source = "## [v1.0.0]";
    let span = Span::new(4, 10);
    assert_eq!(&source[span.to_range()], "v1.0.0");
}

#[test]
fn display_as_range() {
    assert_eq!(Span::new(3, 9).to_string(), "3..9");
}

#[test]
fn offsets_beyond_four_gib() {
    let start = usize::MAX - 10;
    let span = Span::from_len(start, 4);
    assert_eq!(span.len(), 4);
    assert!(span.contains(start + 3));
    assert!(!span.contains(start + 4));
}
