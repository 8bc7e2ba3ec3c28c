//! Integration tests for source range serialization

use super::test_utils::SourceFixture;
use refl::error::CommandError;
use refl::protocol::{range_builder, Interval, Position, Range, RangeSpec};
use std::path::Path;

#[test]
fn test_position_and_interval_forms() {
    let fixture = SourceFixture::new("Pos.agda");
    let start = Position::new(&fixture.path, 10, 1, 11).unwrap();
    let end = Position::new(&fixture.path, 15, 1, 16).unwrap();

    assert_eq!(start.to_string(), "(Pn () 10 1 11 )");
    assert_eq!(
        Interval::new(start, end).to_string(),
        "[Interval (Pn () 10 1 11 ) (Pn () 15 1 16 )]"
    );
}

#[test]
fn test_single_interval_range() {
    let fixture = SourceFixture::new("Foo.agda");
    let range = range_builder(&fixture.path, 10, 1, 11, 15, 1, 16).unwrap();
    assert_eq!(
        range.to_string(),
        format!(
            "(intervalsToRange (Just (mkAbsolute \"{}\")) [Interval (Pn () 10 1 11 ) (Pn () 15 1 16 )])",
            fixture.display()
        )
    );
    assert_eq!(range.src_file(), Some(fixture.path.as_path()));
}

#[test]
fn test_multi_interval_range_lists_intervals_in_order() {
    let fixture = SourceFixture::new("Multi.agda");
    let p = |o, l, c| Position::new(&fixture.path, o, l, c).unwrap();
    let range = Range::new(vec![
        Interval::new(p(1, 1, 2), p(3, 1, 4)),
        Interval::new(p(20, 2, 5), p(25, 2, 10)),
    ]);

    assert_eq!(
        range.to_string(),
        format!(
            "(intervalsToRange (Just (mkAbsolute \"{}\")) [Interval (Pn () 1 1 2 ) (Pn () 3 1 4 )] [Interval (Pn () 20 2 5 ) (Pn () 25 2 10 )])",
            fixture.display()
        )
    );
}

#[test]
fn test_empty_range_is_no_range() {
    let range = Range::empty();
    assert!(range.is_empty());
    assert_eq!(range.src_file(), None);
    assert_eq!(range.to_string(), "noRange");
    assert_eq!(Range::new(Vec::new()).to_string(), "noRange");
}

#[test]
fn test_missing_file_is_an_invalid_location() {
    let missing = Path::new("/nonexistent/dir/Nope.agda");
    assert_eq!(
        Position::new(missing, 0, 1, 1).unwrap_err(),
        CommandError::InvalidLocation {
            path: missing.to_path_buf()
        }
    );
    assert!(range_builder(missing, 0, 1, 1, 1, 1, 2).is_err());
}

#[test]
fn test_range_spec_resolution() {
    let fixture = SourceFixture::new("Spec.agda");

    let spec: RangeSpec = "10:1:11-15:1:16".parse().unwrap();
    assert_eq!(
        spec.resolve(&fixture.path).unwrap(),
        range_builder(&fixture.path, 10, 1, 11, 15, 1, 16).unwrap()
    );

    let none: RangeSpec = "-".parse().unwrap();
    assert_eq!(none, RangeSpec::NoRange);
    assert!(none.resolve("/nonexistent/Any.agda").unwrap().is_empty());
}

#[test]
fn test_malformed_range_specs_are_rejected() {
    for text in ["", "10:1", "10:1:11", "a:b:c-d:e:f", "1:1:1-2:2:2:2", "1:1:1--2:2:2"] {
        assert!(
            matches!(
                text.parse::<RangeSpec>(),
                Err(CommandError::InvalidArgument { .. })
            ),
            "{text:?} should be rejected"
        );
    }
}
