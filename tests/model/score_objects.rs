//! Integration tests for score objects
//!
//! Tests the `"info"` argument, leftover-key rejection, and info operations.

use proptest::prelude::*;
use scorecore_foundation::{Args, ErrorKind, args};
use scorecore_model::{AsScoreObject, Score, ScoreObject};

// =============================================================================
// Construction
// =============================================================================

#[test]
fn empty_bag_gives_no_info() {
    let object = ScoreObject::new(Args::new()).unwrap();
    assert!(object.info().is_empty());
}

#[test]
fn info_argument_becomes_first_entry() {
    let object = ScoreObject::new(args! { "info" => "x" }).unwrap();
    assert_eq!(object.info(), ["x"]);
}

#[test]
fn bogus_key_is_rejected_by_name() {
    let err = ScoreObject::new(args! { "info" => "x", "bogus" => 1 }).unwrap_err();
    if let ErrorKind::InvalidArgument { key, constructor } = &err.kind {
        assert_eq!(key, "bogus");
        assert_eq!(constructor, "ScoreObject::new");
    } else {
        panic!("Expected InvalidArgument");
    }
}

#[test]
fn first_of_several_leftovers_is_named() {
    let err = ScoreObject::new(args! { "zz" => 1, "mm" => 2, "aa" => 3 }).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::InvalidArgument { ref key, .. } if key == "aa"));
}

// =============================================================================
// Info Operations
// =============================================================================

#[test]
fn info_grows_in_order() {
    let mut object = ScoreObject::new(args! { "info" => "theme" }).unwrap();
    object.add_info("variation");
    object.add_info("theme");

    assert_eq!(object.info(), ["theme", "variation", "theme"]);
    assert!(object.has_this_info("variation"));
    assert!(!object.has_this_info("coda"));
}

#[test]
fn info_through_the_score() {
    let mut score = Score::new();
    let item = score.create_item(args! { "info" => "melody" }).unwrap();

    score.object_mut(item.object()).unwrap().add_info("soprano");

    let item = score.item(item).unwrap();
    assert_eq!(item.info(), ["melody", "soprano"]);
    assert!(item.has_this_info("soprano"));
}

proptest! {
    #[test]
    fn add_then_has(texts in prop::collection::vec("\\PC{0,12}", 1..8), probe in "\\PC{0,12}") {
        let mut object = ScoreObject::default();
        for text in &texts {
            object.add_info(text.clone());
        }

        prop_assert_eq!(object.info(), texts.as_slice());
        for text in &texts {
            prop_assert!(object.has_this_info(text));
        }
        prop_assert_eq!(object.has_this_info(&probe), texts.contains(&probe));
    }
}
