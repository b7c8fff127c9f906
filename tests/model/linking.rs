//! Integration tests for the item/parameter link protocol
//!
//! Tests bidirectional consistency, ordering, relinking, and strict mode.

use proptest::prelude::*;
use scorecore_foundation::{Args, ErrorKind, args};
use scorecore_model::{ItemId, ParameterId, Score, ScoreConfig};

fn score_with_parameters(score: &mut Score, count: usize) -> Vec<ParameterId> {
    (0..count)
        .map(|i| {
            let value = i64::try_from(i).unwrap();
            score.create_parameter(args! { "value" => value }).unwrap()
        })
        .collect()
}

fn assert_bilinked(score: &Score, item: ItemId) {
    for &parameter in score.item(item).unwrap().parameters() {
        assert_eq!(score.parameter(parameter).unwrap().item(), Some(item));
    }
}

// =============================================================================
// Bidirectional Consistency
// =============================================================================

#[test]
fn every_linked_parameter_points_back() {
    let mut score = Score::new();
    let item = score.create_item(Args::new()).unwrap();
    let parameters = score_with_parameters(&mut score, 4);

    score.designer().bilink_parameters(item, &parameters).unwrap();

    assert_eq!(score.item(item).unwrap().parameters(), parameters.as_slice());
    assert_bilinked(&score, item);
}

#[test]
fn links_accumulate_across_calls() {
    let mut score = Score::new();
    let item = score.create_item(Args::new()).unwrap();
    let parameters = score_with_parameters(&mut score, 3);

    let mut designer = score.designer();
    designer.bilink_parameters(item, &parameters[..1]).unwrap();
    designer.bilink_parameters(item, &parameters[1..]).unwrap();

    assert_eq!(score.item(item).unwrap().parameters(), parameters.as_slice());
    assert_bilinked(&score, item);
}

#[test]
fn empty_link_is_a_no_op() {
    let mut score = Score::new();
    let item = score.create_item(Args::new()).unwrap();
    score.designer().bilink_parameters(item, &[]).unwrap();
    assert!(score.item(item).unwrap().parameters().is_empty());
}

#[test]
fn linked_parameters_resolve_in_order() {
    let mut score = Score::new();
    let item = score.create_item(Args::new()).unwrap();
    let mut parameters = score_with_parameters(&mut score, 3);
    parameters.reverse();

    score.designer().bilink_parameters(item, &parameters).unwrap();

    let values: Vec<_> = score
        .linked_parameters(item)
        .unwrap()
        .iter()
        .map(|p| p.value())
        .collect();
    assert_eq!(values, vec![Some(2), Some(1), Some(0)]);
}

#[test]
fn parameters_link_to_containers() {
    let mut score = Score::new();
    let container = score.create_container(args! { "info" => "phrase" }).unwrap();
    let parameters = score_with_parameters(&mut score, 2);

    score
        .designer()
        .bilink_parameters(container.as_item(), &parameters)
        .unwrap();

    assert_bilinked(&score, container.as_item());
}

// =============================================================================
// Failure Leaves The Graph Unchanged
// =============================================================================

#[test]
fn stale_parameter_aborts_whole_link() {
    let mut score = Score::new();
    let item = score.create_item(Args::new()).unwrap();
    let parameters = score_with_parameters(&mut score, 3);
    score.destroy(parameters[2]).unwrap();

    let err = score
        .designer()
        .bilink_parameters(item, &parameters)
        .unwrap_err();

    assert!(matches!(err.kind, ErrorKind::StaleEntity(_)));
    assert!(score.item(item).unwrap().parameters().is_empty());
    assert_eq!(score.parameter(parameters[0]).unwrap().item(), None);
}

#[test]
fn linking_to_a_parameter_id_is_rejected() {
    let mut score = Score::new();
    let parameters = score_with_parameters(&mut score, 2);
    let not_an_item = score.item_id(parameters[0].into());

    assert!(matches!(
        not_an_item.unwrap_err().kind,
        ErrorKind::WrongEntityKind { .. }
    ));
}

// =============================================================================
// Relinking
// =============================================================================

#[test]
fn default_relink_overwrites_silently() {
    let mut score = Score::new();
    let first = score.create_item(Args::new()).unwrap();
    let second = score.create_item(Args::new()).unwrap();
    let parameters = score_with_parameters(&mut score, 1);

    score.designer().bilink_parameters(first, &parameters).unwrap();
    score.designer().bilink_parameters(second, &parameters).unwrap();

    assert_eq!(score.parameter(parameters[0]).unwrap().item(), Some(second));
    // The first item still lists the parameter
    assert_eq!(score.item(first).unwrap().parameters(), parameters.as_slice());
}

#[test]
fn default_double_link_to_same_item_duplicates() {
    let mut score = Score::new();
    let item = score.create_item(Args::new()).unwrap();
    let parameters = score_with_parameters(&mut score, 1);

    score.designer().bilink_parameters(item, &parameters).unwrap();
    score.designer().bilink_parameters(item, &parameters).unwrap();

    assert_eq!(
        score.item(item).unwrap().parameters(),
        [parameters[0], parameters[0]]
    );
    assert_bilinked(&score, item);
}

#[test]
fn strict_mode_rejects_relink() {
    let mut score = Score::with_config(ScoreConfig::strict());
    let first = score.create_item(Args::new()).unwrap();
    let second = score.create_item(Args::new()).unwrap();
    let parameters = score_with_parameters(&mut score, 2);

    score
        .designer()
        .bilink_parameters(first, &parameters[..1])
        .unwrap();
    let err = score
        .designer()
        .bilink_parameters(second, &parameters)
        .unwrap_err();

    if let ErrorKind::AlreadyLinked { parameter, item } = err.kind {
        assert_eq!(parameter, parameters[0].object());
        assert_eq!(item, first.object());
    } else {
        panic!("Expected AlreadyLinked");
    }
    assert!(score.item(second).unwrap().parameters().is_empty());
    assert_eq!(score.parameter(parameters[1]).unwrap().item(), None);
}

#[test]
fn strict_mode_rejects_parameter_listed_twice() {
    let mut score = Score::with_config(ScoreConfig::strict());
    let item = score.create_item(Args::new()).unwrap();
    let parameters = score_with_parameters(&mut score, 2);
    let order = [parameters[0], parameters[1], parameters[0]];

    let err = score
        .designer()
        .bilink_parameters(item, &order)
        .unwrap_err();

    assert!(matches!(err.kind, ErrorKind::DuplicateParameter(id) if id == parameters[0].object()));
    assert!(score.item(item).unwrap().parameters().is_empty());
    assert_eq!(score.parameter(parameters[0]).unwrap().item(), None);
}

// =============================================================================
// Public Mutation Keeps Links Consistent
// =============================================================================

#[test]
fn public_mutators_never_unlink() {
    let mut score = Score::new();
    let (item, parameters) = score
        .designer()
        .build_item(
            args! { "info" => "A4" },
            vec![args! { "value" => 69 }, args! { "value" => 2 }],
        )
        .unwrap();
    let container = score.create_container(Args::new()).unwrap();

    // A copy of a linked item stays outside the score
    let copy = score.item(item).unwrap().clone();
    let plain = score.create_item(Args::new()).unwrap();
    assert_eq!(copy.parameters(), parameters.as_slice());
    assert!(score.item(plain).unwrap().parameters().is_empty());

    score.object_mut(item.object()).unwrap().add_info("tuning");
    for &parameter in &parameters {
        score.object_mut(parameter.object()).unwrap().add_info("edited");
        score.set_parameter_value(parameter, None).unwrap();
    }
    score.set_container(item, Some(container)).unwrap();
    score.set_container(plain, Some(container)).unwrap();

    assert_eq!(score.item(item).unwrap().parameters(), parameters.as_slice());
    assert_bilinked(&score, item);
    assert_bilinked(&score, plain);
    for id in score.ids().collect::<Vec<_>>() {
        if let Ok(listed) = score.item_id(id) {
            assert_bilinked(&score, listed);
        }
    }
}

// =============================================================================
// Designer Builders
// =============================================================================

#[test]
fn build_item_creates_linked_graph() {
    let mut score = Score::with_config(ScoreConfig::strict());
    let (item, parameters) = score
        .designer()
        .build_item(
            args! { "info" => "C4 quarter" },
            vec![
                args! { "value" => 60, "info" => "pitch" },
                args! { "value" => 1, "info" => "duration" },
            ],
        )
        .unwrap();

    assert_eq!(score.item(item).unwrap().parameters(), parameters.as_slice());
    assert_bilinked(&score, item);
}

#[test]
fn build_item_with_bad_item_args_adds_nothing() {
    let mut score = Score::new();
    let err = score
        .designer()
        .build_item(args! { "pitch" => 60 }, vec![Args::new()])
        .unwrap_err();

    assert!(matches!(err.kind, ErrorKind::InvalidArgument { .. }));
    assert!(score.is_empty());
}

proptest! {
    #[test]
    fn bilink_preserves_order_and_consistency(
        count in 0usize..12,
        picks in prop::collection::vec(0usize..12, 0..24),
    ) {
        let mut score = Score::new();
        let item = score.create_item(Args::new()).unwrap();
        let parameters = score_with_parameters(&mut score, count.max(1));
        let order: Vec<_> = picks.iter().map(|&i| parameters[i % parameters.len()]).collect();

        score.designer().bilink_parameters(item, &order).unwrap();

        prop_assert_eq!(score.item(item).unwrap().parameters(), order.as_slice());
        for parameter in &order {
            prop_assert_eq!(score.parameter(*parameter).unwrap().item(), Some(item));
        }
    }
}
