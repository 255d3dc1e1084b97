//! Tests for the built-in value kinds: parsing, rendering, ordering.

use ranktree::util::testing;
use ranktree::{Fraction, OrderedTree, Point, TreeValue, Word};

#[ctor::ctor]
fn init() {
    testing::init_test_setup();
}

fn renderings<V: TreeValue>(tree: &OrderedTree<V>) -> Vec<String> {
    tree.iter().map(ToString::to_string).collect()
}

// ============================================================
// Round-trip law: parse(render(v)) compares equal to v
// ============================================================

#[test]
fn given_integer_values_when_rendering_then_reparse_compares_equal() {
    for v in [-9i64, 0, 42, i64::MAX, i64::MIN] {
        let reparsed = i64::parse(&v.to_string()).unwrap();
        assert_eq!(reparsed, v);
    }
}

#[test]
fn given_word_values_when_rendering_then_reparse_compares_equal() {
    for text in ["a", "word", "Zebra", "hyphen-ated"] {
        let value = Word::parse(text).unwrap();
        let reparsed = Word::parse(&value.to_string()).unwrap();
        assert_eq!(reparsed, value);
    }
}

#[test]
fn given_point_values_when_rendering_then_reparse_compares_equal() {
    for (x, y) in [(0, 0), (-3, 4), (7, -2), (i64::MAX, i64::MIN)] {
        let value = Point::new(x, y);
        let reparsed = Point::parse(&value.to_string()).unwrap();
        assert_eq!(reparsed, value);
    }
}

#[test]
fn given_fraction_values_when_rendering_then_reparse_compares_equal() {
    for (n, d) in [(1, 2), (-7, 3), (0, 5), (2, 4)] {
        let value = Fraction::new(n, d).unwrap();
        let reparsed = Fraction::parse(&value.to_string()).unwrap();
        assert_eq!(reparsed, value);
        assert_eq!(
            reparsed.to_string(),
            value.to_string(),
            "rendering is stable"
        );
    }
}

// ============================================================
// Parse rejections
// ============================================================

#[test]
fn given_malformed_input_when_parsing_then_fails_with_kind_and_input() {
    let err = i64::parse("five").unwrap_err();
    assert_eq!(err.kind, "Integer");
    assert_eq!(err.input, "five");

    assert!(Point::parse("1,2,3").is_err());
    assert!(Point::parse("1,b").is_err());
    assert!(Fraction::parse("1/0").is_err());
    assert!(Fraction::parse("").is_err());
    assert!(Word::parse("two words").is_err());
}

// ============================================================
// Ordering semantics
// ============================================================

#[test]
fn given_points_when_sorting_then_distance_from_origin_wins() {
    let mut tree = OrderedTree::new();
    for text in ["3,4", "1,0", "0,2", "-1,-1"] {
        tree.add(Point::parse(text).unwrap());
    }
    assert_eq!(renderings(&tree), ["1,0", "-1,-1", "0,2", "3,4"]);
}

#[test]
fn given_fractions_when_sorting_then_cross_multiplication_wins() {
    let mut tree = OrderedTree::new();
    for text in ["1/2", "1/3", "5/6", "2/3"] {
        tree.add(Fraction::parse(text).unwrap());
    }
    assert_eq!(renderings(&tree), ["1/3", "1/2", "2/3", "5/6"]);
}

#[test]
fn given_equal_fractions_when_inserting_then_newest_lands_last() {
    // 1/2, 2/4 and 3/6 compare equal but render differently, so the
    // in-order renderings reveal where each duplicate went.
    let mut tree = OrderedTree::new();
    tree.add(Fraction::parse("1/2").unwrap());
    tree.add(Fraction::parse("2/4").unwrap());
    tree.add(Fraction::parse("3/6").unwrap());
    assert_eq!(renderings(&tree), ["1/2", "2/4", "3/6"]);
}

#[test]
fn given_equal_fractions_when_balancing_then_relative_order_survives() {
    let mut tree = OrderedTree::new();
    for text in ["9/9", "1/2", "2/4", "1/3", "3/6", "4/8"] {
        tree.add(Fraction::parse(text).unwrap());
    }
    tree.balance();
    assert_eq!(
        renderings(&tree),
        ["1/3", "1/2", "2/4", "3/6", "4/8", "9/9"]
    );
}

// ============================================================
// Examples & mixed fractions
// ============================================================

#[test]
fn given_examples_when_rendering_then_each_is_its_canonical_hint() {
    assert_eq!(i64::example().to_string(), "0");
    assert_eq!(Word::example().to_string(), "word");
    assert_eq!(Point::example().to_string(), "0,0");
    assert_eq!(Fraction::example().to_string(), "0/1");
}

#[test]
fn given_mixed_form_fraction_when_parsing_then_whole_part_folds_in() {
    let f = Fraction::parse("2/1/4").unwrap();
    assert_eq!(f.to_string(), "9/4");
    let negative = Fraction::parse("-1/1/2").unwrap();
    assert_eq!(negative.to_string(), "-1/2");
}
