//! Selector fragments travel through the JSON helpers.

use cssb::{CSS_SELECTOR_BUILDER as builder, Combinator, Fragment, FragmentKind};
use objects::{from_json, get_json};

#[test]
fn test_fragment_list_round_trip() {
    let selector = builder
        .element("a")
        .and_then(|s| s.pseudo_class("focus"))
        .unwrap();

    let json = get_json(selector.fragments()).unwrap();
    let fragments: Vec<Fragment> = from_json(&json).unwrap();

    assert_eq!(fragments.as_slice(), selector.fragments());
    assert_eq!(fragments[1].kind(), FragmentKind::PseudoClass);
}

#[test]
fn test_kind_names_are_kebab_case() {
    assert_eq!(get_json(&FragmentKind::PseudoElement).unwrap(), "\"pseudo-element\"");
    assert_eq!(get_json(&Combinator::AdjacentSibling).unwrap(), "\"adjacent-sibling\"");
}
