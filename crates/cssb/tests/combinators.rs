//! Integration tests for joining selectors with combinators.

use cssb::{
    CSS_SELECTOR_BUILDER as builder, Combinator, FragmentKind, SelectorError, combine,
};

#[test]
fn test_adjacent_sibling() -> Result<(), SelectorError> {
    let joined = builder.combine(&builder.element("div")?.id("main")?, "+", &builder.element("p")?)?;
    assert_eq!(joined.stringify(), "div#main + p");
    Ok(())
}

#[test]
fn test_child() -> Result<(), SelectorError> {
    let joined = builder.combine(&builder.element("ul")?, ">", &builder.element("li")?)?;
    assert_eq!(joined.stringify(), "ul > li");
    Ok(())
}

#[test]
fn test_descendant_is_padded() -> Result<(), SelectorError> {
    let joined = builder.combine(&builder.element("nav")?, " ", &builder.element("a")?)?;
    assert_eq!(joined.stringify(), "nav   a");
    Ok(())
}

#[test]
fn test_typed_combine() -> Result<(), SelectorError> {
    let joined = combine(
        &builder.element("h1")?,
        Combinator::GeneralSibling,
        &builder.css_class("note")?,
    );
    assert_eq!(joined.stringify(), "h1 ~ .note");
    Ok(())
}

#[test]
fn test_right_side_becomes_one_literal() -> Result<(), SelectorError> {
    let right = builder.element("td")?.pseudo_class("first-child")?;
    let joined = combine(&builder.element("tr")?, Combinator::Child, &right);

    let kinds: Vec<_> = joined.fragments().iter().map(|f| f.kind()).collect();
    assert_eq!(kinds, vec![FragmentKind::Element, FragmentKind::Literal]);
    assert_eq!(joined.fragments()[1].text(), " > td:first-child");
    Ok(())
}

#[test]
fn test_operands_are_not_modified() -> Result<(), SelectorError> {
    let left = builder.element("a")?;
    let right = builder.element("b")?;
    let _ = combine(&left, Combinator::Child, &right);
    assert_eq!(left.stringify(), "a");
    assert_eq!(right.stringify(), "b");
    Ok(())
}

#[test]
fn test_chaining_after_combine() -> Result<(), SelectorError> {
    let joined = combine(
        &builder.element("div")?.css_class("box")?,
        Combinator::Child,
        &builder.element("p")?,
    );
    // Checks compare against the last non-literal fragment: `.box`.
    assert_eq!(joined.pseudo_class("hover")?.stringify(), "div.box > p:hover");
    assert!(matches!(
        joined.element("span"),
        Err(SelectorError::DuplicateKind { .. })
    ));
    Ok(())
}

#[test]
fn test_invalid_token() -> Result<(), SelectorError> {
    let a = builder.element("a")?;
    let result = builder.combine(&a, "&&", &a);
    assert_eq!(result, Err(SelectorError::InvalidCombinator("&&".to_string())));
    Ok(())
}

#[test]
fn test_nested_combinators() -> Result<(), SelectorError> {
    let selector = builder.combine(
        &builder
            .element("div")?
            .id("main")?
            .css_class("container")?
            .css_class("draggable")?,
        "+",
        &builder.combine(
            &builder.element("table")?.id("data")?,
            "~",
            &builder.combine(
                &builder.element("tr")?.pseudo_class("nth-of-type(even)")?,
                " ",
                &builder.element("td")?.pseudo_class("nth-of-type(even)")?,
            )?,
        )?,
    )?;

    insta::assert_snapshot!(
        selector.stringify(),
        @"div#main.container.draggable + table#data ~ tr:nth-of-type(even)   td:nth-of-type(even)"
    );
    assert_eq!(
        selector.stringify(),
        "div#main.container.draggable + table#data ~ tr:nth-of-type(even)   td:nth-of-type(even)"
    );
    Ok(())
}
