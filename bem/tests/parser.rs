use bem::parser::ClassName;
use bem::{BlockSet, Separators, parse};
use rstest::rstest;

fn parse_default(names: &[&str]) -> BlockSet {
    parse(names.iter().copied(), &Separators::default())
}

fn modifiers<'a>(set: impl IntoIterator<Item = &'a String>) -> Vec<&'a str> {
    set.into_iter().map(|s| s.as_str()).collect()
}

#[test]
fn plain_names_become_empty_blocks() {
    let blocks = parse_default(&["foo", "bar"]);
    assert_eq!(blocks.names().collect::<Vec<_>>(), vec!["foo", "bar"]);
    assert!(blocks.iter().all(|b| b.is_empty()));
}

#[test]
fn element_under_block() {
    let blocks = parse_default(&["foo__element"]);
    let foo = blocks.get("foo").expect("block foo");
    assert!(foo.modifiers.is_empty());
    let element = foo.element("element").expect("element");
    assert!(element.is_empty());
}

#[test]
fn element_modifier() {
    let blocks = parse_default(&["foo__element_modifier"]);
    let element = blocks.get("foo").unwrap().element("element").unwrap();
    assert_eq!(modifiers(&element.modifiers), vec!["modifier"]);
}

#[test]
fn block_modifier() {
    let blocks = parse_default(&["foo_modifier"]);
    let foo = blocks.get("foo").unwrap();
    assert_eq!(modifiers(&foo.modifiers), vec!["modifier"]);
    assert!(foo.elements.is_empty());
}

#[test]
fn element_rest_is_searched_for_the_modifier_separator() {
    let blocks = parse_default(&["a__b__c"]);
    let a = blocks.get("a").unwrap();
    assert_eq!(a.elements.keys().collect::<Vec<_>>(), vec!["b"]);
    assert_eq!(modifiers(&a.element("b").unwrap().modifiers), vec!["_c"]);
}

#[test]
fn element_separator_is_only_searched_once() {
    let blocks = parse(["a__b__c"], &Separators::new("__", "--"));
    let a = blocks.get("a").unwrap();
    assert_eq!(a.elements.keys().collect::<Vec<_>>(), vec!["b__c"]);
    assert!(a.element("b__c").unwrap().is_empty());
}

#[test]
fn leftmost_modifier_separator_wins_inside_element() {
    let blocks = parse_default(&["card__title_big_red"]);
    let title = blocks.get("card").unwrap().element("title").unwrap();
    assert_eq!(modifiers(&title.modifiers), vec!["big_red"]);
}

#[test]
fn parsing_is_idempotent() {
    let names = ["card", "card__title", "card__title_big", "card_active", "nav"];
    let doubled: Vec<&str> = names.iter().chain(names.iter()).copied().collect();
    assert_eq!(parse_default(&names), parse_default(&doubled));
}

#[test]
fn first_seen_order_is_preserved() {
    let blocks = parse_default(&[
        "b__y",
        "a",
        "b__x",
        "b_m2",
        "b_m1",
        "b__y_z",
        "b__y_a",
    ]);
    assert_eq!(blocks.names().collect::<Vec<_>>(), vec!["b", "a"]);
    let b = blocks.get("b").unwrap();
    assert_eq!(b.elements.keys().collect::<Vec<_>>(), vec!["y", "x"]);
    assert_eq!(modifiers(&b.modifiers), vec!["m2", "m1"]);
    assert_eq!(modifiers(&b.element("y").unwrap().modifiers), vec!["z", "a"]);
}

#[test]
fn later_plain_element_keeps_existing_modifiers() {
    let blocks = parse_default(&["foo__bar_big", "foo__bar"]);
    let bar = blocks.get("foo").unwrap().element("bar").unwrap();
    assert_eq!(modifiers(&bar.modifiers), vec!["big"]);
}

#[test]
fn block_created_by_element_also_collects_modifiers() {
    let blocks = parse_default(&["foo__bar", "foo_active", "foo"]);
    assert_eq!(blocks.len(), 1);
    let foo = blocks.get("foo").unwrap();
    assert_eq!(modifiers(&foo.modifiers), vec!["active"]);
    assert!(foo.element("bar").is_some());
}

#[rstest]
#[case("__foo", ClassName::Block("__foo"))]
#[case("foo__", ClassName::BlockModifier { block: "foo", modifier: "_" })]
#[case("_foo", ClassName::Block("_foo"))]
#[case("foo_", ClassName::Block("foo_"))]
#[case("foo", ClassName::Block("foo"))]
#[case("foo___bar", ClassName::Element { block: "foo", element: "_bar" })]
fn invalid_splits_fall_back(#[case] name: &str, #[case] expected: ClassName<'static>) {
    assert_eq!(ClassName::classify(name, &Separators::default()), expected);
}

#[test]
fn custom_separators_are_literal() {
    let separators = Separators::new("-.", "--");
    let blocks = parse(["menu-.item--open", "menu--wide", "a.b"], &separators);
    let menu = blocks.get("menu").unwrap();
    assert_eq!(modifiers(&menu.modifiers), vec!["wide"]);
    assert_eq!(
        modifiers(&menu.element("item").unwrap().modifiers),
        vec!["open"]
    );
    assert!(blocks.get("a.b").is_some());
}

#[test]
fn overlapping_separators() {
    let separators = Separators::new("--", "-");
    assert_eq!(
        ClassName::classify("btn--icon-small", &separators),
        ClassName::ElementModifier {
            block: "btn",
            element: "icon",
            modifier: "small",
        }
    );
    assert_eq!(
        ClassName::classify("btn-small", &separators),
        ClassName::BlockModifier {
            block: "btn",
            modifier: "small",
        }
    );
}

#[test]
fn multibyte_names_split_on_char_boundaries() {
    let blocks = parse_default(&["блок__элемент_мод"]);
    let element = blocks.get("блок").unwrap().element("элемент").unwrap();
    assert_eq!(modifiers(&element.modifiers), vec!["мод"]);
}

#[test]
fn separate_parses_do_not_share_state() {
    let first = parse_default(&["foo__bar"]);
    let second = parse_default(&["baz"]);
    assert!(first.get("baz").is_none());
    assert!(second.get("foo").is_none());
}
