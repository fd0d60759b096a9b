//! Matchers against parsed HTML

use dom_matchers::html::HtmlElement;
use dom_matchers::{expect, Element};
use rstest::rstest;

#[rstest]
#[case("<div>  Hello World  </div>", "Hello World")]
#[case("<p>\n  Saved <em>draft</em>\n</p>", "Saved draft")]
#[case("<button><span>Go</span></button>", "Go")]
fn test_have_text(#[case] markup: &str, #[case] expected: &str) {
    let el = HtmlElement::parse(markup).unwrap();
    expect(&el).to_have_text(expected);
}

#[rstest]
#[case("<div>Hello World</div>", "World", true)]
#[case("<div>Hello World</div>", "Goodbye", false)]
#[case("<div>Hello <i>big</i> World</div>", "big World", true)]
fn test_contain_text(#[case] markup: &str, #[case] needle: &str, #[case] pass: bool) {
    let el = HtmlElement::parse(markup).unwrap();
    assert_eq!(expect(&el).try_to("toContainText", Some(needle)).is_ok(), pass);
}

#[test]
fn test_visibility_and_classes() {
    let el = HtmlElement::parse("<div class=\"ng-hide foo\">x</div>").unwrap();
    expect(&el)
        .to_be_hidden()
        .to_have_class("foo")
        .not()
        .to_have_class("bar");
}

#[test]
fn test_nested_elements() {
    let list = HtmlElement::parse(
        "<ul class=\"menu\"><li>Home</li><li class=\"ng-hide\">Admin</li></ul>",
    )
    .unwrap();
    let items = list.children();

    expect(&list).to_contain_text("Admin").to_have_class("menu");
    expect(&items[0]).to_have_text("Home").not().to_be_hidden();
    expect(&items[1]).to_have_text("Admin").to_be_hidden();
}

#[test]
fn test_html_text_is_never_absent() {
    let el = HtmlElement::parse("<div></div>").unwrap();
    assert_eq!(el.text().as_deref(), Some(""));
    expect(&el).to_have_text("");
}

#[test]
#[should_panic(expected = "Expected '<div>Hello World</div>' to have the text 'Goodbye'")]
fn test_failure_panics_with_message() {
    let el = HtmlElement::parse("<div>Hello World</div>").unwrap();
    expect(&el).to_contain_text("Goodbye");
}

#[test]
fn test_failure_message_dumps_nested_markup() {
    let list = HtmlElement::parse("<ul><li>Home</li></ul>").unwrap();
    let err = expect(&list).try_to("toHaveText", Some("Away")).unwrap_err();
    assert_eq!(
        err.to_string(),
        "Expected '<ul><li>Home</li></ul>' to have the text 'Away'"
    );

    let item = list.find("li").unwrap();
    let err = expect(&item).not().try_to("toContainText", Some("Ho")).unwrap_err();
    assert_eq!(
        err.to_string(),
        "Expected '<li>Home</li>' not to have the text 'Ho'"
    );
}
