//! Snapshot tests for failure message wording

use dom_matchers::html::HtmlElement;
use dom_matchers::testing::factories::element;
use dom_matchers::{expect, install, MatchError};

fn failure(result: Result<dom_matchers::MatchResult, MatchError>) -> String {
    match result {
        Err(MatchError::AssertionFailed(message)) => message,
        other => panic!("Expected an assertion failure, got {:?}", other),
    }
}

#[test]
fn test_have_text_failure() {
    let el = element("h1").with_text("Welcome");
    let message = failure(expect(&el).try_to("toHaveText", Some("Goodbye")));
    insta::assert_snapshot!(message, @"Expected '<h1>Welcome</h1>' to have the text 'Goodbye'");
}

#[test]
fn test_contain_text_failure() {
    let el = element("div").with_text("Hello World");
    let message = failure(expect(&el).try_to("toContainText", Some("Goodbye")));
    insta::assert_snapshot!(message, @"Expected '<div>Hello World</div>' to have the text 'Goodbye'");
}

#[test]
fn test_negated_contain_text_failure() {
    let el = element("div").with_text("Hello World");
    let message = failure(expect(&el).not().try_to("toContainText", Some("World")));
    insta::assert_snapshot!(message, @"Expected '<div>Hello World</div>' not to have the text 'World'");
}

#[test]
fn test_have_class_failure() {
    let el = element("li").with_classes(["ng-hide", "foo"]);
    let message = failure(expect(&el).try_to("toHaveClass", Some("bar")));
    insta::assert_snapshot!(message, @r#"Expected '<li class="ng-hide foo"></li>' to have a class 'bar'."#);
}

#[test]
fn test_be_hidden_failure_on_html() {
    let el = HtmlElement::parse("<span class=\"badge\">3</span>").unwrap();
    let message = failure(expect(&el).try_to("toBeHidden", None));
    insta::assert_snapshot!(message, @r#"Expected '<span class="badge">3</span>' to have a class 'ng-hide'."#);
}

#[test]
fn test_passing_result_message_reads_not_to_have() {
    let registry = install();
    let el = element("div").with_class("ng-hide");
    let result = registry.compare("toBeHidden", &el, None).unwrap();
    assert!(result.pass);
    insta::assert_snapshot!(result.message, @r#"Expected '<div class="ng-hide"></div>' not to have a class 'ng-hide'."#);
}
