//! End-to-end checks of the render -> find -> assert pipeline on a small
//! welcome component

use rendercheck::suite::run_case;
use rendercheck::testing::assert_rendered;
use rendercheck::{
    assert_text_equals, find, render, CaseFailure, ComponentDescription, Lookup, Selector,
};
use rstest::{fixture, rstest};

const HELLO_WORLD: &str = r#"
<div class="hello">
  <h1>Welcome to Your Vue.js App</h1>
  <h2>Essential Links</h2>
  <ul>
    <li><a href="https://vuejs.org">Core Docs</a></li>
    <li><a href="https://forum.vuejs.org">Forum</a></li>
  </ul>
</div>
"#;

#[fixture]
fn hello_world() -> ComponentDescription {
    ComponentDescription::from_template("HelloWorld", HELLO_WORLD)
}

fn selector(tag: &str) -> Selector {
    Selector::parse(tag).unwrap()
}

#[rstest]
fn h2_has_the_expected_text(hello_world: ComponentDescription) {
    let tree = render(&hello_world).unwrap();
    let result = assert_text_equals(find(&tree, &selector("h2")), "Essential Links").unwrap();

    assert!(result.passed);
    assert_eq!(result.tag, "h2");
    assert_eq!(result.actual, "Essential Links");
    assert_eq!(result.diff, None);
}

#[rstest]
fn wrong_text_reports_both_values(hello_world: ComponentDescription) {
    let tree = render(&hello_world).unwrap();
    let result = assert_text_equals(find(&tree, &selector("h2")), "Essential Linx").unwrap();

    assert!(!result.passed);
    assert_eq!(result.expected, "Essential Linx");
    assert_eq!(result.actual, "Essential Links");

    let mismatch = result.into_outcome().unwrap_err();
    let message = mismatch.to_string();
    assert!(message.contains("\"Essential Linx\""));
    assert!(message.contains("\"Essential Links\""));
    assert!(mismatch.diff.contains("First difference at column 14"));
}

#[rstest]
fn absent_tag_is_a_missing_node_not_a_mismatch(hello_world: ComponentDescription) {
    let tree = render(&hello_world).unwrap();
    let lookup = find(&tree, &selector("h3"));
    assert!(matches!(lookup, Lookup::NotFound { .. }));

    let err = assert_text_equals(lookup, "Essential Links").unwrap_err();
    assert_eq!(err.selector, "h3");

    let failure = run_case(&hello_world, &selector("h3"), "Essential Links").unwrap_err();
    assert!(matches!(failure, CaseFailure::MissingNode(_)));
}

#[rstest]
fn renders_are_independent(hello_world: ComponentDescription) {
    let first = render(&hello_world).unwrap();
    let second = render(&hello_world).unwrap();
    assert_eq!(first, second);
    assert_eq!(first.component, "HelloWorld");
}

#[rstest]
#[case("h1", "Welcome to Your Vue.js App")]
#[case("h2", "Essential Links")]
#[case("a", "Core Docs")]
#[case("li", "Core Docs")]
#[case("ul", "Core DocsForum")]
fn first_match_text(hello_world: ComponentDescription, #[case] tag: &str, #[case] expected: &str) {
    assert!(run_case(&hello_world, &selector(tag), expected).is_ok());
}

#[rstest]
fn text_comparison_is_exact(hello_world: ComponentDescription) {
    for near_miss in ["essential links", "Essential Links ", " Essential Links", "Essential  Links"] {
        let failure = run_case(&hello_world, &selector("h2"), near_miss).unwrap_err();
        assert_eq!(failure.kind(), "mismatch", "{near_miss:?} should not match");
    }
}

#[rstest]
fn fluent_assertions(hello_world: ComponentDescription) {
    let tree = render(&hello_world).unwrap();
    assert_rendered(&tree)
        .root_count(1)
        .count("li", 2)
        .find("div", |div| {
            div.attribute("class", "hello").child_count(3);
        })
        .find("h2", |h2| {
            h2.text("Essential Links");
        })
        .find("ul", |ul| {
            ul.child(1, |li| {
                li.text("Forum");
            });
        })
        .missing("h3");
}

#[test]
fn broken_template_is_a_render_error() {
    let broken = ComponentDescription::from_template("Broken", "<div><h2>Essential Links</h3></div>");
    let err = render(&broken).unwrap_err();
    assert_eq!(err.component, "Broken");
    assert!(err.message.contains("</h3>"));

    let failure = run_case(&broken, &selector("h2"), "Essential Links").unwrap_err();
    assert_eq!(failure.kind(), "render-error");
}
