//! Serialization of hand-built trees.

use insta::assert_snapshot;
use nomen_markup::{Element, Node, render};

#[test]
fn nested_tree() {
    nomen_testhelpers::setup();
    let tree = Node::element(
        "span",
        [],
        [
            Element::new("small")
                .with_child(
                    Element::new("span")
                        .with_attr("style", "color: rgb(181, 181, 181);")
                        .with_text("pl"),
                )
                .into(),
            Node::text(" "),
            Node::text("die "),
            Node::text("M"),
            Element::new("span")
                .with_attr("style", "color: rgb(255, 140, 0);")
                .with_text("ä")
                .into(),
            Node::text("nner"),
        ],
    );
    assert_snapshot!(render(&tree), @r#"<span><small><span style="color: rgb(181, 181, 181);">pl</span></small> die M<span style="color: rgb(255, 140, 0);">ä</span>nner</span>"#);
    assert_eq!(tree.text_content(), "pl die Männer");
}

#[test]
fn text_only() {
    nomen_testhelpers::setup();
    assert_eq!(render(&Node::text("Äpfel")), "Äpfel");
    assert_eq!(render(&Node::text("")), "");
}

#[test]
fn multiple_attributes() {
    nomen_testhelpers::setup();
    let node: Node = Element::new("td")
        .with_attr("class", "noun")
        .with_attr("style", "color: rgb(1, 2, 3);")
        .with_attr("lang", "de")
        .into();
    assert_snapshot!(node.to_html(), @r#"<td class="noun" style="color: rgb(1, 2, 3);" lang="de"></td>"#);
    assert_eq!(node.to_string(), node.to_html());
}
