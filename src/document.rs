use super::*;

/// Elements whose text children are raw markup or code rather than
/// rendered text.
const RAW_TEXT_ELEMENTS: &[&str] = &[
  "iframe", "noembed", "noframes", "noscript", "script", "style", "xmp",
];

pub(crate) struct Document<'a> {
  html: &'a mut Html,
}

impl<'a> Document<'a> {
  fn body_element(&self) -> Option<NodeRef<'_, Node>> {
    self.html_element()?.children().find(
      |child| matches!(child.value(), Node::Element(el) if el.name() == "body"),
    )
  }

  /// Text nodes under `<body>` in document order, skipping raw-text
  /// containers.
  pub(crate) fn body_text_nodes(&self) -> Vec<NodeId> {
    let Some(body) = self.body_element() else {
      return Vec::new();
    };

    body
      .descendants()
      .filter(|node| matches!(node.value(), Node::Text(_)))
      .filter(|node| {
        node.parent().is_some_and(|parent| {
          matches!(
            parent.value(),
            Node::Element(el) if !RAW_TEXT_ELEMENTS.contains(&el.name())
          )
        })
      })
      .map(|node| node.id())
      .collect()
  }

  fn html_element(&self) -> Option<NodeRef<'_, Node>> {
    self.html.tree.root().children().find(
      |child| matches!(child.value(), Node::Element(el) if el.name() == "html"),
    )
  }

  pub(crate) fn new(html: &'a mut Html) -> Self {
    Document { html }
  }

  /// Runs `rewrite` over the text node `id` and stores the result when it
  /// comes back owned. Returns whether the node changed.
  pub(crate) fn rewrite_text<F>(&mut self, id: NodeId, rewrite: F) -> bool
  where
    F: for<'t> FnOnce(&'t str) -> Cow<'t, str>,
  {
    let Some(mut node) = self.html.tree.get_mut(id) else {
      return false;
    };

    let Node::Text(text_node) = node.value() else {
      return false;
    };

    let rewritten = match rewrite(&*text_node.text) {
      Cow::Borrowed(_) => return false,
      Cow::Owned(rewritten) => rewritten,
    };

    text_node.text.clear();
    text_node.text.push_slice(&rewritten);

    true
  }

  /// Replaces the content of the element `id` with `text`, reusing its
  /// first text child.
  pub(crate) fn set_text_content(&mut self, id: NodeId, text: &str) {
    let Some(element) = self.html.tree.get(id) else {
      return;
    };

    let children = element
      .children()
      .map(|child| (child.id(), matches!(child.value(), Node::Text(_))))
      .collect::<Vec<(NodeId, bool)>>();

    let Some(&(target, _)) = children.iter().find(|(_, is_text)| *is_text)
    else {
      return;
    };

    for (child, _) in children {
      let Some(mut node) = self.html.tree.get_mut(child) else {
        continue;
      };

      if child == target {
        if let Node::Text(text_node) = node.value() {
          text_node.text.clear();
          text_node.text.push_slice(text);
        }
      } else {
        node.detach();
      }
    }
  }

  pub(crate) fn text_content(&self, id: NodeId) -> String {
    self
      .html
      .tree
      .get(id)
      .and_then(ElementRef::wrap)
      .map(|element| element.text().collect())
      .unwrap_or_default()
  }

  /// The first `<title>` element in document order.
  pub(crate) fn title_element(&self) -> Option<NodeId> {
    self
      .html
      .tree
      .root()
      .descendants()
      .find(|node| {
        matches!(node.value(), Node::Element(el) if el.name() == "title")
      })
      .map(|node| node.id())
  }
}
