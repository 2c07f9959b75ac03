use {
  super::*,
  ego_tree::iter::Edge,
  html5ever::serialize::{
    Serialize, SerializeOpts, Serializer, TraversalScope, serialize,
  },
  std::io,
};

/// Serializes a subtree with scripting enabled, matching how
/// `Html::parse_document` tokenized it: `<noscript>` children are raw
/// markup and must be written back unescaped.
pub(crate) struct SerializableNode<'a> {
  pub(crate) node: NodeRef<'a, Node>,
}

impl SerializableNode<'_> {
  pub(crate) fn document(html: &Html) -> io::Result<String> {
    let opts = SerializeOpts {
      scripting_enabled: true,
      traversal_scope: TraversalScope::ChildrenOnly(None),
      create_missing_parent: false,
    };

    let mut buffer = Vec::new();

    serialize(
      &mut buffer,
      &SerializableNode {
        node: html.tree.root(),
      },
      opts,
    )?;

    String::from_utf8(buffer)
      .map_err(|error| io::Error::new(io::ErrorKind::InvalidData, error))
  }
}

impl Serialize for SerializableNode<'_> {
  fn serialize<S: Serializer>(
    &self,
    serializer: &mut S,
    traversal_scope: TraversalScope,
  ) -> io::Result<()> {
    let skip_self = traversal_scope == TraversalScope::ChildrenOnly(None);

    for edge in self.node.traverse() {
      match edge {
        Edge::Open(node) => {
          if node == self.node && skip_self {
            continue;
          }

          match node.value() {
            Node::Doctype(doctype) => {
              serializer.write_doctype(doctype.name())?
            }
            Node::Comment(comment) => serializer.write_comment(comment)?,
            Node::Text(text) => serializer.write_text(text)?,
            Node::Element(element) => {
              serializer.start_elem(
                element.name.clone(),
                element.attrs.iter().map(|(name, value)| (name, &value[..])),
              )?;
            }
            _ => {}
          }
        }
        Edge::Close(node) => {
          if node == self.node && skip_self {
            continue;
          }

          if let Some(element) = node.value().as_element() {
            serializer.end_elem(element.name.clone())?;
          }
        }
      }
    }

    Ok(())
  }
}
