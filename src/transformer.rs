use super::*;

/// Parses a document and rewrites the term in its title and visible body
/// text.
///
/// Malformed markup is handled by the parser's error recovery, which always
/// produces an `<html>` root. Only empty input is rejected with
/// [`Error::Parse`].
pub struct Transformer {
  html: Html,
}

impl Transformer {
  pub fn new(html: &str) -> Result<Self> {
    if html.trim().is_empty() {
      return Err(Error::Parse {
        reason: "document is empty".into(),
      });
    }

    let html = Html::parse_document(html);

    if !html.errors.is_empty() {
      debug!(
        errors = html.errors.len(),
        first = %html.errors[0],
        "recovered from malformed markup"
      );
    }

    Ok(Self { html })
  }

  pub fn transform(mut self) -> Result<Transformed> {
    let mut context = Context::new(&mut self.html);

    RewriteTitleStage.run(&mut context)?;
    RewriteBodyTextStage.run(&mut context)?;

    debug!(rewritten = context.rewritten_nodes(), "rewrote text nodes");

    let title = context.into_title();

    Ok(Transformed {
      content: SerializableNode::document(&self.html)?,
      title,
    })
  }
}

/// Shorthand for [`Transformer::new`] followed by
/// [`Transformer::transform`].
pub fn transform(html: &str) -> Result<Transformed> {
  Transformer::new(html)?.transform()
}
