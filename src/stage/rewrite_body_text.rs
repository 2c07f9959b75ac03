use super::*;

/// Rewrites every rendered text node under `<body>`. Attributes, comments
/// and raw-text elements such as `<script>` are never visited.
pub struct RewriteBodyTextStage;

impl Stage for RewriteBodyTextStage {
  fn run(&mut self, context: &mut Context<'_>) -> Result {
    let mut document = context.document();

    let rewritten = document
      .body_text_nodes()
      .into_iter()
      .filter(|&id| document.rewrite_text(id, replace))
      .count();

    context.record_rewrites(rewritten);

    Ok(())
  }
}
