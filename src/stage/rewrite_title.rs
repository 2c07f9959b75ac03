use super::*;

/// Rewrites the text of the document's `<title>` and records the result as
/// the page title.
pub struct RewriteTitleStage;

impl Stage for RewriteTitleStage {
  fn run(&mut self, context: &mut Context<'_>) -> Result {
    let mut document = context.document();

    let Some(element) = document.title_element() else {
      return Ok(());
    };

    let original = document.text_content(element);

    let rewritten = match replace(&original) {
      Cow::Borrowed(_) => None,
      Cow::Owned(rewritten) => Some(rewritten),
    };

    let title = match rewritten {
      Some(rewritten) => {
        document.set_text_content(element, &rewritten);
        context.record_rewrites(1);
        rewritten
      }
      None => original,
    };

    context.set_title(title);

    Ok(())
  }
}
