use super::*;

mod rewrite_body_text;
mod rewrite_title;

pub use {
  rewrite_body_text::RewriteBodyTextStage, rewrite_title::RewriteTitleStage,
};

pub(crate) trait Stage {
  fn run(&mut self, context: &mut Context<'_>) -> Result;
}
