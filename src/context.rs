use super::*;

pub(crate) struct Context<'a> {
  html: &'a mut Html,
  rewritten_nodes: usize,
  title: String,
}

impl<'a> Context<'a> {
  pub(crate) fn document(&mut self) -> Document<'_> {
    Document::new(&mut *self.html)
  }

  pub(crate) fn into_title(self) -> String {
    self.title
  }

  pub(crate) fn new(html: &'a mut Html) -> Self {
    Self {
      html,
      rewritten_nodes: 0,
      title: String::new(),
    }
  }

  pub(crate) fn record_rewrites(&mut self, count: usize) {
    self.rewritten_nodes += count;
  }

  pub(crate) fn rewritten_nodes(&self) -> usize {
    self.rewritten_nodes
  }

  pub(crate) fn set_title(&mut self, title: String) {
    self.title = title;
  }
}
