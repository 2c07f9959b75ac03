use super::*;

/// The capitalization forms of the target term that get rewritten.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Casing {
  Upper,
  Capitalized,
  Lower,
}

/// One row of the term table: an exact-case pattern and the substitute
/// written in the same casing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TermVariant {
  pub casing: Casing,
  pub pattern: &'static str,
  pub replacement: &'static str,
}

pub const TERM_VARIANTS: [TermVariant; 3] = [
  TermVariant {
    casing: Casing::Upper,
    pattern: "YALE",
    replacement: "FALE",
  },
  TermVariant {
    casing: Casing::Capitalized,
    pattern: "Yale",
    replacement: "Fale",
  },
  TermVariant {
    casing: Casing::Lower,
    pattern: "yale",
    replacement: "fale",
  },
];

impl TermVariant {
  fn apply(&self, text: &str) -> Option<String> {
    if !text.contains(self.pattern) {
      return None;
    }

    let mut protected = re::url_like_spans(text).into_iter().peekable();

    let mut output = String::with_capacity(text.len());
    let mut last = 0;
    let mut replaced = false;

    for (start, _) in text.match_indices(self.pattern) {
      let end = start + self.pattern.len();

      // Spans and matches both ascend, so spans ending before this match
      // can never cover a later one.
      while protected.next_if(|span| span.end <= start).is_some() {}

      if !is_word_bounded(text, start, end)
        || protected.peek().is_some_and(|span| span.start < end)
      {
        continue;
      }

      output.push_str(&text[last..start]);
      output.push_str(self.replacement);
      last = end;
      replaced = true;
    }

    if !replaced {
      return None;
    }

    output.push_str(&text[last..]);

    Some(output)
  }
}

fn is_word_char(ch: char) -> bool {
  ch.is_alphanumeric() || ch == '_'
}

fn is_word_bounded(text: &str, start: usize, end: usize) -> bool {
  !text[..start].chars().next_back().is_some_and(is_word_char)
    && !text[end..].chars().next().is_some_and(is_word_char)
}

/// Rewrites every whole-word occurrence of the term in each recognized
/// casing. Occurrences inside link-shaped text (`yale.edu`, full URLs,
/// e-mail addresses) are kept as they are.
///
/// Returns `Cow::Borrowed` when nothing was replaced.
pub fn replace(input: &str) -> Cow<'_, str> {
  TERM_VARIANTS
    .iter()
    .fold(Cow::Borrowed(input), |text, variant| {
      match variant.apply(&text) {
        Some(replaced) => Cow::Owned(replaced),
        None => text,
      }
    })
}
