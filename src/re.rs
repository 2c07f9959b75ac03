use super::*;

macro_rules! re {
  ($pat:expr) => {
    LazyLock::new(|| Regex::new($pat).unwrap())
  };
}

/// Text that reads as a link target: scheme URLs, `www.` hosts, e-mail
/// addresses and bare dotted host names such as `yale.edu/admissions`.
/// Bare hosts need a lowercase top-level label, so `Yale.It` in run-on
/// prose is not a host.
pub(crate) static URL_LIKE: LazyLock<Regex> = re!(concat!(
  r"(?i)(?:[a-z][a-z0-9+.-]*://|www\.)\S+",
  r"|[\w.+-]+@[\w-]+(?:\.[\w-]+)+",
  r"|\b[\w-]+(?:\.[\w-]+)*\.(?-i:[a-z]{2,})\b(?:/\S*)?",
));

pub(crate) fn url_like_spans(text: &str) -> Vec<Range<usize>> {
  URL_LIKE.find_iter(text).map(|found| found.range()).collect()
}
