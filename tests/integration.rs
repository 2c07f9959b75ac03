use {
  faleproxy::{
    Error, FetchError, FetchRequest, Fetcher, Proxy, Response, ResponseBody,
    transform,
  },
  pretty_assertions::assert_eq,
  scraper::{Html, Selector},
  std::{cell::RefCell, collections::HashMap, thread},
};

const SAMPLE: &str = r#"<!DOCTYPE html>
<html>
<head><title>Yale University Test Page</title></head>
<body>
  <h1>Welcome to Yale University</h1>
  <p>Yale University is a private Ivy League research university.</p>
  <a href="https://www.yale.edu/about">About Yale</a>
  <a href="https://www.yale.edu/admissions">Admissions</a>
</body>
</html>"#;

#[derive(Default)]
struct FakeFetcher {
  pages: HashMap<String, String>,
  requested: RefCell<Vec<String>>,
}

impl FakeFetcher {
  fn with_page(url: &str, html: &str) -> Self {
    Self {
      pages: HashMap::from([(url.to_string(), html.to_string())]),
      ..Self::default()
    }
  }
}

impl Fetcher for FakeFetcher {
  fn fetch(&self, url: &str) -> Result<String, FetchError> {
    self.requested.borrow_mut().push(url.to_string());

    self.pages.get(url).cloned().ok_or(FetchError::Status {
      url: url.to_string(),
      status: 404,
    })
  }
}

fn select_text(html: &Html, selector: &str) -> Vec<String> {
  let selector = Selector::parse(selector).expect("valid selector");

  html
    .select(&selector)
    .map(|element| element.text().collect())
    .collect()
}

fn select_attr(html: &Html, selector: &str, attr: &str) -> Vec<String> {
  let selector = Selector::parse(selector).expect("valid selector");

  html
    .select(&selector)
    .filter_map(|element| element.value().attr(attr))
    .map(str::to_string)
    .collect()
}

#[test]
fn replaces_yale_in_fetched_content() {
  let proxy =
    Proxy::new(FakeFetcher::with_page("https://example.com/", SAMPLE));

  let page = proxy.proxy("https://example.com/").expect("proxy succeeds");

  assert_eq!(page.title, "Fale University Test Page");
  assert_eq!(page.original_url, "https://example.com/");

  let html = Html::parse_document(&page.content);

  assert_eq!(select_text(&html, "title"), vec!["Fale University Test Page"]);
  assert_eq!(select_text(&html, "h1"), vec!["Welcome to Fale University"]);
  assert!(select_text(&html, "p")[0].contains("Fale University is a private"));
  assert_eq!(select_text(&html, "a"), vec!["About Fale", "Admissions"]);
  assert_eq!(
    select_attr(&html, "a", "href"),
    vec![
      "https://www.yale.edu/about",
      "https://www.yale.edu/admissions"
    ]
  );
}

#[test]
fn handle_reports_success_record() {
  let proxy =
    Proxy::new(FakeFetcher::with_page("https://example.com/", SAMPLE));

  let response = proxy.handle(&FetchRequest::new("https://example.com/"));

  assert_eq!(response.status, Response::OK);

  let json = serde_json::to_value(&response.body).expect("serializes");

  assert_eq!(json["success"], true);
  assert_eq!(json["title"], "Fale University Test Page");
  assert_eq!(json["originalUrl"], "https://example.com/");
  assert_eq!(json.as_object().map(|object| object.len()), Some(4));
}

#[test]
fn missing_url_never_fetches() {
  let proxy = Proxy::new(FakeFetcher::default());

  let request: FetchRequest =
    serde_json::from_str("{}").expect("empty request parses");

  let response = proxy.handle(&request);

  assert_eq!(response.status, Response::BAD_REQUEST);
  assert_eq!(
    serde_json::to_value(&response.body).expect("serializes"),
    serde_json::json!({ "error": "URL is required" })
  );
  assert!(proxy.fetcher().requested.borrow().is_empty());
}

#[test]
fn fetch_failures_are_server_errors() {
  let proxy = Proxy::new(FakeFetcher::default());

  let response = proxy.handle(&FetchRequest::new("https://example.com/gone"));

  assert_eq!(response.status, Response::INTERNAL_SERVER_ERROR);
  assert_eq!(
    response.body,
    ResponseBody::Failure {
      error: "Failed to fetch content: request to \
              `https://example.com/gone` returned status 404"
        .into()
    }
  );
}

#[test]
fn fetch_errors_propagate_unchanged() {
  let proxy = Proxy::new(FakeFetcher::default());

  assert!(matches!(
    proxy.proxy("https://example.com/missing"),
    Err(Error::Fetch(FetchError::Status { status: 404, .. }))
  ));

  assert_eq!(
    *proxy.fetcher().requested.borrow(),
    vec!["https://example.com/missing".to_string()]
  );
}

#[test]
fn attributes_never_change() {
  let transformed = transform(
    r#"<body><a href="/yale" title="Yale" data-name="YALE">Yale</a><img alt="yale" src="yale.png"></body>"#,
  )
  .expect("transform succeeds");

  let html = Html::parse_document(&transformed.content);

  assert_eq!(select_attr(&html, "a", "href"), vec!["/yale"]);
  assert_eq!(select_attr(&html, "a", "title"), vec!["Yale"]);
  assert_eq!(select_attr(&html, "a", "data-name"), vec!["YALE"]);
  assert_eq!(select_attr(&html, "img", "alt"), vec!["yale"]);
  assert_eq!(select_text(&html, "a"), vec!["Fale"]);
}

#[test]
fn transformations_run_concurrently() {
  let inputs = (0..8)
    .map(|index| format!("<title>Yale {index}</title><p>yale {index}</p>"))
    .collect::<Vec<_>>();

  let results = thread::scope(|scope| {
    inputs
      .iter()
      .map(|input| scope.spawn(move || transform(input)))
      .collect::<Vec<_>>()
      .into_iter()
      .map(|handle| handle.join().expect("thread completes"))
      .collect::<Vec<_>>()
  });

  for (index, result) in results.into_iter().enumerate() {
    let transformed = result.expect("transform succeeds");

    assert_eq!(transformed.title, format!("Fale {index}"));
    assert!(transformed.content.contains(&format!("<p>fale {index}</p>")));
  }
}
