use {
  context::Context,
  document::Document,
  ego_tree::{NodeId, NodeRef},
  regex::Regex,
  scraper::{ElementRef, Html, Node},
  serde::{Deserialize, Serialize},
  serializable_node::SerializableNode,
  stage::{RewriteBodyTextStage, RewriteTitleStage, Stage},
  std::{borrow::Cow, ops::Range, sync::LazyLock, time::Duration},
  tracing::{debug, error, info, warn},
  url::Url,
};

pub use crate::{
  error::{Error, FetchError},
  fetcher::{Fetcher, HttpFetcher},
  options::{ProxyOptions, ProxyOptionsBuilder},
  proxy::{FetchRequest, Proxied, Proxy, Response, ResponseBody},
  replacer::{Casing, TERM_VARIANTS, TermVariant, replace},
  transformed::Transformed,
  transformer::{Transformer, transform},
};

mod context;
mod document;
mod error;
mod fetcher;
mod options;
mod proxy;
mod re;
mod replacer;
mod serializable_node;
mod stage;
mod transformed;
mod transformer;

pub type Result<T = (), E = Error> = std::result::Result<T, E>;
