#![allow(dead_code)]

use async_trait::async_trait;
use newsfeed::clients::ModelClient;
use newsfeed::domain::SiteConfig;
use newsfeed::fetcher_actor::FetchError;
use newsfeed::http_client::{HttpFetch, HttpResponse};
use newsfeed::responder_actor::{self, Reply};
use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use tokio::sync::{oneshot, Semaphore};

/// HTTP double that answers GETs from a script, in order.
///
/// A gated double holds every GET until the test calls [`ScriptedHttp::release`],
/// which is how tests keep a fetch in flight.
pub struct ScriptedHttp {
    script: Mutex<VecDeque<Result<HttpResponse, FetchError>>>,
    calls: AtomicUsize,
    urls: Mutex<Vec<String>>,
    gate: Option<Semaphore>,
}

impl ScriptedHttp {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::build(None))
    }

    pub fn gated() -> Arc<Self> {
        Arc::new(Self::build(Some(Semaphore::new(0))))
    }

    fn build(gate: Option<Semaphore>) -> Self {
        Self {
            script: Mutex::new(VecDeque::new()),
            calls: AtomicUsize::new(0),
            urls: Mutex::new(Vec::new()),
            gate,
        }
    }

    /// Next GET returns a 200 feed whose first item is `headline`.
    pub fn respond(&self, headline: &str) -> &Self {
        self.push(Ok(HttpResponse::new(200, rss(headline))))
    }

    /// Next GET returns `status` with a valid feed body.
    pub fn status(&self, status: u16) -> &Self {
        self.push(Ok(HttpResponse::new(status, rss("ignored"))))
    }

    /// Next GET fails at the transport level.
    pub fn fail(&self) -> &Self {
        self.push(Err(FetchError::Request("connection refused".into())))
    }

    fn push(&self, result: Result<HttpResponse, FetchError>) -> &Self {
        self.script.lock().unwrap().push_back(result);
        self
    }

    /// Lets `n` held GETs complete.
    pub fn release(&self, n: usize) {
        if let Some(gate) = &self.gate {
            gate.add_permits(n);
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn urls(&self) -> Vec<String> {
        self.urls.lock().unwrap().clone()
    }

    /// Yields until at least `n` GETs have started.
    pub async fn wait_for_calls(&self, n: usize) {
        while self.calls() < n {
            tokio::task::yield_now().await;
        }
    }
}

#[async_trait]
impl HttpFetch for ScriptedHttp {
    async fn get(&self, url: &str) -> Result<HttpResponse, FetchError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.urls.lock().unwrap().push(url.to_string());

        if let Some(gate) = &self.gate {
            gate.acquire().await.unwrap().forget();
        }

        self.script
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(FetchError::Request("no scripted response".into())))
    }
}

pub fn rss(headline: &str) -> String {
    format!(
        "<?xml version=\"1.0\"?><rss version=\"2.0\"><channel><title>Feed</title>\
         <item><title>{headline}</title></item></channel></rss>"
    )
}

pub fn sites(names: &[&str]) -> Vec<SiteConfig> {
    names
        .iter()
        .map(|name| SiteConfig::new(*name, format!("http://{name}.example/rss")))
        .collect()
}

/// Issues a `latest_news` request the way the HTTP handler does, without
/// waiting for the answer.
pub fn send_request(model: &ModelClient, site: &str) -> oneshot::Receiver<Reply> {
    let (responder, reply) = responder_actor::spawn();
    model
        .latest_news(site, responder)
        .expect("Model should be running");
    reply
}

/// Issues a `latest_news` request and waits for the answer.
pub async fn request(model: &ModelClient, site: &str) -> Reply {
    send_request(model, site)
        .await
        .expect("Responder finished without a reply")
}

pub fn success(body: &str) -> Reply {
    Reply::Success(format!("{body}\n"))
}

pub fn failure(body: &str) -> Reply {
    Reply::Failure(format!("{body}\n"))
}
