//! HTTP round-trips against a server bound to an ephemeral port.

use std::fs;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use tokio::net::TcpListener;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;
use wordvote_server::{ServerConfig, SubmitResponse, WordVoteServer};

struct TestServer {
    addr: SocketAddr,
    pending: PathBuf,
    shutdown: Option<oneshot::Sender<()>>,
    handle: JoinHandle<()>,
    _temp: TempDir,
}

impl TestServer {
    async fn start() -> Self {
        let temp = tempfile::tempdir().expect("tempdir");
        let dictionary = temp.path().join("words-alpha.txt");
        fs::write(&dictionary, "ant\ncat\ndog\n").expect("dictionary");
        let pending = temp.path().join("pending");

        let config = ServerConfig::default()
            .with_dictionary(&dictionary)
            .with_queue_dir(&pending);
        let server = WordVoteServer::from_config(config).expect("server");

        let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
        let addr = listener.local_addr().expect("addr");

        let (tx, rx) = oneshot::channel::<()>();
        let state = server.state();
        let handle = tokio::spawn(async move {
            let _ = wordvote_server::serve(listener, state, async move {
                let _ = rx.await;
            })
            .await;
        });

        Self {
            addr,
            pending,
            shutdown: Some(tx),
            handle,
            _temp: temp,
        }
    }

    async fn get(&self, path_and_query: &str) -> (reqwest::StatusCode, SubmitResponse) {
        let url = format!("http://{}{}", self.addr, path_and_query);
        let resp = reqwest::get(&url).await.expect("request");
        let status = resp.status();
        let body = resp.json::<SubmitResponse>().await.expect("json");
        (status, body)
    }

    fn records(&self) -> Vec<(String, String)> {
        let mut records: Vec<(String, String)> = fs::read_dir(&self.pending)
            .expect("pending dir")
            .map(|e| {
                let e = e.expect("entry");
                let name = e.file_name().to_string_lossy().into_owned();
                let content = fs::read_to_string(e.path()).expect("record");
                (name, content)
            })
            .collect();
        records.sort();
        records
    }

    async fn stop(mut self) {
        if let Some(tx) = self.shutdown.take() {
            let _ = tx.send(());
        }
        let _ = self.handle.await;
    }
}

fn assert_record(pending: &Path, name: &str, content: &str, timestamp: &str) {
    assert!(name.starts_with('s'), "not visible: {name}");
    assert!(pending.join(name).is_file());
    assert_eq!(content, format!("{timestamp} 127.0.0.1 3 42 cat"));
}

#[tokio::test]
async fn accepted_vote_is_recorded() {
    let server = TestServer::start().await;

    let (status, body) = server.get("/submit?s=3&i=cat&u=42").await;
    assert_eq!(status, reqwest::StatusCode::OK);
    assert_eq!(body.error, 0);
    let timestamp = body
        .message
        .strip_prefix("Vote registered at ")
        .expect("success message")
        .to_string();

    let records = server.records();
    assert_eq!(records.len(), 1);
    assert_record(&server.pending, &records[0].0, &records[0].1, &timestamp);

    server.stop().await;
}

#[tokio::test]
async fn invalid_inputs_are_rejected() {
    let server = TestServer::start().await;

    for query in [
        "/submit?s=-1&i=cat&u=42",
        "/submit?s=3.5&i=cat&u=42",
        "/submit?s=007&i=cat&u=42",
        "/submit?s=3&i=Hello&u=42",
        "/submit?s=3&i=hi5&u=42",
        "/submit?s=3&i=&u=42",
        "/submit?s=3&i=cat&u=65536",
        "/submit?s=3&i=cat&u=-5",
        "/submit?s=3&i=cat&u=abc",
        "/submit?s=%2B3&i=cat&u=42",
        "/submit",
    ] {
        let (status, body) = server.get(query).await;
        assert_eq!(status, reqwest::StatusCode::OK, "{query}");
        assert_eq!(body, SubmitResponse::failure("Invalid input"), "{query}");
    }

    assert!(server.records().is_empty());
    server.stop().await;
}

#[tokio::test]
async fn unknown_word_is_rejected() {
    let server = TestServer::start().await;

    let (_, body) = server.get("/submit?s=3&i=zzzqx&u=42").await;
    assert_eq!(body, SubmitResponse::failure("Word not found"));
    assert!(server.records().is_empty());

    server.stop().await;
}

#[tokio::test]
async fn repeated_vote_is_not_deduplicated() {
    let server = TestServer::start().await;

    let (_, first) = server.get("/submit?s=3&i=cat&u=42").await;
    let (_, second) = server.get("/submit.php?s=3&i=cat&u=42").await;
    assert!(first.is_success());
    assert!(second.is_success());

    let records = server.records();
    assert_eq!(records.len(), 2);
    assert_ne!(records[0].0, records[1].0);
    for (name, content) in &records {
        assert!(name.starts_with('s'));
        assert_eq!(content.split(' ').count(), 5);
        assert!(content.ends_with(" 127.0.0.1 3 42 cat"));
    }

    server.stop().await;
}
