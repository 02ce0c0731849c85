//! Test server lifecycle management
//!
//! Spawns an isolated server on a random port with a scripted music backend,
//! and shuts it down gracefully when dropped.

use std::sync::{Arc, Mutex};
use std::time::Duration;
use strofa_server::generation::{
    GeneratedAudio, GenerationBackend, GenerationError, GenerationRequest, SongGenerator,
};
use strofa_server::server::{make_app, RequestsLoggingLevel, ServerConfig};
use tokio::net::TcpListener;

type Responder =
    Box<dyn Fn(&GenerationRequest) -> Result<GeneratedAudio, GenerationError> + Send + Sync>;

/// Scripted stand-in for the music backend: records every request and answers
/// from a fixed responder.
pub struct ScriptedBackend {
    responder: Responder,
    requests: Mutex<Vec<GenerationRequest>>,
}

impl ScriptedBackend {
    /// Backend that always succeeds with the given audio bytes.
    pub fn ok(audio: Vec<u8>) -> Arc<Self> {
        Self::with_responder(Box::new(move |_| {
            Ok(GeneratedAudio {
                data: audio.clone(),
                content_type: "audio/mpeg".to_string(),
            })
        }))
    }

    /// Backend that always fails with errors built by the given factory.
    pub fn failing(factory: impl Fn() -> GenerationError + Send + Sync + 'static) -> Arc<Self> {
        Self::with_responder(Box::new(move |_| Err(factory())))
    }

    pub fn with_responder(responder: Responder) -> Arc<Self> {
        Arc::new(Self {
            responder,
            requests: Mutex::new(Vec::new()),
        })
    }

    /// Every request the server sent to this backend, in order.
    pub fn recorded_requests(&self) -> Vec<GenerationRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl GenerationBackend for ScriptedBackend {
    async fn generate(
        &self,
        request: &GenerationRequest,
    ) -> Result<GeneratedAudio, GenerationError> {
        self.requests.lock().unwrap().push(request.clone());
        (self.responder)(request)
    }
}

const SERVER_READY_TIMEOUT_MS: u64 = 5_000;
const SERVER_READY_POLL_INTERVAL_MS: u64 = 20;

/// Test server instance bound to a random port.
///
/// When dropped, the server gracefully shuts down.
pub struct TestServer {
    /// Base URL for making requests (e.g., "http://127.0.0.1:12345")
    pub base_url: String,

    /// The port the server is listening on
    pub port: u16,

    _shutdown_tx: Option<tokio::sync::oneshot::Sender<()>>,
}

impl TestServer {
    /// Spawns a new test server wired to the given backend double.
    pub async fn spawn(backend: Arc<ScriptedBackend>) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind to random port");

        let port = listener
            .local_addr()
            .expect("Failed to get local address")
            .port();

        let base_url = format!("http://127.0.0.1:{}", port);

        let (shutdown_tx, shutdown_rx) = tokio::sync::oneshot::channel::<()>();

        let config = ServerConfig {
            port,
            requests_logging_level: RequestsLoggingLevel::None,
        };
        let generator = Arc::new(SongGenerator::new(backend as Arc<dyn GenerationBackend>));
        let app = make_app(config, generator);

        tokio::spawn(async move {
            axum::serve(listener, app)
                .with_graceful_shutdown(async {
                    shutdown_rx.await.ok();
                })
                .await
                .expect("Server failed");
        });

        let server = Self {
            base_url,
            port,
            _shutdown_tx: Some(shutdown_tx),
        };

        server.wait_for_ready().await;

        server
    }

    /// Waits for the server to become ready by polling /health.
    async fn wait_for_ready(&self) {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_millis(100))
            .build()
            .expect("Failed to build reqwest client");

        let start = std::time::Instant::now();
        let timeout = Duration::from_millis(SERVER_READY_TIMEOUT_MS);

        loop {
            if start.elapsed() > timeout {
                panic!(
                    "Server did not become ready within {}ms",
                    SERVER_READY_TIMEOUT_MS
                );
            }

            match client
                .get(format!("{}/health", self.base_url))
                .send()
                .await
            {
                Ok(response) if response.status().is_success() => return,
                _ => {
                    tokio::time::sleep(Duration::from_millis(SERVER_READY_POLL_INTERVAL_MS)).await;
                }
            }
        }
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        if let Some(tx) = self._shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}
