use std::sync::mpsc;
use std::thread;
use std::time::Duration;

/// One canned response. Requests are matched on method and path (query
/// string ignored), first match wins.
pub struct StubRoute {
    pub method: &'static str,
    pub path: &'static str,
    pub status: u16,
    pub body: String,
}

impl StubRoute {
    pub fn json(
        method: &'static str,
        path: &'static str,
        status: u16,
        body: serde_json::Value,
    ) -> Self {
        StubRoute {
            method,
            path,
            status,
            body: body.to_string(),
        }
    }
}

/// In-process stand-in for the dashboard backend. Serves the configured
/// routes on a random localhost port until dropped.
pub struct BackendStub {
    pub base_url: String,
    shutdown_tx: Option<mpsc::Sender<()>>,
    handle: Option<thread::JoinHandle<()>>,
}

impl BackendStub {
    pub fn spawn(routes: Vec<StubRoute>) -> Self {
        let server = tiny_http::Server::http("127.0.0.1:0").expect("start backend stub");
        let addr = server.server_addr();
        let base_url = format!("http://{addr}");

        let (shutdown_tx, shutdown_rx) = mpsc::channel::<()>();

        let handle = thread::spawn(move || loop {
            if shutdown_rx.try_recv().is_ok() {
                break;
            }

            let request = match server.recv_timeout(Duration::from_millis(50)) {
                Ok(Some(req)) => req,
                Ok(None) => continue,
                Err(_) => break,
            };

            let url = request.url().to_string();
            let path = url.split('?').next().unwrap_or(&url);
            let method = request.method().to_string().to_uppercase();

            let matched = routes
                .iter()
                .find(|r| r.method == method && r.path == path);

            let response = match matched {
                Some(route) => tiny_http::Response::from_string(route.body.clone())
                    .with_status_code(route.status),
                None => tiny_http::Response::from_string(format!("no stub route for {method} {path}"))
                    .with_status_code(404),
            };
            let _ = request.respond(response);
        });

        BackendStub {
            base_url,
            shutdown_tx: Some(shutdown_tx),
            handle: Some(handle),
        }
    }
}

impl Drop for BackendStub {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}
