// Copyright 2026, Faultline contributors
// SPDX-License-Identifier: Apache-2.0

//! Test utilities for mocking Kubernetes API responses.

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::task::{Context, Poll};

use http::{Request, Response};
use kube::client::Body;
use kube::Client;
use tower::Service;

struct Route {
    method: String,
    path: String,
    status: u16,
    body: String,
}

/// A canned API server: requests are matched against registered routes and
/// answered with fixed JSON bodies; everything else gets a Kubernetes-style
/// 404 Status.
#[derive(Clone, Default)]
pub struct MockApiServer {
    routes: Arc<Vec<Route>>,
}

impl MockApiServer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer GET requests whose path starts with `path`
    pub fn on_get(self, path: &str, status: u16, body: &str) -> Self {
        self.on("GET", path, status, body)
    }

    /// Answer POST requests whose path starts with `path`
    pub fn on_post(self, path: &str, status: u16, body: &str) -> Self {
        self.on("POST", path, status, body)
    }

    fn on(mut self, method: &str, path: &str, status: u16, body: &str) -> Self {
        Arc::get_mut(&mut self.routes)
            .expect("register routes before cloning the server")
            .push(Route {
                method: method.to_string(),
                path: path.to_string(),
                status,
                body: body.to_string(),
            });
        self
    }

    /// Build a kube Client backed by this mock
    pub fn into_client(self) -> Client {
        Client::new(self, "default")
    }

    fn respond(&self, method: &str, path: &str) -> (u16, String) {
        self.routes
            .iter()
            .find(|r| r.method == method && path.starts_with(&r.path))
            .map(|r| (r.status, r.body.clone()))
            .unwrap_or_else(|| (404, not_found_json(path)))
    }
}

impl Service<Request<Body>> for MockApiServer {
    type Response = Response<Body>;
    type Error = tower::BoxError;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>> + Send>>;

    fn poll_ready(&mut self, _cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        Poll::Ready(Ok(()))
    }

    fn call(&mut self, req: Request<Body>) -> Self::Future {
        let (status, body) = self.respond(req.method().as_str(), req.uri().path());

        Box::pin(async move {
            Ok(Response::builder()
                .status(status)
                .header("content-type", "application/json")
                .body(Body::from(body.into_bytes()))
                .unwrap())
        })
    }
}

/// JSON body of a ChaosExperiment object as the API server would return it
pub fn experiment_json(name: &str, namespace: &str) -> String {
    serde_json::json!({
        "apiVersion": "faultline.dev/v1alpha1",
        "kind": "ChaosExperiment",
        "metadata": {
            "name": name,
            "namespace": namespace,
            "uid": "test-uid"
        },
        "spec": {
            "target": {"kind": "Deployment", "name": "api"},
            "action": "pod-delete",
            "durationSeconds": 30
        },
        "status": {
            "phase": "Running"
        }
    })
    .to_string()
}

fn not_found_json(path: &str) -> String {
    serde_json::json!({
        "kind": "Status",
        "apiVersion": "v1",
        "status": "Failure",
        "message": format!("{} not found", path),
        "reason": "NotFound",
        "code": 404
    })
    .to_string()
}
