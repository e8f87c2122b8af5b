//! Method based request dispatch.

use crate::files::resolver::StaticFiles;
use crate::http::request::{Method, Request};
use crate::http::response::{Response, StatusCode};

/// The handlers a request can be routed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Handler {
    /// Serve the target from the static root
    ServePage,
    /// Bare default response, no filesystem access
    Default,
}

/// Picks a handler from the request method alone.
pub fn find_handler(method: &Method) -> Handler {
    match method {
        Method::GET | Method::POST => Handler::ServePage,
        _ => Handler::Default,
    }
}

/// Routes parsed requests to their handler.
#[derive(Debug, Clone)]
pub struct Dispatcher {
    files: StaticFiles,
}

impl Dispatcher {
    pub fn new(files: StaticFiles) -> Self {
        Self { files }
    }

    pub fn files(&self) -> &StaticFiles {
        &self.files
    }

    pub async fn dispatch(&self, request: &Request) -> Response {
        match find_handler(&request.method) {
            Handler::ServePage => self.serve_page(request).await,
            Handler::Default => Response::new(),
        }
    }

    /// Answers with status 200 whether or not the target exists; a missing
    /// target carries the not-found page as its body.
    async fn serve_page(&self, request: &Request) -> Response {
        let resolved = match self.files.resolve(&request.url).await {
            Ok(resolved) => resolved,
            Err(e) => {
                tracing::error!(
                    error = %format!("{:#}", e),
                    method = request.method.as_str(),
                    url = %request.url,
                    "Failed to serve file"
                );
                return Response::internal_error();
            }
        };

        let mut response = Response::new();
        match resolved.content_type {
            Some(content_type) => response.set_header("Content-Type", content_type),
            None => response.remove_header("Content-Type"),
        }
        response.set_header("Content-Length", resolved.content.len().to_string());
        response.status = StatusCode::Ok;
        response.body = Some(resolved.content);
        response
    }
}
