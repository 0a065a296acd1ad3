//! Request dispatch module
//!
//! Entry point for HTTP request processing: method validation, static file
//! dispatch, and the no-cache header post-processing applied to every
//! outcome.

use std::convert::Infallible;
use std::sync::Arc;

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{Method, Request, Response};

use crate::config::Config;
use crate::handler::static_files;
use crate::http::{self, cache};
use crate::logger;

/// Main entry point for HTTP request handling
pub async fn handle_request(
    req: Request<hyper::body::Incoming>,
    config: Arc<Config>,
) -> Result<Response<Full<Bytes>>, Infallible> {
    let method = req.method();
    let uri = req.uri();
    let is_head = *method == Method::HEAD;

    logger::log_request(method, uri);

    let mut response = match check_http_method(method) {
        Some(resp) => resp,
        None => static_files::serve_path(&config.root, uri.path(), is_head).await,
    };

    // Applied after the base response is fully built, so the set lands on
    // every outcome (200, 404, 405, OPTIONS) without touching what the
    // builders already wrote.
    cache::apply_no_cache_headers(response.headers_mut());

    logger::log_response(response.status());
    Ok(response)
}

/// Check HTTP method and return an early response for non-GET/HEAD methods
fn check_http_method(method: &Method) -> Option<Response<Full<Bytes>>> {
    match method {
        &Method::GET | &Method::HEAD => None,
        &Method::OPTIONS => Some(http::build_options_response()),
        _ => {
            logger::log_warning(&format!("Method not allowed: {method}"));
            Some(http::build_405_response())
        }
    }
}
