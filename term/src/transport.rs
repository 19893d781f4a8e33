//! Blocking HTTP transport backed by ureq.

use cocktail_core::{HttpMethod, HttpRequest, HttpResponse, Transport, TransportError};

/// Executes widget requests with a shared ureq agent.
///
/// Status codes are returned as data (`http_status_as_error(false)`) so the
/// core decides what a 404 or 500 means.
pub struct UreqTransport {
    agent: ureq::Agent,
}

impl Default for UreqTransport {
    fn default() -> Self {
        let agent = ureq::Agent::config_builder()
            .http_status_as_error(false)
            .build()
            .new_agent();
        Self { agent }
    }
}

impl Transport for UreqTransport {
    fn execute(&self, req: &HttpRequest) -> Result<HttpResponse, TransportError> {
        let mut call = match req.method {
            HttpMethod::Get => self.agent.get(&req.url),
        };
        for (key, value) in &req.headers {
            call = call.header(key.as_str(), value.as_str());
        }
        let mut response = call.call().map_err(|e| TransportError(e.to_string()))?;
        let status = response.status().as_u16();
        let body = response
            .body_mut()
            .read_to_string()
            .map_err(|e| TransportError(e.to_string()))?;
        Ok(HttpResponse::new(status, body))
    }
}
