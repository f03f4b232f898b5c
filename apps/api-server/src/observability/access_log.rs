//! Access log middleware - one event per request with status and latency.

use std::future::{Future, Ready, ready};
use std::pin::Pin;
use std::time::Instant;

use actix_web::{
    Error,
    dev::{Service, ServiceRequest, ServiceResponse, Transform, forward_ready},
    http::StatusCode,
};

/// Logs method, path, status and latency once the response is ready.
pub struct AccessLog;

impl<S, B> Transform<S, ServiceRequest> for AccessLog
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Transform = AccessLogService<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(AccessLogService { service }))
    }
}

pub struct AccessLogService<S> {
    service: S,
}

impl<S, B> Service<ServiceRequest> for AccessLogService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>>>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let method = req.method().clone();
        let path = req.path().to_string();
        let started = Instant::now();

        let fut = self.service.call(req);

        Box::pin(async move {
            let res = fut.await;
            let latency_ms = started.elapsed().as_millis() as u64;

            let status = match &res {
                Ok(res) => res.status(),
                Err(err) => err.as_response_error().status_code(),
            };
            log_request(method.as_str(), &path, status, latency_ms);

            res
        })
    }
}

fn log_request(method: &str, path: &str, status: StatusCode, latency_ms: u64) {
    let code = status.as_u16();
    if status.is_server_error() {
        tracing::error!(method, path, status = code, latency_ms, "Request failed");
    } else if status.is_client_error() {
        tracing::warn!(method, path, status = code, latency_ms, "Request rejected");
    } else {
        tracing::info!(method, path, status = code, latency_ms, "Request completed");
    }
}
