//! Lenient routing: paths are lowercased and trailing slashes dropped before matching.

use std::future::{Ready, ready};

use actix_web::{
    Error,
    dev::{Service, ServiceRequest, ServiceResponse, Transform, forward_ready},
    http::uri::{PathAndQuery, Uri},
};

/// Rewrites the request path (not the query) so `/Users/Me/` matches `/users/me`.
pub struct CanonicalPath;

impl<S, B> Transform<S, ServiceRequest> for CanonicalPath
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Transform = CanonicalPathService<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(CanonicalPathService { service }))
    }
}

pub struct CanonicalPathService<S> {
    service: S,
}

impl<S, B> Service<ServiceRequest> for CanonicalPathService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = S::Future;

    forward_ready!(service);

    fn call(&self, mut req: ServiceRequest) -> Self::Future {
        if let Some(uri) = canonical(req.uri()) {
            req.match_info_mut().get_mut().update(&uri);
            req.head_mut().uri = uri;
        }

        self.service.call(req)
    }
}

/// `/Auth/Login/` becomes `/auth/login`; the root stays `/`.
fn canonical_path(path: &str) -> String {
    let trimmed = path.trim_end_matches('/');
    if trimmed.is_empty() {
        "/".to_string()
    } else {
        trimmed.to_ascii_lowercase()
    }
}

/// `None` when the path is already canonical.
fn canonical(uri: &Uri) -> Option<Uri> {
    let path = canonical_path(uri.path());
    if path == uri.path() {
        return None;
    }

    let path_and_query = match uri.query() {
        Some(query) => format!("{path}?{query}"),
        None => path,
    };

    let mut parts = uri.clone().into_parts();
    parts.path_and_query = Some(PathAndQuery::try_from(path_and_query).ok()?);
    Uri::from_parts(parts).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lowercases_path_but_not_query() {
        let uri: Uri = "/Auth/Login?Email=John@Gmail.com".parse().unwrap();
        let uri = canonical(&uri).unwrap();
        assert_eq!(uri.path(), "/auth/login");
        assert_eq!(uri.query(), Some("Email=John@Gmail.com"));
    }

    #[test]
    fn test_trims_trailing_slashes() {
        assert_eq!(canonical_path("/Api/"), "/api");
        assert_eq!(canonical_path("/auth/login//"), "/auth/login");
        assert_eq!(canonical_path("/"), "/");
        assert_eq!(canonical_path("//"), "/");
    }

    #[test]
    fn test_canonical_path_untouched() {
        let uri: Uri = "/users/me".parse().unwrap();
        assert!(canonical(&uri).is_none());

        let uri: Uri = "/".parse().unwrap();
        assert!(canonical(&uri).is_none());
    }
}
