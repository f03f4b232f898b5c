//! Route table - every endpoint, its method and its auth requirement, in one place.
//!
//! The table is read once at startup. Entries that share a path are mounted
//! as a single resource so a method mismatch answers 405 rather than 404.

use actix_web::{Route, http::Method, web};

use crate::handlers::{self, auth, health, users};
use crate::middleware::Authenticate;

/// Authentication a route requires.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Auth {
    Public,
    Bearer,
}

/// One row of the route table.
pub struct RouteDef {
    pub method: Method,
    pub path: &'static str,
    pub auth: Auth,
    /// Mounted under the base path; `false` keeps it at the root.
    pub scoped: bool,
    /// Attaches the handler to a route already carrying the method guard.
    pub bind: fn(Route) -> Route,
}

impl RouteDef {
    fn new(method: Method, path: &'static str, auth: Auth, bind: fn(Route) -> Route) -> Self {
        Self {
            method,
            path,
            auth,
            scoped: true,
            bind,
        }
    }

    fn unscoped(mut self) -> Self {
        self.scoped = false;
        self
    }

    /// Lowercased path the route is served at.
    pub fn mount_path(&self, base_path: &str) -> String {
        let path = self.path.to_ascii_lowercase();
        match (self.scoped && !base_path.is_empty(), path.as_str()) {
            (false, _) => path,
            (true, "/") => base_path.to_ascii_lowercase(),
            (true, _) => format!("{}{}", base_path.to_ascii_lowercase(), path),
        }
    }

    fn route(&self) -> Route {
        let route = (self.bind)(web::route().method(self.method.clone()));
        match self.auth {
            Auth::Public => route,
            Auth::Bearer => route.wrap(Authenticate),
        }
    }
}

/// All endpoints served by the API.
pub fn route_table() -> Vec<RouteDef> {
    vec![
        RouteDef::new(Method::GET, "/", Auth::Public, |r| r.to(health::health_check)),
        RouteDef::new(Method::GET, "/Healthz", Auth::Public, |r| {
            r.to(health::health_check)
        }),
        RouteDef::new(Method::GET, "/Check", Auth::Public, |r| {
            r.to(health::health_check)
        }),
        RouteDef::new(Method::GET, "/Favicon.ico", Auth::Public, |r| {
            r.to(health::favicon)
        })
        .unscoped(),
        RouteDef::new(Method::POST, "/Auth/Register", Auth::Public, |r| {
            r.to(auth::register)
        }),
        RouteDef::new(Method::POST, "/Auth/Login", Auth::Public, |r| r.to(auth::login)),
        RouteDef::new(Method::GET, "/Users/Me", Auth::Bearer, |r| r.to(users::me)),
        RouteDef::new(Method::PATCH, "/Users/Me", Auth::Bearer, |r| {
            r.to(users::update_me)
        }),
    ]
}

/// Mount the route table under `base_path`.
pub fn configure(base_path: String) -> impl FnOnce(&mut web::ServiceConfig) {
    move |cfg| {
        let mut grouped: Vec<(String, Vec<RouteDef>)> = Vec::new();
        for def in route_table() {
            let path = def.mount_path(&base_path);
            match grouped.iter_mut().find(|(p, _)| *p == path) {
                Some((_, defs)) => defs.push(def),
                None => grouped.push((path, vec![def])),
            }
        }

        for (path, defs) in grouped {
            let resource = defs
                .iter()
                .fold(web::resource(path), |resource, def| resource.route(def.route()))
                .default_service(web::to(handlers::method_not_allowed));
            cfg.service(resource);
        }
    }
}

/// Log every mounted route once at startup.
pub fn log_routes(base_path: &str) {
    for def in route_table() {
        tracing::info!(
            method = %def.method,
            path = %def.mount_path(base_path),
            auth = ?def.auth,
            "Registered route"
        );
    }
}
