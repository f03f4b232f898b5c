//! Observability - access logging and log redaction.

mod access_log;
mod redact;

pub use access_log::AccessLog;
pub use redact::redact;
