//! Test utilities and shared fixtures for the homework bot workspace.
//!
//! Enabled by the `testing` feature so other crates can pull them in as a
//! dev-dependency.

use serde_json::{json, Value};
use std::sync::Once;
use tracing_subscriber::{fmt, EnvFilter};

static INIT: Once = Once::new();

/// Initialize logging for tests.
/// Safe to call multiple times; only the first call installs a subscriber.
pub fn init_test_logging() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));

        let _ = fmt().with_test_writer().with_env_filter(filter).try_init();
    });
}

/// Sample API payloads in the shape the homework endpoint returns.
pub mod api_fixtures {
    use super::*;

    /// A single submission record.
    pub fn homework(name: &str, status: &str) -> Value {
        json!({
            "id": 123,
            "status": status,
            "homework_name": name,
            "reviewer_comment": "Всё нравится",
            "date_updated": "2024-01-15T14:40:57Z",
            "lesson_name": "Итоговый проект"
        })
    }

    /// A full response with the given records and a server timestamp.
    pub fn response_with(homeworks: Vec<Value>, current_date: i64) -> Value {
        json!({
            "homeworks": homeworks,
            "current_date": current_date
        })
    }

    /// A response with no submissions.
    pub fn empty_response() -> Value {
        json!({ "homeworks": [], "current_date": 1_705_330_000_i64 })
    }
}
