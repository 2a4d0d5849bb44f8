//! Shared mock server for API tests
//!
//! One mockito server serves every test in a binary. Tests keep out of each
//! other's way by using a unique path prefix, see [`shared_api_base`].

use lazy_static::lazy_static;
use mockito::{Server, ServerGuard};
use std::sync::{Mutex, MutexGuard};

lazy_static! {
    pub static ref SHARED_MOCK_SERVER: Mutex<ServerGuard> = Mutex::new(Server::new());
}

/// Locks the shared server.
///
/// Hold the guard only while creating mocks; the returned `Mock`s stay
/// registered until dropped.
///
/// ```no_run
/// use aiwriter_testkit::{get_shared_mock_server, shared_api_base};
///
/// let base = shared_api_base("generate-ok");
/// let _mock = {
///     let mut server = get_shared_mock_server();
///     server
///         .mock("POST", "/generate-ok/v1/chat/completions")
///         .with_status(200)
///         .create()
/// };
/// // point the client at `base` ...
/// ```
pub fn get_shared_mock_server() -> MutexGuard<'static, ServerGuard> {
    // A panicking test leaves the server usable
    SHARED_MOCK_SERVER
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// `<server>/<prefix>/v1`, an API base URL private to one test
pub fn shared_api_base(prefix: &str) -> String {
    let server = get_shared_mock_server();
    format!("{}/{}/v1", server.url(), prefix.trim_matches('/'))
}
