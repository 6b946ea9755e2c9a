pub mod error;
pub mod sender;

pub use error::SendError;
pub use sender::{DynSender, Sender, require_url};

// Outbound W3C Trace Context injection (needs reqwest).
#[cfg(feature = "trace-context")]
pub mod trace_context;
#[cfg(feature = "trace-context")]
pub use trace_context::inject_trace_context;

// In-process mock webhook endpoint for tests.
#[cfg(feature = "test-util")]
pub mod testing;
