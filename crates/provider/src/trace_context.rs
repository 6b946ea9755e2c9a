//! Outbound W3C Trace Context propagation for webhook requests.
//!
//! Injects `traceparent` and `tracestate` headers into outgoing HTTP requests
//! so that a traced host application can follow a notification out to the
//! chat platform's edge.
//!
//! When OpenTelemetry is disabled (no global propagator registered), the
//! injector is a no-op and adds zero headers.

use opentelemetry::propagation::Injector;
use opentelemetry::{Context, global};

/// A [`reqwest::header::HeaderMap`]-backed injector for OpenTelemetry propagators.
struct HeaderInjector<'a>(&'a mut reqwest::header::HeaderMap);

impl Injector for HeaderInjector<'_> {
    fn set(&mut self, key: &str, value: String) {
        if let Ok(name) = reqwest::header::HeaderName::from_bytes(key.as_bytes())
            && let Ok(val) = reqwest::header::HeaderValue::from_str(&value)
        {
            self.0.insert(name, val);
        }
    }
}

/// Inject the current span's trace context into a [`reqwest::RequestBuilder`].
///
/// This is a no-op when no global text-map propagator has been registered.
pub fn inject_trace_context(builder: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
    let mut headers = reqwest::header::HeaderMap::new();
    let cx = Context::current();
    global::get_text_map_propagator(|propagator| {
        propagator.inject_context(&cx, &mut HeaderInjector(&mut headers));
    });

    if headers.is_empty() {
        builder
    } else {
        builder.headers(headers)
    }
}
