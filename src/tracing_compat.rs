//! Compatibility bridge for the `tracing` ecosystem.
//!
//! [`CaptureLayer`] is a `tracing_subscriber::Layer` that turns each event
//! into a [`Record`] and hands it to a [`Handler`]. The `message` field
//! becomes the record message; every other field becomes an attribute in
//! declaration order.

use std::fmt;

use tracing::field::{Field, Visit};
use tracing::{Event, Subscriber};
use tracing_subscriber::layer::{Context, Layer};

use crate::handler::Handler;
use crate::level::Level;
use crate::log_record::Record;
use crate::value::{Attr, Value};

/// Layer forwarding `tracing` events to a [`Handler`].
#[derive(Clone, Debug)]
pub struct CaptureLayer<H> {
    handler: H,
}

impl<H: Handler> CaptureLayer<H> {
    pub fn new(handler: H) -> Self {
        Self { handler }
    }

    pub fn handler(&self) -> &H {
        &self.handler
    }
}

#[derive(Default)]
struct EventVisitor {
    message: Option<String>,
    attrs: Vec<Attr>,
}

impl EventVisitor {
    fn push(&mut self, field: &Field, value: Value) {
        if field.name() == "message" {
            self.message = Some(value.to_string());
        } else {
            self.attrs.push(Attr::new(field.name(), value));
        }
    }
}

impl Visit for EventVisitor {
    fn record_f64(&mut self, field: &Field, value: f64) {
        self.push(field, Value::Float(value));
    }

    fn record_i64(&mut self, field: &Field, value: i64) {
        self.push(field, Value::Int(value));
    }

    fn record_u64(&mut self, field: &Field, value: u64) {
        self.push(field, Value::Uint(value));
    }

    fn record_bool(&mut self, field: &Field, value: bool) {
        self.push(field, Value::Bool(value));
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        self.push(field, Value::from(value));
    }

    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        self.push(field, Value::Display(format!("{value:?}")));
    }
}

impl<S, H> Layer<S> for CaptureLayer<H>
where
    S: Subscriber,
    H: Handler + 'static,
{
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let level = Level::from(*event.metadata().level());
        if !level.is_recognised() || !self.handler.enabled(level) {
            return;
        }

        let mut visitor = EventVisitor::default();
        event.record(&mut visitor);

        let mut record = Record::now(level, visitor.message.unwrap_or_default());
        record.add_attrs(visitor.attrs);
        if let Err(err) = self.handler.handle(&record) {
            log::warn!("CaptureLayer: handler rejected event: {err}");
        }
    }
}
