//! crates/logging/src/tracing_bridge.rs
//! Bridge between the tracing crate and the date gate.
//!
//! [`DatelogLayer`] is a tracing-subscriber layer that picks up events aimed
//! at the `datelog` target namespace and feeds them through
//! [`Logger::emit`], so code already instrumented with `tracing` macros gets
//! the same category glyphs and date suppression as the `dlog*!` macros.
//!
//! # Targets
//!
//! - `datelog` maps to [`Category::Default`].
//! - `datelog::<name>` maps to the category with that name, e.g.
//!   `datelog::critical` or `datelog::to_be_reviewed`.
//! - Anything else, including the [`TracingSink`](logging_sink::TracingSink)
//!   target `datelog::line`, is ignored.
//!
//! The event must carry a `date` field; its `message` becomes the logged text.
//!
//! # Usage
//!
//! ```rust,ignore
//! use logging::{init_tracing, Logger};
//!
//! init_tracing(Logger::default());
//!
//! tracing::info!(target: "datelog::critical", date = "2016-Jul-28", "disk full");
//! tracing::debug!(target: "datelog", date = "2016-Jul-28", "cache warm");
//! ```

use std::fmt;

use tracing::Subscriber;
use tracing::field::{Field, Visit};
use tracing_subscriber::layer::{Context, Layer};
use tracing_subscriber::registry::LookupSpan;

use super::category::Category;
use super::facade::Logger;
use super::record::CallSite;

/// Root of the target namespace picked up by [`DatelogLayer`].
pub const BRIDGE_TARGET: &str = "datelog";

/// A tracing layer that routes `datelog` events through a [`Logger`].
#[derive(Clone, Debug)]
pub struct DatelogLayer {
    logger: Logger,
}

impl DatelogLayer {
    /// Creates a layer emitting through `logger`.
    #[must_use]
    pub const fn new(logger: Logger) -> Self {
        Self { logger }
    }

    /// The logger events are routed through.
    #[must_use]
    pub const fn logger(&self) -> &Logger {
        &self.logger
    }

    /// Maps a tracing target to a category.
    fn target_to_category(target: &str) -> Option<Category> {
        if target == BRIDGE_TARGET {
            return Some(Category::Default);
        }
        let name = target.strip_prefix(BRIDGE_TARGET)?.strip_prefix("::")?;
        name.parse().ok()
    }
}

impl<S> Layer<S> for DatelogLayer
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    fn on_event(&self, event: &tracing::Event<'_>, _ctx: Context<'_, S>) {
        let metadata = event.metadata();
        let Some(category) = Self::target_to_category(metadata.target()) else {
            return;
        };

        let mut visitor = RecordVisitor::default();
        event.record(&mut visitor);

        let call_site = CallSite::new(
            metadata.file().unwrap_or("<unknown>"),
            metadata.module_path().unwrap_or(metadata.target()),
            metadata.line().unwrap_or(0),
        );
        self.logger.emit(
            category,
            visitor.message.as_deref(),
            visitor.date.as_deref(),
            call_site,
        );
    }
}

/// Collects the `message` and `date` fields of an event.
#[derive(Default)]
struct RecordVisitor {
    message: Option<String>,
    date: Option<String>,
}

impl Visit for RecordVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        match field.name() {
            "message" => self.message = Some(format!("{value:?}")),
            "date" if self.date.is_none() => self.date = Some(format!("{value:?}")),
            _ => {}
        }
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        match field.name() {
            "message" => self.message = Some(value.to_owned()),
            "date" => self.date = Some(value.to_owned()),
            _ => {}
        }
    }
}

/// Installs a global subscriber that routes `datelog` events through `logger`.
///
/// # Panics
///
/// Panics if a global subscriber has already been set.
pub fn init_tracing(logger: Logger) {
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;

    tracing_subscriber::registry()
        .with(DatelogLayer::new(logger))
        .init();
}

/// Like [`init_tracing`], with an additional filter layer in front.
///
/// ```rust,ignore
/// use logging::{init_tracing_with_filter, Logger};
/// use tracing_subscriber::EnvFilter;
///
/// init_tracing_with_filter(Logger::default(), EnvFilter::from_default_env());
/// ```
///
/// # Panics
///
/// Panics if a global subscriber has already been set.
pub fn init_tracing_with_filter<F>(logger: Logger, filter: F)
where
    F: Layer<tracing_subscriber::Registry> + Send + Sync + 'static,
{
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;

    tracing_subscriber::registry()
        .with(filter)
        .with(DatelogLayer::new(logger))
        .init();
}
