//! Notification sink that records every toast in the session log.

use vinyl_commerce::notify::{Notification, NotificationKind, NotificationSink};

use crate::logging::{LogLevel, StructuredLogger};

/// Logs each notification, then passes it on to `inner`.
///
/// Success toasts are logged at info, error toasts at warn: they are user
/// mistakes, not faults.
#[derive(Debug)]
pub struct LoggingSink<S> {
    logger: StructuredLogger,
    inner: S,
}

impl<S: NotificationSink> LoggingSink<S> {
    pub fn new(logger: StructuredLogger, inner: S) -> Self {
        Self { logger, inner }
    }

    pub fn logger(&self) -> &StructuredLogger {
        &self.logger
    }

    pub fn inner(&self) -> &S {
        &self.inner
    }

    pub fn into_inner(self) -> S {
        self.inner
    }
}

impl<S: NotificationSink> NotificationSink for LoggingSink<S> {
    fn notify(&mut self, notification: Notification) {
        let (level, kind) = match notification.kind {
            NotificationKind::Success => (LogLevel::Info, "success"),
            NotificationKind::Error => (LogLevel::Warn, "error"),
        };
        self.logger
            .entry(level, "notification")
            .field("kind", kind)
            .field("text", notification.message.clone())
            .emit();
        self.inner.notify(notification);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vinyl_commerce::prelude::*;

    #[test]
    fn test_logs_and_forwards() {
        let mut logger =
            StructuredLogger::new(SessionId::new("s")).with_format(crate::LogFormat::Human);
        let buffer = logger.capture();
        let mut sink = LoggingSink::new(logger, Vec::<Notification>::new());

        let mut shop = Storefront::default();
        shop.dispatch_to(Action::AddToCart { product_id: ProductId::new(4) }, &mut sink);
        shop.dispatch_to(Action::BeginCheckout, &mut sink);
        shop.dispatch_to(Action::SubmitCheckout, &mut sink);

        let forwarded = sink.into_inner();
        assert_eq!(forwarded.len(), 2);
        assert_eq!(forwarded[1].message, "Select a payment method");

        let lines = buffer.lock().unwrap();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("[INFO] notification"));
        assert!(lines[1].starts_with("[WARN] notification"));
        assert!(lines[1].contains("Select a payment method"));
    }
}
