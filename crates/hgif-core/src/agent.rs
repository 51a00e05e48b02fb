use crate::device::DeviceCapability;
use crate::log_book::{Clock, LogBook, LogEntry, Severity};
use crate::strategy::{select_strategy, Strategy};

/// Handle returned by [`Agent::subscribe`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type LogListener = Box<dyn FnMut(&LogEntry, &LogBook)>;

/// Decision-making side of the demo.
///
/// Holds the current device and bandwidth, answers strategy queries and keeps
/// a bounded log. Presentation layers subscribe to log events instead of being
/// called directly.
pub struct Agent {
    pub device: &'static DeviceCapability,
    /// Not range-checked; passed straight to [`select_strategy`].
    pub bandwidth_mbps: f64,
    log: LogBook,
    clock: Box<dyn Clock>,
    listeners: Vec<(SubscriptionId, LogListener)>,
    next_subscription: u64,
}

impl Agent {
    pub fn with_clock(
        device: &'static DeviceCapability,
        bandwidth_mbps: f64,
        log_capacity: usize,
        clock: Box<dyn Clock>,
    ) -> Self {
        Self {
            device,
            bandwidth_mbps,
            log: LogBook::with_capacity(log_capacity),
            clock,
            listeners: Vec::new(),
            next_subscription: 0,
        }
    }

    #[inline]
    pub fn strategy(&self) -> Strategy {
        select_strategy(self.bandwidth_mbps, self.device)
    }

    pub fn log_book(&self) -> &LogBook {
        &self.log
    }

    /// Prepend a timestamped entry, evict past the bound, then notify listeners.
    pub fn log(&mut self, message: impl Into<String>, severity: Severity) {
        let entry = LogEntry {
            timestamp: self.clock.timestamp(),
            message: message.into(),
            severity,
        };
        match severity {
            Severity::Error => log::warn!("[agent] {}", entry.message),
            _ => log::info!("[agent] {}", entry.message),
        }
        self.log.push(entry.clone());
        for (_, listener) in self.listeners.iter_mut() {
            listener(&entry, &self.log);
        }
    }

    pub fn subscribe(&mut self, listener: impl FnMut(&LogEntry, &LogBook) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(sid, _)| *sid != id);
        self.listeners.len() != before
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::device::DeviceKind;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn agent() -> Agent {
        Agent::with_clock(
            DeviceKind::Desktop.capability(),
            100.0,
            20,
            Box::new(|| "12:34:56".to_string()),
        )
    }

    #[test]
    fn log_uses_injected_clock() {
        let mut a = agent();
        a.log("hello", Severity::Decision);
        let latest = a.log_book().latest().cloned();
        assert_eq!(
            latest,
            Some(LogEntry {
                timestamp: "12:34:56".into(),
                message: "hello".into(),
                severity: Severity::Decision,
            })
        );
    }

    #[test]
    fn listeners_see_entry_and_updated_book() {
        let mut a = agent();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();
        a.subscribe(move |entry, book| {
            sink.borrow_mut().push((entry.message.clone(), book.len()));
        });
        a.log("one", Severity::Info);
        a.log("two", Severity::Info);
        assert_eq!(*seen.borrow(), vec![("one".into(), 1), ("two".into(), 2)]);
    }

    #[test]
    fn unsubscribed_listener_is_silent() {
        let mut a = agent();
        let count = Rc::new(RefCell::new(0));
        let c = count.clone();
        let id = a.subscribe(move |_, _| *c.borrow_mut() += 1);
        a.log("before", Severity::Info);
        assert!(a.unsubscribe(id));
        assert!(!a.unsubscribe(id));
        a.log("after", Severity::Info);
        assert_eq!(*count.borrow(), 1);
    }

    #[test]
    fn strategy_follows_mutated_state() {
        let mut a = agent();
        assert_eq!(a.strategy().quality_label, "1440p");
        a.device = DeviceKind::Mobile.capability();
        assert_eq!(a.strategy().quality_label, "1080p");
        a.bandwidth_mbps = 5.0;
        assert_eq!(a.strategy().quality_label, "480p");
    }
}
