//! Input debouncing.
//!
//! A [`Debouncer`] sits between a single input and the handler that reacts to
//! it. Every raw change cancels the pending delivery and schedules a new one;
//! only the last value is delivered once the input has been idle for
//! `idle_ms`. A loading flag is raised on every raw change and lowered when
//! the delivery fires.

use gloo_timers::callback::Timeout;
use log::debug;
use std::cell::RefCell;
use std::rc::Rc;

/// Runs a callback after a delay. Dropping the returned handle cancels it.
pub trait Scheduler {
    type Handle;

    fn schedule(&self, delay_ms: u32, callback: Box<dyn FnOnce()>) -> Self::Handle;
}

/// Browser timers via `setTimeout`.
#[derive(Debug, Clone, Copy, Default)]
pub struct GlooScheduler;

impl Scheduler for GlooScheduler {
    type Handle = Timeout;

    fn schedule(&self, delay_ms: u32, callback: Box<dyn FnOnce()>) -> Timeout {
        Timeout::new(delay_ms, callback)
    }
}

struct Shared<T> {
    value: Option<T>,
    loading: bool,
    on_change: Rc<dyn Fn(T)>,
    on_loading: Option<Rc<dyn Fn(bool)>>,
}

impl<T> Shared<T> {
    // Returns the listener to notify, if the flag actually changed.
    fn set_loading(&mut self, loading: bool) -> Option<Rc<dyn Fn(bool)>> {
        if self.loading == loading {
            return None;
        }
        self.loading = loading;
        self.on_loading.clone()
    }
}

/// Deliver the pending value (if any) and lower the loading flag.
///
/// Callbacks run after the borrow is released so they may feed the debouncer again.
fn deliver<T>(shared: &Rc<RefCell<Shared<T>>>) {
    let (value, on_change, on_loading) = {
        let mut inner = shared.borrow_mut();
        let value = inner.value.take();
        let on_loading = inner.set_loading(false);
        (value, inner.on_change.clone(), on_loading)
    };
    if let Some(value) = value {
        on_change(value);
    }
    if let Some(listener) = on_loading {
        listener(false);
    }
}

pub struct Debouncer<T: 'static, S: Scheduler> {
    scheduler: S,
    idle_ms: u32,
    shared: Rc<RefCell<Shared<T>>>,
    pending: Option<S::Handle>,
}

impl<T: 'static, S: Scheduler> Debouncer<T, S> {
    pub fn new(scheduler: S, idle_ms: u32, on_change: impl Fn(T) + 'static) -> Self {
        Self {
            scheduler,
            idle_ms,
            shared: Rc::new(RefCell::new(Shared {
                value: None,
                loading: false,
                on_change: Rc::new(on_change),
                on_loading: None,
            })),
            pending: None,
        }
    }

    /// Get told whenever the loading flag flips.
    pub fn with_loading_listener(self, listener: impl Fn(bool) + 'static) -> Self {
        self.shared.borrow_mut().on_loading = Some(Rc::new(listener));
        self
    }

    /// Feed a raw change event.
    pub fn input(&mut self, value: T) {
        // Drop the old handle first so at most one delivery is ever pending
        self.pending = None;

        let listener = {
            let mut inner = self.shared.borrow_mut();
            inner.value = Some(value);
            inner.set_loading(true)
        };
        if let Some(listener) = listener {
            listener(true);
        }

        let shared = Rc::clone(&self.shared);
        self.pending = Some(
            self.scheduler
                .schedule(self.idle_ms, Box::new(move || deliver(&shared))),
        );
    }

    pub fn is_loading(&self) -> bool {
        self.shared.borrow().loading
    }

    /// Drop any pending value without delivering it.
    pub fn cancel(&mut self) {
        self.pending = None;
        let listener = {
            let mut inner = self.shared.borrow_mut();
            inner.value = None;
            inner.set_loading(false)
        };
        if let Some(listener) = listener {
            debug!("Cancelled pending debounced input");
            listener(false);
        }
    }

    /// Deliver a pending value now instead of waiting for the idle window.
    pub fn flush(&mut self) {
        self.pending = None;
        deliver(&self.shared);
    }
}


#[cfg(test)]
mod tests {
    use super::testing::ManualScheduler;
    use super::*;

    fn recording(
        scheduler: &ManualScheduler,
        idle_ms: u32,
    ) -> (Debouncer<String, ManualScheduler>, Rc<RefCell<Vec<String>>>) {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        let debouncer = Debouncer::new(scheduler.clone(), idle_ms, move |v: String| {
            sink.borrow_mut().push(v)
        });
        (debouncer, seen)
    }

    #[test]
    fn test_rapid_changes_deliver_last_value_once() {
        let scheduler = ManualScheduler::default();
        let (mut debouncer, seen) = recording(&scheduler, 750);

        for text in ["l", "le", "leg"] {
            debouncer.input(text.to_string());
            scheduler.advance(200);
        }
        assert!(seen.borrow().is_empty());
        assert_eq!(scheduler.pending(), 1);

        scheduler.advance(750);
        assert_eq!(*seen.borrow(), vec!["leg".to_string()]);
        assert_eq!(scheduler.pending(), 0);
    }

    #[test]
    fn test_separate_bursts_deliver_separately() {
        let scheduler = ManualScheduler::default();
        let (mut debouncer, seen) = recording(&scheduler, 100);

        debouncer.input("a".to_string());
        scheduler.advance(100);
        debouncer.input("b".to_string());
        scheduler.advance(100);
        assert_eq!(*seen.borrow(), vec!["a".to_string(), "b".to_string()]);
    }

    #[test]
    fn test_loading_flag_follows_delivery() {
        let scheduler = ManualScheduler::default();
        let flips = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&flips);
        let mut debouncer = Debouncer::new(scheduler.clone(), 50, |_: u32| {})
            .with_loading_listener(move |l| sink.borrow_mut().push(l));

        assert!(!debouncer.is_loading());
        debouncer.input(1);
        assert!(debouncer.is_loading());
        debouncer.input(2);
        scheduler.advance(50);
        assert!(!debouncer.is_loading());
        assert_eq!(*flips.borrow(), vec![true, false]);
    }

    #[test]
    fn test_cancel_drops_pending_value() {
        let scheduler = ManualScheduler::default();
        let (mut debouncer, seen) = recording(&scheduler, 50);

        debouncer.input("press".to_string());
        debouncer.cancel();
        scheduler.advance(100);
        assert!(seen.borrow().is_empty());
        assert!(!debouncer.is_loading());
    }

    #[test]
    fn test_flush_delivers_immediately() {
        let scheduler = ManualScheduler::default();
        let (mut debouncer, seen) = recording(&scheduler, 50);

        debouncer.input("row".to_string());
        debouncer.flush();
        assert_eq!(*seen.borrow(), vec!["row".to_string()]);
        scheduler.advance(100);
        assert_eq!(seen.borrow().len(), 1);

        // Nothing pending, nothing delivered
        debouncer.flush();
        assert_eq!(seen.borrow().len(), 1);
    }
}
