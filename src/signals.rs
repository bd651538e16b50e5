//! Shared values that mark the widgets reading them dirty when written.
//!
//! A `get` performed while the walker is laying out or drawing a kid
//! subscribes that kid for that pass, together with the mark channel of the
//! [`App`](crate::App) running the pass. Writing the signal queues a mark on
//! each subscriber's channel; the app applies queued marks before its next
//! pass, so a write made from inside a callback is observed on the next
//! externally driven pass.

use std::{
    cell::RefCell,
    collections::HashMap,
    rc::Rc,
    sync::mpsc,
};

use crate::layout::WidgetId;

/// Which pass a subscriber read the signal in.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Pass {
    Layout,
    Draw,
}

impl Pass {
    pub fn for_layout(self) -> bool {
        self == Pass::Layout
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
struct Subscriber {
    id: WidgetId,
    pass: Pass,
}

pub type MarkSender = mpsc::Sender<(WidgetId, Pass)>;

thread_local! {
    static SUBSCRIBER_STACK: RefCell<Vec<Subscriber>> = const { RefCell::new(Vec::new()) };
    static MARK_ROUTES: RefCell<Vec<MarkSender>> = const { RefCell::new(Vec::new()) };
}

struct SignalInner<T> {
    value: T,
    subscribers: HashMap<Subscriber, MarkSender>,
}

pub struct ReadSignal<T: 'static> {
    inner: Rc<RefCell<SignalInner<T>>>,
}

pub struct WriteSignal<T: 'static> {
    inner: Rc<RefCell<SignalInner<T>>>,
}

impl<T> Clone for ReadSignal<T> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<T> Clone for WriteSignal<T> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

pub fn create_signal<T>(value: T) -> (ReadSignal<T>, WriteSignal<T>) {
    let inner = Rc::new(RefCell::new(SignalInner {
        value,
        subscribers: HashMap::new(),
    }));

    (
        ReadSignal {
            inner: inner.clone(),
        },
        WriteSignal { inner },
    )
}

impl<T> ReadSignal<T> {
    fn subscribe(&self) {
        let Some(subscriber) = SUBSCRIBER_STACK.with(|stack| stack.borrow().last().copied()) else {
            return;
        };
        // reads outside an app pass have nowhere to send marks
        let Some(tx) = MARK_ROUTES.with(|routes| routes.borrow().last().cloned()) else {
            return;
        };
        self.inner.borrow_mut().subscribers.insert(subscriber, tx);
    }

    /// Borrow the value without cloning it.
    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        self.subscribe();
        f(&self.inner.borrow().value)
    }
}

impl<T: Clone> ReadSignal<T> {
    pub fn get(&self) -> T {
        self.with(T::clone)
    }
}

impl From<&str> for ReadSignal<String> {
    fn from(s: &str) -> Self {
        create_signal(s.to_string()).0
    }
}

impl From<String> for ReadSignal<String> {
    fn from(s: String) -> Self {
        create_signal(s).0
    }
}

impl<T> WriteSignal<T> {
    fn notify_subscribers(&self) {
        let subscribers = std::mem::take(&mut self.inner.borrow_mut().subscribers);
        for (sub, tx) in subscribers {
            if tx.send((sub.id, sub.pass)).is_err() {
                log::debug!("signal write for {} after its app was dropped", sub.id);
            }
        }
    }

    pub fn set(&self, new_value: T) {
        self.inner.borrow_mut().value = new_value;
        self.notify_subscribers();
    }

    pub fn update<F>(&self, updater: F)
    where
        F: FnOnce(&mut T),
    {
        updater(&mut self.inner.borrow_mut().value);
        self.notify_subscribers();
    }

    /// Reads the current value without subscribing.
    pub fn peek<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        f(&self.inner.borrow().value)
    }
}

/// While alive, signal reads subscribe `id` for `pass`.
pub struct ScopedNodeContext(());

impl ScopedNodeContext {
    pub fn new(id: WidgetId, pass: Pass) -> Self {
        SUBSCRIBER_STACK.with(|stack| {
            stack.borrow_mut().push(Subscriber { id, pass });
        });

        Self(())
    }
}

impl Drop for ScopedNodeContext {
    fn drop(&mut self) {
        SUBSCRIBER_STACK.with(|stack| {
            stack.borrow_mut().pop();
        });
    }
}

/// While alive, subscriptions made on this thread send their marks to `tx`.
pub struct MarkRoute(());

impl MarkRoute {
    pub fn enter(tx: &MarkSender) -> Self {
        MARK_ROUTES.with(|routes| routes.borrow_mut().push(tx.clone()));
        Self(())
    }
}

impl Drop for MarkRoute {
    fn drop(&mut self) {
        MARK_ROUTES.with(|routes| {
            routes.borrow_mut().pop();
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_inside_scope_subscribe_once() {
        let (tx, rx) = mpsc::channel();
        let _route = MarkRoute::enter(&tx);
        let id = WidgetId::next();
        let (read, write) = create_signal(1);
        {
            let _scope = ScopedNodeContext::new(id, Pass::Draw);
            assert_eq!(read.get(), 1);
        }
        // outside any scope: no subscription
        assert_eq!(read.get(), 1);

        write.set(2);
        assert_eq!(rx.try_iter().collect::<Vec<_>>(), vec![(id, Pass::Draw)]);

        // subscriptions are consumed by the write
        write.set(3);
        assert!(rx.try_recv().is_err());
        assert_eq!(read.get(), 3);
    }

    #[test]
    fn innermost_scope_wins() {
        let (tx, rx) = mpsc::channel();
        let _route = MarkRoute::enter(&tx);
        let outer = WidgetId::next();
        let inner = WidgetId::next();
        let (read, write) = create_signal(String::from("x"));
        {
            let _a = ScopedNodeContext::new(outer, Pass::Layout);
            {
                let _b = ScopedNodeContext::new(inner, Pass::Layout);
                read.with(|s| assert_eq!(s, "x"));
            }
        }
        write.update(|s| s.push('y'));
        assert_eq!(rx.try_iter().collect::<Vec<_>>(), vec![(inner, Pass::Layout)]);
        assert_eq!(write.peek(|s| s.clone()), "xy");
    }

    #[test]
    fn marks_go_to_the_route_active_at_read_time() {
        let (tx_a, rx_a) = mpsc::channel();
        let (tx_b, rx_b) = mpsc::channel();
        let a = WidgetId::next();
        let b = WidgetId::next();
        let (read, write) = create_signal(0);
        {
            let _route = MarkRoute::enter(&tx_a);
            let _scope = ScopedNodeContext::new(a, Pass::Layout);
            read.get();
        }
        {
            let _route = MarkRoute::enter(&tx_b);
            let _scope = ScopedNodeContext::new(b, Pass::Draw);
            read.get();
        }
        write.set(1);
        assert_eq!(rx_a.try_iter().collect::<Vec<_>>(), vec![(a, Pass::Layout)]);
        assert_eq!(rx_b.try_iter().collect::<Vec<_>>(), vec![(b, Pass::Draw)]);
    }

    #[test]
    fn reads_without_a_route_do_not_subscribe() {
        let (tx, rx) = mpsc::channel();
        let (read, write) = create_signal(0);
        {
            let _scope = ScopedNodeContext::new(WidgetId::next(), Pass::Draw);
            read.get();
        }
        let _route = MarkRoute::enter(&tx);
        write.set(1);
        assert!(rx.try_recv().is_err());
    }
}
