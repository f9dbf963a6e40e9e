//! A value that publishes its changes to subscribers.

use std::fmt;

use tokio::sync::watch;

/// Shared value backed by a `watch` channel.
///
/// Every mutation replaces the published snapshot and wakes subscribers.
/// Mutations work whether or not anyone is subscribed.
pub struct Observable<T> {
    tx: watch::Sender<T>,
}

impl<T> Observable<T> {
    pub fn new(initial: T) -> Self {
        let (tx, _rx) = watch::channel(initial);
        Self { tx }
    }

    /// Clone the current value.
    pub fn get(&self) -> T
    where
        T: Clone,
    {
        self.tx.borrow().clone()
    }

    /// Inspect the current value without cloning it.
    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        f(&self.tx.borrow())
    }

    pub fn set(&self, value: T) {
        self.tx.send_replace(value);
    }

    /// Mutate in place and notify subscribers.
    pub fn update(&self, f: impl FnOnce(&mut T)) {
        self.tx.send_modify(f);
    }

    /// Mutate in place; subscribers are only notified when `f` returns `true`.
    pub fn update_if(&self, f: impl FnOnce(&mut T) -> bool) -> bool {
        self.tx.send_if_modified(f)
    }

    /// Start observing. Dropping the subscription unsubscribes.
    pub fn subscribe(&self) -> Subscription<T> {
        Subscription {
            rx: self.tx.subscribe(),
        }
    }

    pub fn subscriber_count(&self) -> usize {
        self.tx.receiver_count()
    }
}

impl<T: Default> Default for Observable<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T: fmt::Debug> fmt::Debug for Observable<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Observable")
            .field("value", &*self.tx.borrow())
            .field("subscribers", &self.tx.receiver_count())
            .finish()
    }
}

/// Handle held by one observer of an [`Observable`].
///
/// A fresh subscription treats the value at subscription time as already
/// seen.
pub struct Subscription<T> {
    rx: watch::Receiver<T>,
}

impl<T> Subscription<T> {
    /// Clone the current value without marking it seen.
    pub fn current(&self) -> T
    where
        T: Clone,
    {
        self.rx.borrow().clone()
    }

    /// Clone the current value and mark it seen.
    pub fn latest(&mut self) -> T
    where
        T: Clone,
    {
        self.rx.borrow_and_update().clone()
    }

    /// Whether a change has been published since the value was last seen.
    pub fn has_changed(&self) -> bool {
        self.rx.has_changed().unwrap_or(false)
    }

    /// Wait for the next change.
    ///
    /// Returns `false` once the observable is gone and no further changes
    /// can arrive.
    pub async fn changed(&mut self) -> bool {
        self.rx.changed().await.is_ok()
    }

    pub fn unsubscribe(self) {}
}
