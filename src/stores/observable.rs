use tokio::sync::watch;

/// Publish-subscribe cell over immutable state snapshots. Every store owns
/// one; views subscribe and re-render from the snapshots they receive.
///
/// `update` notifies all current subscribers before it returns, so a
/// subscriber polling after any store method has run always observes the
/// settled state.
pub struct Observable<T> {
    tx: watch::Sender<T>,
}

impl<T: Clone> Observable<T> {
    pub fn new(initial: T) -> Self {
        let (tx, _rx) = watch::channel(initial);
        Observable { tx }
    }

    /// Snapshot of the current state.
    pub fn get(&self) -> T {
        self.tx.borrow().clone()
    }

    pub fn update(&self, mutate: impl FnOnce(&mut T)) {
        self.tx.send_modify(mutate);
    }

    /// Replaces the whole state in one notification.
    pub fn set(&self, value: T) {
        self.tx.send_replace(value);
    }

    pub fn subscribe(&self) -> watch::Receiver<T> {
        self.tx.subscribe()
    }
}

impl<T: Clone + Default> Default for Observable<T> {
    fn default() -> Self {
        Observable::new(T::default())
    }
}

#[cfg(test)]
mod tests {
    use super::Observable;

    #[test]
    fn subscribers_see_every_mutation() {
        let cell = Observable::new(0_u32);
        let mut rx = cell.subscribe();

        cell.update(|v| *v += 1);

        assert!(rx.has_changed().unwrap());
        assert_eq!(*rx.borrow_and_update(), 1);
    }

    #[test]
    fn get_returns_a_snapshot() {
        let cell = Observable::new(vec![1, 2]);
        let snapshot = cell.get();

        cell.update(|v| v.push(3));

        assert_eq!(snapshot, vec![1, 2]);
        assert_eq!(cell.get(), vec![1, 2, 3]);
    }
}
