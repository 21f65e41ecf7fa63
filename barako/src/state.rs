use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

/// Shared component state with interior mutability.
///
/// `State<T>` is cheap to clone: clones share the same value. Components
/// keep their flags in a `State` so the handlers they register with the
/// [`HandlerRegistry`](crate::HandlerRegistry) can update the value that
/// the next render reads.
///
/// # Example
///
/// ```
/// use barako::State;
///
/// let open = State::new(false);
/// let handle = open.clone();
/// handle.update(|v| *v = !*v);
/// assert!(open.get());
/// ```
#[derive(Debug)]
pub struct State<T> {
    inner: Arc<RwLock<T>>,
}

impl<T> State<T> {
    pub fn new(value: T) -> Self {
        Self {
            inner: Arc::new(RwLock::new(value)),
        }
    }

    // A handler that panicked mid-update poisons the lock. The value is a
    // plain flag or counter with no invariant to break, so keep using it.
    fn read(&self) -> RwLockReadGuard<'_, T> {
        self.inner.read().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn write(&self) -> RwLockWriteGuard<'_, T> {
        self.inner.write().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    pub fn get(&self) -> T
    where
        T: Clone,
    {
        self.read().clone()
    }

    pub fn set(&self, value: T) {
        *self.write() = value;
    }

    /// Mutate the value in place.
    pub fn update<F>(&self, f: F)
    where
        F: FnOnce(&mut T),
    {
        f(&mut self.write());
    }
}

impl State<bool> {
    /// Flip the flag and return the new value.
    pub fn toggle(&self) -> bool {
        let mut flag = self.write();
        *flag = !*flag;
        *flag
    }
}

impl<T> Clone for State<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T: Default> Default for State<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}
