//! The store that owns application state and its listener registry.

#[cfg(feature = "no_std")]
use alloc::boxed::Box;
#[cfg(feature = "no_std")]
use alloc::vec::Vec;

use core::sync::atomic::{AtomicBool, Ordering};

use log::trace;
use portable_atomic_util::Arc;
use spin::Mutex;

use crate::Reducer;

/// Single owner of application state plus its change-notification registry.
///
/// `Store` is a cheap, cloneable handle; every clone refers to the same
/// state and the same listeners. Each [`dispatch`](Self::dispatch):
/// 1. Snapshots the listeners registered before the dispatch began
/// 2. Reduces the action against the latest committed state via the [`Reducer`]
/// 3. Commits the result (or keeps the current state when the reducer returns `None`)
/// 4. Invokes every snapshotted listener, in registration order
///
/// No lock is held while listeners run, so a listener may subscribe,
/// unsubscribe or dispatch again. Reducers must stay pure: calling back into
/// the store from inside [`Reducer::reduce`] deadlocks.
///
/// # Example
///
/// ```rust
/// use oxide_store::Store;
///
/// enum Action { Increment }
///
/// let store = Store::new(
///     |count: &i32, action: Action| match action {
///         Action::Increment => Some(count + 1),
///     },
///     0,
/// );
///
/// let unsubscribe = store.subscribe(|| println!("changed"));
/// store.dispatch(Action::Increment);
/// assert_eq!(*store.get_state(), 1);
///
/// unsubscribe.unsubscribe();
/// ```
pub struct Store<State, Action> {
    inner: Arc<StoreInner<State, Action>>,
}

struct StoreInner<State, Action> {
    reducer: Box<dyn Reducer<State, Action> + Send + Sync>,
    state: Mutex<Committed<State>>,
    listeners: Mutex<Vec<Arc<Listener>>>,
}

/// The current state and the number of commits that produced it.
struct Committed<State> {
    revision: u64,
    state: Arc<State>,
}

struct Listener {
    callback: Box<dyn Fn() + Send + Sync>,
    active: AtomicBool,
}

impl<State, Action> Clone for Store<State, Action> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<State, Action> Store<State, Action>
where
    State: Send + Sync + 'static,
    Action: 'static,
{
    /// Create a store from a reducer and an initial state.
    ///
    /// # Arguments
    ///
    /// * `reducer` - Pure transition function applied on every dispatch
    /// * `initial_state` - The state visible before the first dispatch
    pub fn new<R>(reducer: R, initial_state: State) -> Self
    where
        R: Reducer<State, Action> + Send + Sync + 'static,
    {
        Store {
            inner: Arc::new(StoreInner {
                reducer: Box::new(reducer),
                state: Mutex::new(Committed {
                    revision: 0,
                    state: Arc::new(initial_state),
                }),
                listeners: Mutex::new(Vec::new()),
            }),
        }
    }

    /// Get the current state.
    ///
    /// Returns a shared handle; two calls with no state change in between
    /// return pointer-equal handles (see `Arc::ptr_eq`).
    pub fn get_state(&self) -> Arc<State> {
        self.inner.state.lock().state.clone()
    }

    /// The current state together with its commit revision.
    ///
    /// Revisions grow by one per committed state, so a listener running on
    /// another thread can tell whether what it read is older than what a
    /// later dispatch already delivered.
    pub(crate) fn snapshot(&self) -> (u64, Arc<State>) {
        let committed = self.inner.state.lock();
        (committed.revision, committed.state.clone())
    }

    /// Reduce `action` into the state and notify listeners.
    ///
    /// Listeners subscribed while notification is running are not called
    /// until the next dispatch. Listeners unsubscribed while notification is
    /// running are skipped if they have not been reached yet.
    ///
    /// Reductions from concurrent dispatches are serialized; their
    /// notifications may overlap. Listeners that cache derived state should
    /// compare commit revisions, as [`Selection`](crate::Selection) does.
    pub fn dispatch(&self, action: Action) {
        let listeners = self.inner.listeners.lock().clone();

        let changed = {
            let mut committed = self.inner.state.lock();
            match self.inner.reducer.reduce(&*committed.state, action) {
                Some(next) => {
                    committed.revision += 1;
                    committed.state = Arc::new(next);
                    true
                }
                None => false,
            }
        };

        trace!(
            "dispatch reduced (state changed: {}), notifying {} listener(s)",
            changed,
            listeners.len()
        );

        for listener in &listeners {
            if listener.active.load(Ordering::Acquire) {
                (listener.callback)();
            }
        }
    }

    /// Register a listener called with no arguments after every dispatch.
    ///
    /// Subscribing the same callback twice registers two independent entries.
    /// The returned [`Unsubscribe`] removes exactly the entry created here.
    pub fn subscribe<F>(&self, listener: F) -> Unsubscribe
    where
        F: Fn() + Send + Sync + 'static,
    {
        let entry = Arc::new(Listener {
            callback: Box::new(listener),
            active: AtomicBool::new(true),
        });

        let count = {
            let mut listeners = self.inner.listeners.lock();
            listeners.push(entry.clone());
            listeners.len()
        };
        trace!("listener subscribed ({} registered)", count);

        let inner = self.inner.clone();
        Unsubscribe::new(move || {
            // Only the first call gets to remove the entry.
            if entry.active.swap(false, Ordering::AcqRel) {
                let mut listeners = inner.listeners.lock();
                listeners.retain(|registered| !Arc::ptr_eq(registered, &entry));
                trace!("listener unsubscribed ({} registered)", listeners.len());
            }
        })
    }

    /// Number of listeners currently registered.
    pub fn listener_count(&self) -> usize {
        self.inner.listeners.lock().len()
    }
}

/// Handle removing one listener from its store.
///
/// Returned by [`Store::subscribe`]. Calling [`unsubscribe`](Self::unsubscribe)
/// more than once is a no-op. Dropping the handle does *not* unsubscribe;
/// use [`Selection`](crate::Selection) for lifetime-bound subscriptions.
pub struct Unsubscribe(Box<dyn Fn() + Send + Sync>);

impl Unsubscribe {
    pub(crate) fn new<F>(remove: F) -> Self
    where
        F: Fn() + Send + Sync + 'static,
    {
        Self(Box::new(remove))
    }

    /// Remove the listener this handle was created for.
    pub fn unsubscribe(&self) {
        (self.0)();
    }
}
