//! Selector subscriptions: per-consumer derived state with change gating.

#[cfg(feature = "no_std")]
use alloc::boxed::Box;

use log::debug;
use portable_atomic_util::Arc;
use spin::Mutex;

use crate::{Context, Error, Renderer, Unsubscribe};

type Equality<Derived> = Box<dyn Fn(&Derived, &Derived) -> bool + Send + Sync>;

/// One mounted consumer's view of a slice of store state.
///
/// Created by [`use_selector`], [`use_selector_with`] or [`use_selector_eq`].
/// The selection holds the last derived value and subscribes to the store
/// exactly once. After every dispatch it re-runs its selector and, when the
/// value counts as changed, stores it and hands it to the consumer's
/// [`Renderer`].
///
/// Dropping the selection (or calling [`unmount`](Self::unmount)) removes
/// its listener from the store.
pub struct Selection<Derived> {
    shared: Arc<SelectionShared<Derived>>,
    unsubscribe: Unsubscribe,
}

struct SelectionShared<Derived> {
    state: Mutex<SelectionState<Derived>>,
    renderer: Mutex<Box<dyn Renderer<Derived> + Send>>,
}

struct SelectionState<Derived> {
    value: Derived,
    revision: u64,
    rendering: bool,
    pending: bool,
}

impl<Derived: Clone> SelectionShared<Derived> {
    fn update(&self, revision: u64, current: Derived, equality: Option<&Equality<Derived>>) {
        let next = {
            let mut state = self.state.lock();

            // A listener from a concurrent dispatch may finish after a newer one.
            if revision < state.revision {
                debug!(
                    "dropping selection from revision {} (holding {})",
                    revision, state.revision
                );
                return;
            }
            state.revision = revision;

            // Compare against the value of the latest render, not the one
            // captured when the subscription was made.
            if let Some(is_equal) = equality {
                if is_equal(&current, &state.value) {
                    debug!("selected value unchanged, skipping render");
                    return;
                }
            }

            state.value = current;
            if state.rendering {
                state.pending = true;
                return;
            }
            state.rendering = true;
            state.value.clone()
        };

        self.render(next);
    }

    /// Runs the renderer until no change arrived during the last call.
    fn render(&self, mut next: Derived) {
        loop {
            self.renderer.lock().render(next);

            let mut state = self.state.lock();
            if state.pending {
                state.pending = false;
                next = state.value.clone();
            } else {
                state.rendering = false;
                return;
            }
        }
    }
}

impl<Derived: Clone> Selection<Derived> {
    /// Get the current derived value.
    pub fn get(&self) -> Derived {
        self.shared.state.lock().value.clone()
    }

    /// Run `f` against a copy of the current derived value.
    ///
    /// The selection is not locked while `f` runs, so `f` may dispatch.
    pub fn with<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&Derived) -> R,
    {
        let value = self.get();
        f(&value)
    }
}

impl<Derived> Selection<Derived> {
    /// Tear the consumer down, removing its store listener.
    pub fn unmount(self) {
        drop(self);
    }
}

impl<Derived> Drop for Selection<Derived> {
    fn drop(&mut self) {
        self.unsubscribe.unsubscribe();
    }
}

/// Select a slice of state, re-rendering on every dispatch.
///
/// Without an equality function every notification counts as a change, so
/// `renderer` runs after each dispatch even when the derived value is the
/// same. Use [`use_selector_with`] or [`use_selector_eq`] to gate renders.
///
/// # Errors
///
/// [`Error::MissingProvider`] when `context` has no enclosing provider.
///
/// # Example
///
/// ```rust
/// use oxide_store::{use_selector, Context, Store};
///
/// let store = Store::new(|n: &i32, delta: i32| Some(n + delta), 1);
/// let context = Context::provider(store.clone());
///
/// let counter = use_selector(&context, |n: &i32| *n, |n: i32| println!("{}", n))?;
/// store.dispatch(3);
/// assert_eq!(counter.get(), 4);
/// # Ok::<(), oxide_store::Error>(())
/// ```
pub fn use_selector<State, Action, Derived, S, R>(
    context: &Context<State, Action>,
    selector: S,
    renderer: R,
) -> Result<Selection<Derived>, Error>
where
    State: Send + Sync + 'static,
    Action: 'static,
    Derived: Clone + Send + 'static,
    S: Fn(&State) -> Derived + Send + Sync + 'static,
    R: Renderer<Derived> + Send + 'static,
{
    mount(context, selector, None, renderer)
}

/// Select a slice of state, re-rendering only when `equality` reports a change.
///
/// `equality` is called as `(current, previous)`; returning `true` skips the
/// render.
///
/// # Errors
///
/// [`Error::MissingProvider`] when `context` has no enclosing provider.
pub fn use_selector_with<State, Action, Derived, S, E, R>(
    context: &Context<State, Action>,
    selector: S,
    equality: E,
    renderer: R,
) -> Result<Selection<Derived>, Error>
where
    State: Send + Sync + 'static,
    Action: 'static,
    Derived: Clone + Send + 'static,
    S: Fn(&State) -> Derived + Send + Sync + 'static,
    E: Fn(&Derived, &Derived) -> bool + Send + Sync + 'static,
    R: Renderer<Derived> + Send + 'static,
{
    mount(context, selector, Some(Box::new(equality)), renderer)
}

/// [`use_selector_with`] using `PartialEq` as the equality function.
///
/// # Errors
///
/// [`Error::MissingProvider`] when `context` has no enclosing provider.
pub fn use_selector_eq<State, Action, Derived, S, R>(
    context: &Context<State, Action>,
    selector: S,
    renderer: R,
) -> Result<Selection<Derived>, Error>
where
    State: Send + Sync + 'static,
    Action: 'static,
    Derived: Clone + PartialEq + Send + 'static,
    S: Fn(&State) -> Derived + Send + Sync + 'static,
    R: Renderer<Derived> + Send + 'static,
{
    use_selector_with(
        context,
        selector,
        |current: &Derived, previous: &Derived| current == previous,
        renderer,
    )
}

fn mount<State, Action, Derived, S, R>(
    context: &Context<State, Action>,
    selector: S,
    equality: Option<Equality<Derived>>,
    renderer: R,
) -> Result<Selection<Derived>, Error>
where
    State: Send + Sync + 'static,
    Action: 'static,
    Derived: Clone + Send + 'static,
    S: Fn(&State) -> Derived + Send + Sync + 'static,
    R: Renderer<Derived> + Send + 'static,
{
    let store = context.store()?.clone();

    let (revision, initial) = store.snapshot();
    let shared = Arc::new(SelectionShared {
        state: Mutex::new(SelectionState {
            value: selector(&*initial),
            revision,
            rendering: false,
            pending: false,
        }),
        renderer: Mutex::new(Box::new(renderer)),
    });

    let unsubscribe = {
        let shared = shared.clone();
        let source = store.clone();
        store.subscribe(move || {
            let (revision, state) = source.snapshot();
            let current = selector(&*state);
            shared.update(revision, current, equality.as_ref());
        })
    };
    debug!("selection mounted ({} listener(s) on store)", store.listener_count());

    Ok(Selection {
        shared,
        unsubscribe,
    })
}
