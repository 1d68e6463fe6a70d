//! Dispatch accessor handed to consumers.

use crate::{Context, Error, Store};

/// Handle that dispatches actions into the store of a [`Context`].
///
/// Obtain one with [`use_dispatch`]. Cloning is cheap; every clone targets
/// the same store.
///
/// # Example
///
/// ```rust
/// use oxide_store::{use_dispatch, Context, Store};
///
/// enum Action { ChangeStepSize(i32) }
///
/// let store = Store::new(
///     |_: &i32, action: Action| match action {
///         Action::ChangeStepSize(step) => Some(step),
///     },
///     1,
/// );
/// let context = Context::provider(store.clone());
///
/// let dispatch = use_dispatch(&context)?;
/// let on_change = move |value: i32| dispatch.dispatch(Action::ChangeStepSize(value));
///
/// on_change(4);
/// assert_eq!(*store.get_state(), 4);
/// # Ok::<(), oxide_store::Error>(())
/// ```
pub struct Dispatch<State, Action>(Store<State, Action>);

impl<State, Action> Clone for Dispatch<State, Action> {
    fn clone(&self) -> Self {
        Self(self.0.clone())
    }
}

impl<State, Action> Dispatch<State, Action>
where
    State: Send + Sync + 'static,
    Action: 'static,
{
    /// Dispatch an action; see [`Store::dispatch`].
    pub fn dispatch(&self, action: Action) {
        self.0.dispatch(action);
    }
}

/// Get the dispatch function of the nearest store.
///
/// # Errors
///
/// [`Error::MissingProvider`] when `context` has no enclosing provider.
pub fn use_dispatch<State, Action>(
    context: &Context<State, Action>,
) -> Result<Dispatch<State, Action>, Error> {
    context.store().map(|store| Dispatch(store.clone()))
}
