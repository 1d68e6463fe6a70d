//! Binding context that makes a store reachable from nested consumers.

use log::debug;

use crate::{Error, Store};

/// A scope in the consumer tree through which a [`Store`] is reached.
///
/// A context is passed down explicitly instead of living in a global:
/// - [`Context::provider`] starts a scope exposing a store
/// - [`child`](Self::child) hands a descendant the nearest store
/// - [`provide`](Self::provide) overrides the store for a subtree
///
/// Consumers resolve the store with [`store`](Self::store), or through
/// [`use_selector`](crate::use_selector) and [`use_dispatch`](crate::use_dispatch).
/// Resolving inside a scope with no provider fails with
/// [`Error::MissingProvider`].
///
/// # Example
///
/// ```rust
/// use oxide_store::{Context, Error, Store};
///
/// let store = Store::new(|n: &i32, delta: i32| Some(n + delta), 0);
///
/// let app = Context::provider(store);
/// let nested = app.child().child();
/// assert!(nested.store().is_ok());
///
/// let detached: Context<i32, i32> = Context::root();
/// assert_eq!(detached.store().err(), Some(Error::MissingProvider));
/// ```
pub struct Context<State, Action> {
    store: Option<Store<State, Action>>,
}

impl<State, Action> Clone for Context<State, Action> {
    fn clone(&self) -> Self {
        Self {
            store: self.store.clone(),
        }
    }
}

impl<State, Action> Default for Context<State, Action> {
    fn default() -> Self {
        Self::root()
    }
}

impl<State, Action> Context<State, Action> {
    /// A scope outside of any provider.
    pub fn root() -> Self {
        Self { store: None }
    }

    /// A scope exposing `store` to every descendant.
    pub fn provider(store: Store<State, Action>) -> Self {
        Self { store: Some(store) }
    }

    /// A descendant scope exposing `store` instead of the enclosing one.
    pub fn provide(&self, store: Store<State, Action>) -> Self {
        Self::provider(store)
    }

    /// A descendant scope that sees the nearest enclosing store.
    pub fn child(&self) -> Self {
        self.clone()
    }

    /// Resolve the nearest enclosing store.
    pub fn store(&self) -> Result<&Store<State, Action>, Error> {
        self.store.as_ref().ok_or_else(|| {
            debug!("store requested from a context without a provider");
            Error::MissingProvider
        })
    }
}
