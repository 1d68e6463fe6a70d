//! Reducer trait defining how actions transform state.

/// Pure state transition applied by a [`Store`](crate::Store) on every dispatch.
///
/// A reducer receives the latest committed state and an action and returns
/// the next state. Returning `None` means the action did not change anything;
/// the store then keeps the exact same state handle, so consumers comparing
/// by pointer identity see no change.
///
/// Closures of the shape `Fn(&State, Action) -> Option<State>` implement this
/// trait through the blanket implementation below.
///
/// # Example
///
/// ```rust
/// use oxide_store::Reducer;
///
/// #[derive(Clone)]
/// struct State { count: i32 }
///
/// enum Action { Add(i32), Reset }
///
/// struct CountReducer;
///
/// impl Reducer<State, Action> for CountReducer {
///     fn reduce(&self, state: &State, action: Action) -> Option<State> {
///         match action {
///             Action::Add(0) => None,
///             Action::Add(n) => Some(State { count: state.count + n }),
///             Action::Reset => Some(State { count: 0 }),
///         }
///     }
/// }
///
/// assert_eq!(CountReducer.reduce(&State { count: 1 }, Action::Add(2)).map(|s| s.count), Some(3));
/// assert!(CountReducer.reduce(&State { count: 1 }, Action::Add(0)).is_none());
/// ```
pub trait Reducer<State, Action> {
    /// Reduce an action against the current state.
    ///
    /// # Arguments
    ///
    /// * `state` - The latest committed state
    /// * `action` - The action being dispatched
    ///
    /// # Returns
    ///
    /// `Some(next)` to commit a new state, or `None` to keep the current one.
    fn reduce(&self, state: &State, action: Action) -> Option<State>;
}

impl<State, Action, F> Reducer<State, Action> for F
where
    F: Fn(&State, Action) -> Option<State>,
{
    fn reduce(&self, state: &State, action: Action) -> Option<State> {
        self(state, action)
    }
}
