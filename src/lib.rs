#![cfg_attr(feature = "no_std", no_std)]

//! A single-store state container with selector subscriptions and `no_std` support.
//!
//! One [`Store`] owns the application state and reduces typed actions through
//! a pure [`Reducer`]. Consumers reach the store through an explicit
//! [`Context`] and either read a slice of state with [`use_selector`] or
//! write with [`use_dispatch`]. Each [`Selection`] re-runs its selector after
//! every dispatch and asks its [`Renderer`] to re-render only when the
//! selected value changed.
//!
//! ## Example
//!
//! ```rust
//! use oxide_store::{use_dispatch, use_selector, use_selector_eq, Context, Store};
//!
//! #[derive(Clone)]
//! struct State { counter: i32, step_size: i32 }
//!
//! enum Action { UpdateCounter(i32), ChangeStepSize(i32) }
//!
//! fn reducer(state: &State, action: Action) -> Option<State> {
//!     match action {
//!         Action::UpdateCounter(delta) => Some(State {
//!             counter: state.counter + delta,
//!             ..state.clone()
//!         }),
//!         Action::ChangeStepSize(step_size) => Some(State {
//!             step_size,
//!             ..state.clone()
//!         }),
//!     }
//! }
//!
//! let store = Store::new(reducer, State { counter: 1, step_size: 1 });
//! let context = Context::provider(store);
//!
//! // A consumer showing the counter, re-rendered after every dispatch.
//! let counter = use_selector(&context, |s: &State| s.counter, |c: i32| println!("counter {}", c))?;
//!
//! // A consumer showing the step size, re-rendered only when it changes.
//! let step_size = use_selector_eq(&context, |s: &State| s.step_size, |s: i32| println!("step {}", s))?;
//!
//! let dispatch = use_dispatch(&context)?;
//! dispatch.dispatch(Action::ChangeStepSize(3));
//! dispatch.dispatch(Action::UpdateCounter(step_size.get()));
//!
//! assert_eq!(counter.get(), 4);
//! # Ok::<(), oxide_store::Error>(())
//! ```

#[cfg(feature = "no_std")]
extern crate alloc;

// Module declarations
mod context;
mod dispatch;
mod emitter;
mod error;
mod queue;
mod reducer;
mod renderer;
mod selector;
mod store;

// Public re-exports
pub use context::Context;
pub use dispatch::{use_dispatch, Dispatch};
pub use emitter::Emitter;
pub use error::Error;
pub use queue::ActionQueue;
pub use reducer::Reducer;
pub use renderer::Renderer;
pub use selector::{use_selector, use_selector_eq, use_selector_with, Selection};
pub use store::{Store, Unsubscribe};

// Test utilities (only available with 'testing' feature or during tests)
#[cfg(any(test, feature = "testing"))]
pub use renderer::TestRenderer;
