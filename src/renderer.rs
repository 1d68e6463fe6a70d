//! Renderer abstraction for re-rendering consumers of a selection.

#[cfg(any(test, feature = "testing"))]
#[cfg(feature = "no_std")]
use alloc::vec::Vec;

#[cfg(any(test, feature = "testing"))]
use portable_atomic_util::Arc;
#[cfg(any(test, feature = "testing"))]
use spin::Mutex;

/// Re-render trigger for one consumer.
///
/// Implement this trait to connect a [`Selection`](crate::Selection) to your
/// rendering system (UI framework, terminal, embedded display, etc.). The
/// selection calls [`render`](Self::render) only when its derived value
/// changed, passing the new value.
///
/// Closures taking the derived value implement this trait directly.
///
/// # Example
///
/// ```rust
/// use oxide_store::Renderer;
///
/// struct StepLabel;
///
/// impl Renderer<i32> for StepLabel {
///     fn render(&mut self, step_size: i32) {
///         println!("Current step size: {}", step_size);
///     }
/// }
/// ```
pub trait Renderer<Derived> {
    /// Re-render the consumer with a freshly selected value.
    ///
    /// # Arguments
    ///
    /// * `derived` - The value the consumer's selector produced
    fn render(&mut self, derived: Derived);
}

impl<Derived, F> Renderer<Derived> for F
where
    F: FnMut(Derived),
{
    fn render(&mut self, derived: Derived) {
        self(derived)
    }
}

#[cfg(any(test, feature = "testing"))]
/// Test renderer that captures every value it is asked to render.
///
/// Only available with the `testing` feature.
///
/// Clones share the same capture storage, so pass a clone to
/// [`use_selector`](crate::use_selector) and keep the original for assertions.
///
/// # Example
///
/// ```rust
/// use oxide_store::{use_selector_eq, Context, Store, TestRenderer};
///
/// let store = Store::new(|n: &i32, delta: i32| Some(n + delta), 1);
/// let context = Context::provider(store.clone());
///
/// let renderer = TestRenderer::<i32>::new();
/// let selection = use_selector_eq(&context, |n: &i32| n % 2, renderer.clone()).unwrap();
///
/// store.dispatch(2); // 3 % 2 == 1, unchanged
/// store.dispatch(1); // 4 % 2 == 0, changed
///
/// assert_eq!(selection.get(), 0);
/// renderer.with_renders(|renders| assert_eq!(renders, &vec![0]));
/// ```
pub struct TestRenderer<Derived> {
    renders: Arc<Mutex<Vec<Derived>>>,
}

#[cfg(any(test, feature = "testing"))]
impl<Derived> Clone for TestRenderer<Derived> {
    fn clone(&self) -> Self {
        Self {
            renders: self.renders.clone(),
        }
    }
}

#[cfg(any(test, feature = "testing"))]
impl<Derived> Renderer<Derived> for TestRenderer<Derived> {
    fn render(&mut self, derived: Derived) {
        self.renders.lock().push(derived);
    }
}

#[cfg(any(test, feature = "testing"))]
impl<Derived> Default for TestRenderer<Derived> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(any(test, feature = "testing"))]
impl<Derived> TestRenderer<Derived> {
    pub fn new() -> Self {
        Self {
            renders: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Get the number of renders that have occurred.
    pub fn count(&self) -> usize {
        self.renders.lock().len()
    }

    /// Access the captured renders with a closure.
    ///
    /// The closure receives every rendered value in the order it was rendered.
    pub fn with_renders<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&Vec<Derived>) -> R,
    {
        let renders = self.renders.lock();
        f(&renders)
    }
}
