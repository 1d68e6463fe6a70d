//! Action emitter for producing actions from any thread.

use flume::Sender;
use log::debug;

/// Cross-thread producer of actions for an [`ActionQueue`](crate::ActionQueue).
///
/// `Emitter` wraps a channel sender, making it cheap to clone and safe to
/// move to other threads. Emitted actions are applied to the store later,
/// in emission order, by whichever thread drains the queue.
///
/// # Example
///
/// ```rust
/// use oxide_store::{ActionQueue, Store};
///
/// let store = Store::new(|n: &i32, delta: i32| Some(n + delta), 0);
/// let (mut queue, emitter) = ActionQueue::new(store.clone());
///
/// let worker = std::thread::spawn({
///     let emitter = emitter.clone();
///     move || emitter.emit(5)
/// });
/// worker.join().unwrap();
///
/// queue.process_queued_actions();
/// assert_eq!(*store.get_state(), 5);
/// ```
pub struct Emitter<Action: Send>(pub(crate) Sender<Action>);

impl<Action: Send> Clone for Emitter<Action> {
    fn clone(&self) -> Self {
        Self(self.0.clone())
    }
}

impl<Action: Send> Emitter<Action> {
    /// Create a new emitter from a channel sender.
    pub(crate) fn new(sender: Sender<Action>) -> Self {
        Self(sender)
    }

    /// Emit an action.
    ///
    /// This queues the action for the queue's draining thread and returns
    /// `true`. Once the [`ActionQueue`](crate::ActionQueue) has been dropped
    /// nothing can apply the action any more; it is discarded and `false` is
    /// returned.
    pub fn emit(&self, action: Action) -> bool {
        match self.0.send(action) {
            Ok(()) => true,
            Err(_) => {
                debug!("action queue dropped, discarding emitted action");
                false
            }
        }
    }

    /// Whether the receiving queue still exists.
    pub fn is_connected(&self) -> bool {
        !self.0.is_disconnected()
    }
}
