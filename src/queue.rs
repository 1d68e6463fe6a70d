//! Host-side action queue that serializes dispatches onto one thread.

use flume::Receiver;
use log::{debug, trace};

use crate::{Emitter, Store};

/// Queue that applies emitted actions to a [`Store`] one at a time.
///
/// Actions can be emitted from any thread through the [`Emitter`] returned by
/// [`ActionQueue::new`]; they are dispatched in emission order on the thread
/// that drains the queue, either with
/// [`process_queued_actions`](Self::process_queued_actions) from an existing
/// event loop or by awaiting [`run`](Self::run).
///
/// Since every dispatch goes through the draining thread, listeners and
/// renderers run there too.
pub struct ActionQueue<State, Action>
where
    Action: Send,
{
    store: Store<State, Action>,
    receiver: Receiver<Action>,
}

impl<State, Action> ActionQueue<State, Action>
where
    State: Send + Sync + 'static,
    Action: Send + 'static,
{
    /// Create a queue feeding `store`, together with its first emitter.
    ///
    /// Clone the emitter to hand it to more producers. [`run`](Self::run)
    /// completes once every emitter has been dropped.
    pub fn new(store: Store<State, Action>) -> (Self, Emitter<Action>) {
        let (action_sender, action_receiver) = flume::unbounded();

        let queue = ActionQueue {
            store,
            receiver: action_receiver,
        };
        (queue, Emitter::new(action_sender))
    }

    /// Dispatch every action queued so far.
    ///
    /// Returns the number of actions applied.
    pub fn process_queued_actions(&mut self) -> usize {
        let mut applied = 0;
        while let Ok(action) = self.receiver.try_recv() {
            self.store.dispatch(action);
            applied += 1;
        }
        trace!("processed {} queued action(s)", applied);
        applied
    }

    /// Dispatch actions as they arrive until every emitter is dropped.
    ///
    /// Actions are always applied sequentially on the thread where this
    /// future is polled.
    pub async fn run(&mut self) {
        while let Ok(action) = self.receiver.recv_async().await {
            self.store.dispatch(action);
        }
        debug!("all emitters dropped, action queue stopped");
    }

    #[cfg(any(test, feature = "testing"))]
    /// Drive [`run`](Self::run) to completion on the current thread.
    ///
    /// Only available with the `testing` feature or during tests.
    pub fn run_blocking(&mut self) {
        futures::executor::block_on(self.run());
    }
}
