mod counter;

use oxide_store::{Context, Store, TestRenderer};
pub(crate) use counter::*;

mod action_queue_tests;
mod concurrent_dispatch_tests;

pub(crate) struct IntegrationTest {
    pub(crate) store: Store<CounterState, CounterAction>,
    pub(crate) context: Context<CounterState, CounterAction>,
}

// Starts every scenario from { counter: 1, step_size: 1 } behind a provider.
pub(crate) fn given_a_provided_counter_store() -> IntegrationTest {
    let store = counter_store();
    let context = Context::provider(store.clone());

    IntegrationTest { store, context }
}

pub(crate) fn given_counter_and_step_widgets(
    test: &IntegrationTest,
) -> (CounterWidget, TestRenderer<i32>, StepWidget, TestRenderer<i32>) {
    let counter_renders = TestRenderer::<i32>::new();
    let step_renders = TestRenderer::<i32>::new();

    // Both widgets sit a few scopes below the provider.
    let counter = CounterWidget::mount(&test.context.child(), counter_renders.clone())
        .expect("counter widget mounted under a provider");
    let step = StepWidget::mount(&test.context.child().child(), step_renders.clone())
        .expect("step widget mounted under a provider");

    (counter, counter_renders, step, step_renders)
}
