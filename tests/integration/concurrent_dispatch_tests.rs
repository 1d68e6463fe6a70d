use std::thread;

use oxide_store::{use_selector, use_selector_eq, TestRenderer};

use super::{given_a_provided_counter_store, CounterAction, CounterState};

#[test]
fn given_threads_dispatching_on_a_shared_store_should_apply_every_action() {
    let test = given_a_provided_counter_store();
    let workers: Vec<_> = (0..4)
        .map(|_| {
            let store = test.store.clone();
            thread::spawn(move || {
                for _ in 0..250 {
                    store.dispatch(CounterAction::UpdateCounter(1));
                }
            })
        })
        .collect();
    for worker in workers {
        worker.join().unwrap();
    }

    assert_eq!(test.store.get_state().counter, 1001);
}

#[test]
fn given_threads_dispatching_on_a_shared_store_should_leave_selections_on_the_latest_state() {
    let test = given_a_provided_counter_store();
    let counter_renders = TestRenderer::<i32>::new();
    let counter = use_selector(
        &test.context,
        |state: &CounterState| state.counter,
        counter_renders.clone(),
    )
    .unwrap();
    let step_size =
        use_selector_eq(&test.context, |state: &CounterState| state.step_size, |_: i32| {})
            .unwrap();

    let workers: Vec<_> = (0..4)
        .map(|worker| {
            let store = test.store.clone();
            thread::spawn(move || {
                for round in 0..100 {
                    store.dispatch(CounterAction::UpdateCounter(1));
                    store.dispatch(CounterAction::ChangeStepSize(worker * 100 + round + 1));
                }
            })
        })
        .collect();
    for worker in workers {
        worker.join().unwrap();
    }

    let state = test.store.get_state();
    assert_eq!(state.counter, 401);
    assert_eq!(counter.get(), state.counter);
    assert_eq!(step_size.get(), state.step_size);
    assert!(counter_renders.with_renders(|renders| renders.contains(&401)));
}
