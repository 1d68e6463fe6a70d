use oxide_store::ActionQueue;

use super::{given_a_provided_counter_store, given_counter_and_step_widgets, CounterAction};

#[test]
fn given_actions_emitted_from_other_threads_should_apply_them_on_the_draining_thread() {
    let test = given_a_provided_counter_store();
    let (counter, counter_renders, _step, _step_renders) = given_counter_and_step_widgets(&test);
    let (mut queue, emitter) = ActionQueue::new(test.store.clone());

    let producer = std::thread::spawn(move || {
        emitter.emit(CounterAction::ChangeStepSize(2));
        emitter.emit(CounterAction::UpdateCounter(2));
        emitter.emit(CounterAction::UpdateCounter(2));
    });
    producer.join().unwrap();

    // Nothing is applied until the queue is drained.
    assert_eq!(counter.counter.get(), 1);

    queue.run_blocking();

    assert_eq!(counter.counter.get(), 5);
    counter_renders.with_renders(|renders| assert_eq!(renders, &vec![1, 3, 5]));
}

#[test]
fn given_pending_actions_when_processing_should_report_how_many_were_applied() {
    let test = given_a_provided_counter_store();
    let (mut queue, emitter) = ActionQueue::new(test.store.clone());

    emitter.emit(CounterAction::UpdateCounter(1));
    emitter.emit(CounterAction::Unrecognized);

    assert_eq!(queue.process_queued_actions(), 2);
    assert_eq!(queue.process_queued_actions(), 0);
    assert_eq!(test.store.get_state().counter, 2);
}
