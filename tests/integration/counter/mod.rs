use oxide_store::{
    use_dispatch, use_selector, use_selector_eq, Context, Dispatch, Error, Renderer, Selection,
    Store,
};

#[derive(Clone, Debug, PartialEq)]
pub(crate) struct CounterState {
    pub(crate) counter: i32,
    pub(crate) step_size: i32,
}

#[derive(Clone, Debug, PartialEq)]
pub(crate) enum CounterAction {
    UpdateCounter(i32),
    ChangeStepSize(i32),
    Unrecognized,
}

pub(crate) fn counter_reducer(state: &CounterState, action: CounterAction) -> Option<CounterState> {
    match action {
        CounterAction::UpdateCounter(delta) => Some(CounterState {
            counter: state.counter.saturating_add(delta),
            ..state.clone()
        }),
        CounterAction::ChangeStepSize(step_size) => Some(CounterState {
            step_size,
            ..state.clone()
        }),
        CounterAction::Unrecognized => None,
    }
}

pub(crate) fn counter_store() -> Store<CounterState, CounterAction> {
    Store::new(
        counter_reducer,
        CounterState {
            counter: 1,
            step_size: 1,
        },
    )
}

#[cfg_attr(test, mockall::automock)]
pub(crate) trait RenderProbe {
    fn on_render(&self, value: i32);
}

/// Forwards every render of a selection to a [`RenderProbe`].
pub(crate) struct ProbeRenderer(pub(crate) Box<dyn RenderProbe + Send>);

impl Renderer<i32> for ProbeRenderer {
    fn render(&mut self, value: i32) {
        self.0.on_render(value);
    }
}

/// The "-" / "+" widget: reads the counter and the step size, dispatches updates.
pub(crate) struct CounterWidget {
    pub(crate) counter: Selection<i32>,
    pub(crate) step_size: Selection<i32>,
    dispatch: Dispatch<CounterState, CounterAction>,
}

impl CounterWidget {
    pub(crate) fn mount(
        context: &Context<CounterState, CounterAction>,
        renderer: impl Renderer<i32> + Send + 'static,
    ) -> Result<Self, Error> {
        Ok(CounterWidget {
            counter: use_selector(context, |state: &CounterState| state.counter, renderer)?,
            step_size: use_selector_eq(context, |state: &CounterState| state.step_size, |_: i32| {})?,
            dispatch: use_dispatch(context)?,
        })
    }

    pub(crate) fn increment(&self) {
        self.dispatch
            .dispatch(CounterAction::UpdateCounter(self.step_size.get()));
    }

    pub(crate) fn decrement(&self) {
        self.dispatch
            .dispatch(CounterAction::UpdateCounter(-self.step_size.get()));
    }
}

/// The step slider: reads the step size, dispatches step changes.
pub(crate) struct StepWidget {
    pub(crate) step_size: Selection<i32>,
    dispatch: Dispatch<CounterState, CounterAction>,
}

impl StepWidget {
    pub(crate) fn mount(
        context: &Context<CounterState, CounterAction>,
        renderer: impl Renderer<i32> + Send + 'static,
    ) -> Result<Self, Error> {
        Ok(StepWidget {
            step_size: use_selector_eq(context, |state: &CounterState| state.step_size, renderer)?,
            dispatch: use_dispatch(context)?,
        })
    }

    pub(crate) fn slide_to(&self, step_size: i32) {
        self.dispatch.dispatch(CounterAction::ChangeStepSize(step_size));
    }
}
