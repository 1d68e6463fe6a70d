//! Counter with an adjustable step size, driven from the terminal.
//!
//! Type `+`, `-` or a step size between 1 and 5, one per line. Set
//! `RUST_LOG`-style verbosity with the `OXIDE_STORE_LOG` variable
//! (`error`, `warn`, `info`, `debug`, `trace`).

use std::io::{self, BufRead, Write};

use oxide_store::{
    use_dispatch, use_selector, use_selector_eq, Context, Dispatch, Error, Selection, Store,
};
use simplelog::{ColorChoice, ConfigBuilder, LevelFilter, TermLogger, TerminalMode};

#[derive(Clone, Debug)]
struct CounterState {
    counter: i32,
    step_size: i32,
}

#[derive(Debug)]
enum CounterAction {
    UpdateCounter(i32),
    ChangeStepSize(i32),
}

fn reducer(state: &CounterState, action: CounterAction) -> Option<CounterState> {
    match action {
        CounterAction::UpdateCounter(delta) => Some(CounterState {
            counter: state.counter.saturating_add(delta),
            ..state.clone()
        }),
        CounterAction::ChangeStepSize(step_size) if step_size == state.step_size => None,
        CounterAction::ChangeStepSize(step_size) => Some(CounterState {
            step_size,
            ..state.clone()
        }),
    }
}

struct Counter {
    step_size: Selection<i32>,
    _counter: Selection<i32>,
    dispatch: Dispatch<CounterState, CounterAction>,
}

impl Counter {
    fn mount(context: &Context<CounterState, CounterAction>) -> Result<Self, Error> {
        let counter = use_selector(context, |state: &CounterState| state.counter, |counter: i32| {
            println!("[ - ] {} [ + ]", counter)
        })?;
        println!("[ - ] {} [ + ]", counter.get());

        Ok(Counter {
            step_size: use_selector_eq(context, |state: &CounterState| state.step_size, |_: i32| {})?,
            _counter: counter,
            dispatch: use_dispatch(context)?,
        })
    }

    fn on_minus(&self) {
        self.dispatch
            .dispatch(CounterAction::UpdateCounter(-self.step_size.get()));
    }

    fn on_plus(&self) {
        self.dispatch
            .dispatch(CounterAction::UpdateCounter(self.step_size.get()));
    }
}

struct Step {
    _step_size: Selection<i32>,
    dispatch: Dispatch<CounterState, CounterAction>,
}

impl Step {
    fn mount(context: &Context<CounterState, CounterAction>) -> Result<Self, Error> {
        let step_size =
            use_selector_eq(context, |state: &CounterState| state.step_size, |step: i32| {
                println!("Current step size: {}", step)
            })?;
        println!("Current step size: {}", step_size.get());

        Ok(Step {
            _step_size: step_size,
            dispatch: use_dispatch(context)?,
        })
    }

    fn on_change(&self, step_size: i32) {
        self.dispatch.dispatch(CounterAction::ChangeStepSize(step_size));
    }
}

fn init_logging() {
    let level = match std::env::var("OXIDE_STORE_LOG").as_deref() {
        Ok("error") => LevelFilter::Error,
        Ok("info") => LevelFilter::Info,
        Ok("debug") => LevelFilter::Debug,
        Ok("trace") => LevelFilter::Trace,
        _ => LevelFilter::Warn,
    };
    let config = ConfigBuilder::new().set_time_format_rfc3339().build();
    let _ = TermLogger::init(level, config, TerminalMode::Stderr, ColorChoice::Auto);
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logging();

    let store = Store::new(
        reducer,
        CounterState {
            counter: 1,
            step_size: 1,
        },
    );
    let app = Context::provider(store);

    let step = Step::mount(&app.child())?;
    let counter = Counter::mount(&app.child())?;

    print!("> ");
    io::stdout().flush()?;
    for line in io::stdin().lock().lines() {
        match line?.trim() {
            "+" => counter.on_plus(),
            "-" => counter.on_minus(),
            "q" | "quit" => break,
            input => match input.parse::<i32>() {
                Ok(step_size @ 1..=5) => step.on_change(step_size),
                _ => log::warn!("ignoring input {:?}", input),
            },
        }
        print!("> ");
        io::stdout().flush()?;
    }

    Ok(())
}
