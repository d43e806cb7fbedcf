//! Reactor tests on the headless backend.

use std::cell::Cell;
use std::io;
use std::rc::Rc;

use toys_core::{Event, PointEvent, RunState, ToyError, Vec3};
use toys_render::TextGrid;
use toys_runtime::{
    GridSurface, Reactor, ReactorConfig, Repaint, RunError, ScriptedEvents, Surface,
};
use toys_widgets::flat::{bind, lr, on_click, rc};
use toys_widgets::{Rect, Toy};
use tracing_subscriber::EnvFilter;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_env_filter(EnvFilter::new("toys_runtime=trace"))
        .try_init();
}

/// Left half exits with code 3, right half toggles a flag that picks the
/// right half's color.
fn toggle_and_exit(state: &RunState) -> impl Toy<TextGrid> + 'static {
    let exit = state.exit_handle();
    let flag = Rc::new(Cell::new(false));
    let read = Rc::clone(&flag);
    lr(
        2,
        on_click(move |_: &mut PointEvent| exit.exit(3), rc('x')),
        on_click(
            move |_: &mut PointEvent| flag.set(!flag.get()),
            bind(move || Rect::new(if read.get() { 'o' } else { '-' })),
        ),
    )
}

#[test]
fn runs_until_exit_and_returns_code() {
    init_tracing();
    let state = RunState::new();
    let root = toggle_and_exit(&state);
    let events = ScriptedEvents::new([
        Event::click(3, 0),
        Event::motion(1, 0),
        Event::click(0, 0),
        Event::click(3, 0),
    ]);
    let mut reactor = Reactor::new(GridSurface::new(Vec3::xy(4, 1)), events, root, state);

    assert_eq!(reactor.run().unwrap(), 3);
    assert_eq!(reactor.handled(), 3);
    assert_eq!(reactor.surface().frames(), ["xx--", "xxoo", "xxoo", "xxoo"]);
    assert!(reactor.state().exiting());

    let (_, events, _) = reactor.into_parts();
    assert_eq!(events.remaining(), 1);
}

#[test]
fn repaint_always_paints_after_every_event() {
    let state = RunState::new();
    let root = toggle_and_exit(&state);
    let events = ScriptedEvents::new([Event::motion(0, 0), Event::click(9, 9), Event::click(0, 0)]);
    let config = ReactorConfig::default().with_repaint(Repaint::Always);
    let mut reactor =
        Reactor::with_config(GridSurface::new(Vec3::xy(4, 1)), events, root, state, config);

    assert_eq!(reactor.run().unwrap(), 3);
    assert_eq!(reactor.frames(), 4);
}

#[test]
fn skips_initial_paint_when_configured() {
    let state = RunState::new();
    let root = toggle_and_exit(&state);
    let config = ReactorConfig::default().without_initial_paint();
    let mut reactor = Reactor::with_config(
        GridSurface::new(Vec3::xy(4, 1)),
        ScriptedEvents::new([Event::click(0, 0)]),
        root,
        state,
        config,
    );

    assert_eq!(reactor.run().unwrap(), 3);
    assert_eq!(reactor.surface().frames(), ["xx--"]);
}

#[test]
fn closed_source_is_an_error() {
    let state = RunState::new();
    let root = toggle_and_exit(&state);
    let mut reactor = Reactor::new(
        GridSurface::new(Vec3::xy(4, 1)),
        ScriptedEvents::new([Event::click(3, 0)]),
        root,
        state,
    );

    assert!(matches!(reactor.run(), Err(RunError::SourceClosed)));
    assert!(!reactor.state().exiting());
}

#[test]
fn event_budget_stops_the_loop() {
    let state = RunState::new();
    let root = toggle_and_exit(&state);
    let events = ScriptedEvents::new(std::iter::repeat_n(Event::click(3, 0), 10));
    let config = ReactorConfig::default().with_max_events(4);
    let mut reactor =
        Reactor::with_config(GridSurface::new(Vec3::xy(4, 1)), events, root, state, config);

    assert!(matches!(
        reactor.run(),
        Err(RunError::EventBudgetExhausted { limit: 4 })
    ));
    assert_eq!(reactor.handled(), 4);
}

#[test]
fn handler_failure_stops_the_loop() {
    let state = RunState::new();
    let root = on_click(
        |_: &mut PointEvent| Err::<(), _>(ToyError::handler("rejected")),
        rc('#'),
    );
    let mut reactor = Reactor::new(
        GridSurface::new(Vec3::xy(2, 2)),
        ScriptedEvents::new([Event::click(1, 1)]),
        root,
        state,
    );

    match reactor.run() {
        Err(RunError::Toy(err)) => assert_eq!(err, ToyError::handler("rejected")),
        other => panic!("unexpected outcome: {other:?}"),
    }
}

#[test]
fn run_resets_state_between_runs() {
    let state = RunState::new();
    let root = toggle_and_exit(&state);
    let mut reactor = Reactor::new(
        GridSurface::new(Vec3::xy(4, 1)),
        ScriptedEvents::new([Event::click(0, 0)]),
        root,
        state,
    );
    assert_eq!(reactor.run().unwrap(), 3);

    reactor.events_mut().push(Event::click(2, 0));
    reactor.events_mut().push(Event::click(1, 0));
    assert_eq!(reactor.run().unwrap(), 3);
    assert_eq!(reactor.handled(), 2);
    assert_eq!(reactor.surface().last_frame(), Some("xxoo"));
}

struct BrokenSurface(TextGrid);

impl Surface for BrokenSurface {
    type Canvas = TextGrid;
    type Error = io::Error;

    fn size(&self) -> Vec3 {
        self.0.size()
    }

    fn begin_frame(&mut self) -> &mut TextGrid {
        &mut self.0
    }

    fn present(&mut self) -> Result<(), io::Error> {
        Err(io::Error::other("display lost"))
    }
}

#[test]
fn present_failure_is_reported() {
    let state = RunState::new();
    let mut reactor = Reactor::new(
        BrokenSurface(TextGrid::new(Vec3::xy(1, 1))),
        ScriptedEvents::default(),
        rc('#'),
        state,
    );

    let err = reactor.run().unwrap_err();
    assert!(matches!(err, RunError::Present(_)));
    assert_eq!(err.to_string(), "presenting frame failed: display lost");
}
