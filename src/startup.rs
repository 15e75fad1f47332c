//! Startup sequence: every step is fatal. Either all present lines are
//! calibrated and armed, or nothing runs.

use core::future::pending;

use embassy_futures::join::join4;

use crate::config::MouseConfig;
use crate::dispatch::{Dispatcher, Indicator, ReportSink};
use crate::doorbell::Doorbell;
use crate::error::StartupError;
use crate::fmt::{debug, error, info};
use crate::line::{
    ButtonHandler, EdgeHandler, EdgeInput, LineId, LineMonitor, LineSpec, MoveHandler,
};
use crate::power::PowerLink;
use crate::state::AggregateState;

/// Storage shared between the line handlers and the dispatcher. Meant to live
/// in a `static_cell::StaticCell` on target.
pub struct MouseCore {
    state: AggregateState,
    doorbell: Doorbell,
}

impl MouseCore {
    pub const fn new() -> Self {
        Self {
            state: AggregateState::new(),
            doorbell: Doorbell::new(),
        }
    }
}

impl Default for MouseCore {
    fn default() -> Self {
        Self::new()
    }
}

/// The four input lines. An absent line is skipped.
pub struct LineSet<I> {
    pub left: Option<I>,
    pub right: Option<I>,
    pub x: Option<I>,
    pub y: Option<I>,
}

impl<I> LineSet<I> {
    pub fn new(left: I, right: I, x: I, y: I) -> Self {
        Self {
            left: Some(left),
            right: Some(right),
            x: Some(x),
            y: Some(y),
        }
    }
}

pub struct Monitors<'a, I> {
    pub left: Option<LineMonitor<I, ButtonHandler<'a>>>,
    pub right: Option<LineMonitor<I, ButtonHandler<'a>>>,
    pub x: Option<LineMonitor<I, MoveHandler<'a>>>,
    pub y: Option<LineMonitor<I, MoveHandler<'a>>>,
}

impl<I: EdgeInput> Monitors<'_, I> {
    /// Services every present line forever.
    pub async fn run(&mut self) -> ! {
        join4(
            run_line(self.left.as_mut()),
            run_line(self.right.as_mut()),
            run_line(self.x.as_mut()),
            run_line(self.y.as_mut()),
        )
        .await;
        unreachable!()
    }
}

async fn run_line<I: EdgeInput, H: EdgeHandler>(monitor: Option<&mut LineMonitor<I, H>>) {
    match monitor {
        Some(monitor) => monitor.run().await,
        None => pending().await,
    }
}

fn attach<I: EdgeInput, H: EdgeHandler>(
    id: LineId,
    input: Option<I>,
    handler: H,
) -> Result<Option<LineMonitor<I, H>>, StartupError<I::Error>> {
    let Some(input) = input else {
        debug!("{} line not present, skipping", id);
        return Ok(None);
    };

    let monitor = LineSpec::calibrate(id, input)
        .and_then(|spec| spec.register(handler))
        .map_err(|e| {
            error!("Failed configuring {} line", id);
            StartupError::Line { line: id, error: e }
        })?;
    Ok(Some(monitor))
}

/// Checks the indicator, then calibrates and arms left, right, X and Y in that
/// order. Returns the line monitors and the dispatcher wired to them.
pub fn bring_up<'a, I, S, L>(
    core: &'a mut MouseCore,
    power: &'a PowerLink,
    config: &MouseConfig,
    lines: LineSet<I>,
    sink: S,
    indicator: L,
) -> Result<(Monitors<'a, I>, Dispatcher<'a, S, L>), StartupError<I::Error>>
where
    I: EdgeInput,
    S: ReportSink,
    L: Indicator,
{
    if !indicator.is_ready() {
        error!("Indicator device is not ready");
        return Err(StartupError::IndicatorNotReady);
    }

    let MouseCore { state, doorbell } = core;
    let doorbell = &*doorbell;
    let parts = state.split();

    let left = ButtonHandler::new(parts.left, doorbell, power, config.remote_wakeup);
    let right = ButtonHandler::new(parts.right, doorbell, power, config.remote_wakeup);
    let x = MoveHandler::new(parts.x, doorbell, config.move_step);
    let y = MoveHandler::new(parts.y, doorbell, config.move_step);

    let monitors = Monitors {
        left: attach(LineId::Left, lines.left, left)?,
        right: attach(LineId::Right, lines.right, right)?,
        x: attach(LineId::X, lines.x, x)?,
        y: attach(LineId::Y, lines.y, y)?,
    };
    info!("Input lines armed");

    let dispatcher = Dispatcher::new(parts.reader, doorbell, sink, indicator);
    Ok((monitors, dispatcher))
}
