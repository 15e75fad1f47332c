//! Input lines: baseline calibration, edge registration, and the per-edge
//! handler that turns a level read into a state update.

use embedded_hal::digital::{ErrorType, InputPin};
use embedded_hal_async::digital::Wait;

use crate::doorbell::Doorbell;
use crate::error::LineError;
use crate::fmt::{Debug2Format, debug, error, trace};
use crate::power::PowerLink;
use crate::state::{AxisField, ButtonField};

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Level {
    Low,
    High,
}

impl From<bool> for Level {
    fn from(high: bool) -> Self {
        if high { Level::High } else { Level::Low }
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LineId {
    Left,
    Right,
    X,
    Y,
}

/// An input line that can be sampled and that reports both edges.
pub trait EdgeInput {
    type Error: core::fmt::Debug;

    fn is_ready(&self) -> bool {
        true
    }

    fn configure_input(&mut self) -> Result<(), Self::Error>;

    fn read_level(&mut self) -> Result<Level, Self::Error>;

    /// Arm edge detection for both rising and falling edges.
    fn enable_edge_interrupt(&mut self) -> Result<(), Self::Error>;

    /// Resolves on the next edge in either direction.
    async fn wait_for_edge(&mut self) -> Result<(), Self::Error>;
}

/// [`EdgeInput`] over an `embedded-hal` pin. The HAL has already configured
/// the pin as an input when it handed it out, and arms edge detection on every
/// wait, so the setup steps are no-ops.
pub struct HalInput<P>(pub P);

impl<P> EdgeInput for HalInput<P>
where
    P: InputPin + Wait,
{
    type Error = <P as ErrorType>::Error;

    fn configure_input(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }

    fn read_level(&mut self) -> Result<Level, Self::Error> {
        self.0.is_high().map(Level::from)
    }

    fn enable_edge_interrupt(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }

    async fn wait_for_edge(&mut self) -> Result<(), Self::Error> {
        self.0.wait_for_any_edge().await
    }
}

/// A configured input line together with the level it idles at.
pub struct LineSpec<I> {
    id: LineId,
    input: I,
    baseline: Level,
}

impl<I: EdgeInput> LineSpec<I> {
    /// Configures `input` and captures its current level as the baseline.
    /// The baseline never changes afterwards.
    pub fn calibrate(id: LineId, mut input: I) -> Result<Self, LineError<I::Error>> {
        if !input.is_ready() {
            error!("{} line: input device is not ready", id);
            return Err(LineError::NotReady);
        }

        if let Err(e) = input.configure_input() {
            error!("{} line: failed to configure input: {}", id, Debug2Format(&e));
            return Err(LineError::ConfigFailed(e));
        }

        let baseline = match input.read_level() {
            Ok(level) => level,
            Err(e) => {
                error!("{} line: failed to read baseline: {}", id, Debug2Format(&e));
                return Err(LineError::ReadFailed(e));
            }
        };
        debug!("{} line: baseline = {}", id, baseline);

        Ok(Self {
            id,
            input,
            baseline,
        })
    }

    /// Arms both-edge detection and binds `handler` to the line.
    pub fn register<H: EdgeHandler>(
        mut self,
        handler: H,
    ) -> Result<LineMonitor<I, H>, LineError<I::Error>> {
        if let Err(e) = self.input.enable_edge_interrupt() {
            error!(
                "{} line: failed to configure edge interrupt: {}",
                self.id,
                Debug2Format(&e)
            );
            return Err(LineError::InterruptRegistrationFailed(e));
        }
        Ok(LineMonitor {
            line: self,
            handler,
        })
    }
}

impl<I> LineSpec<I> {
    pub fn id(&self) -> LineId {
        self.id
    }

    pub fn baseline(&self) -> Level {
        self.baseline
    }
}

/// State-update policy run on every edge.
pub trait EdgeHandler {
    /// Runs before the line is sampled. Returning `true` drops the edge.
    fn intercept(&mut self) -> bool {
        false
    }

    /// `active` is whether the line currently differs from its baseline.
    fn update(&mut self, active: bool);
}

pub struct LineMonitor<I, H> {
    line: LineSpec<I>,
    handler: H,
}

impl<I: EdgeInput, H: EdgeHandler> LineMonitor<I, H> {
    pub fn id(&self) -> LineId {
        self.line.id
    }

    pub fn baseline(&self) -> Level {
        self.line.baseline
    }

    /// Handler body for one edge. A failed read leaves the state untouched.
    pub fn on_edge(&mut self) {
        if self.handler.intercept() {
            return;
        }

        let level = match self.line.input.read_level() {
            Ok(level) => level,
            Err(e) => {
                error!(
                    "Failed to get the state of {} line: {}",
                    self.line.id,
                    Debug2Format(&e)
                );
                return;
            }
        };

        self.handler.update(level != self.line.baseline);
    }

    pub async fn run(&mut self) -> ! {
        loop {
            if let Err(e) = self.line.input.wait_for_edge().await {
                error!(
                    "{} line: edge wait failed: {}",
                    self.line.id,
                    Debug2Format(&e)
                );
                continue;
            }
            self.on_edge();
        }
    }
}

/// Level-sensitive: the button bit follows the line exactly.
pub struct ButtonHandler<'a> {
    field: ButtonField<'a>,
    doorbell: &'a Doorbell,
    power: &'a PowerLink,
    remote_wakeup: bool,
}

impl<'a> ButtonHandler<'a> {
    pub fn new(
        field: ButtonField<'a>,
        doorbell: &'a Doorbell,
        power: &'a PowerLink,
        remote_wakeup: bool,
    ) -> Self {
        Self {
            field,
            doorbell,
            power,
            remote_wakeup,
        }
    }
}

impl EdgeHandler for ButtonHandler<'_> {
    fn intercept(&mut self) -> bool {
        if self.remote_wakeup && self.power.is_suspended() {
            trace!("{} edge while suspended, requesting wakeup", self.field.button());
            self.power.request_wakeup();
            return true;
        }
        false
    }

    fn update(&mut self, active: bool) {
        if self.field.set(active) {
            self.doorbell.ring();
        }
    }
}

/// Edge-accumulated: each activation adds `step` to the axis; release does
/// nothing. Repeated press/release cycles therefore move in one direction only,
/// wrapping at 256.
pub struct MoveHandler<'a> {
    field: AxisField<'a>,
    doorbell: &'a Doorbell,
    step: u8,
}

impl<'a> MoveHandler<'a> {
    pub fn new(field: AxisField<'a>, doorbell: &'a Doorbell, step: u8) -> Self {
        Self {
            field,
            doorbell,
            step,
        }
    }
}

impl EdgeHandler for MoveHandler<'_> {
    fn update(&mut self, active: bool) {
        if active && self.field.advance(self.step) {
            self.doorbell.ring();
        }
    }
}
