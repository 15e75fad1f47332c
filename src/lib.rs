//! Edge-triggered HID mouse engine
//!
//! Four digital input lines drive a single relative-mouse report:
//! - two button lines, level-sensitive against a baseline captured at startup
//! - two movement lines, each activation edge advancing an axis by a fixed step
//!
//! Line handlers write into [`state::AggregateState`] and ring a
//! [`doorbell::Doorbell`]. A single [`dispatch::Dispatcher`] waits on the
//! doorbell, snapshots the state, clears the movement accumulators, and hands
//! the 4-byte report to the transport.

#![cfg_attr(not(test), no_std)]
#![allow(async_fn_in_trait)]

pub(crate) mod fmt;

pub mod config;
pub mod dispatch;
pub mod doorbell;
pub mod error;
pub mod line;
pub mod power;
pub mod report;
pub mod startup;
pub mod state;

pub use config::MouseConfig;
pub use dispatch::{Dispatch, DispatchPhase, Dispatcher, Indicator, PinIndicator, ReportSink};
pub use doorbell::Doorbell;
pub use error::{LineError, StartupError};
pub use line::{
    ButtonHandler, EdgeHandler, EdgeInput, HalInput, Level, LineId, LineMonitor, LineSpec,
    MoveHandler,
};
pub use power::{PowerLink, PowerState};
pub use report::{Button, Buttons, MouseReport, REPORT_LEN};
pub use startup::{LineSet, Monitors, MouseCore, bring_up};
pub use state::{AggregateState, Axis, AxisField, ButtonField, StateParts, StateReader};
