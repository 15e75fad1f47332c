//! Shared button and movement state.
//!
//! Each button bit and each axis lives in its own atomic. [`AggregateState::split`]
//! hands out exactly one writer per field, so every field has a single writer
//! for as long as the parts are alive. Only the [`StateReader`] clears the axes.

use core::sync::atomic::{AtomicBool, AtomicU8, Ordering};

use crate::report::{Button, Buttons, MouseReport};

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Axis {
    X,
    Y,
}

pub struct AggregateState {
    left: AtomicBool,
    right: AtomicBool,
    middle: AtomicBool,
    dx: AtomicU8,
    dy: AtomicU8,
}

/// Writer and reader handles produced by [`AggregateState::split`].
pub struct StateParts<'a> {
    pub left: ButtonField<'a>,
    pub right: ButtonField<'a>,
    pub middle: ButtonField<'a>,
    pub x: AxisField<'a>,
    pub y: AxisField<'a>,
    pub reader: StateReader<'a>,
}

impl AggregateState {
    pub const fn new() -> Self {
        Self {
            left: AtomicBool::new(false),
            right: AtomicBool::new(false),
            middle: AtomicBool::new(false),
            dx: AtomicU8::new(0),
            dy: AtomicU8::new(0),
        }
    }

    pub fn split(&mut self) -> StateParts<'_> {
        let this = &*self;
        StateParts {
            left: ButtonField {
                button: Button::Left,
                cell: &this.left,
            },
            right: ButtonField {
                button: Button::Right,
                cell: &this.right,
            },
            middle: ButtonField {
                button: Button::Middle,
                cell: &this.middle,
            },
            x: AxisField {
                axis: Axis::X,
                cell: &this.dx,
            },
            y: AxisField {
                axis: Axis::Y,
                cell: &this.dy,
            },
            reader: StateReader { state: this },
        }
    }

    fn buttons(&self) -> Buttons {
        Buttons::NONE
            .with(Button::Left, self.left.load(Ordering::Relaxed))
            .with(Button::Right, self.right.load(Ordering::Relaxed))
            .with(Button::Middle, self.middle.load(Ordering::Relaxed))
    }
}

impl Default for AggregateState {
    fn default() -> Self {
        Self::new()
    }
}

/// Sole writer of one button bit.
pub struct ButtonField<'a> {
    button: Button,
    cell: &'a AtomicBool,
}

impl ButtonField<'_> {
    pub fn button(&self) -> Button {
        self.button
    }

    pub fn get(&self) -> bool {
        self.cell.load(Ordering::Relaxed)
    }

    /// Stores `pressed`, returning whether the stored value changed.
    pub fn set(&mut self, pressed: bool) -> bool {
        if self.cell.load(Ordering::Relaxed) == pressed {
            return false;
        }
        self.cell.store(pressed, Ordering::Relaxed);
        true
    }
}

/// Sole incrementer of one movement accumulator.
pub struct AxisField<'a> {
    axis: Axis,
    cell: &'a AtomicU8,
}

impl AxisField<'_> {
    pub fn axis(&self) -> Axis {
        self.axis
    }

    pub fn get(&self) -> u8 {
        self.cell.load(Ordering::Relaxed)
    }

    /// Adds `step` modulo 256, returning whether the stored value changed.
    ///
    /// The add is a single atomic operation, so an increment racing with the
    /// reader's clear lands either in the report being built or the next one.
    pub fn advance(&mut self, step: u8) -> bool {
        let prev = self.cell.fetch_add(step, Ordering::Relaxed);
        prev.wrapping_add(step) != prev
    }
}

/// Consumer side: snapshots the state and clears the accumulators.
pub struct StateReader<'a> {
    state: &'a AggregateState,
}

impl StateReader<'_> {
    /// Current values without clearing anything.
    pub fn peek(&self) -> MouseReport {
        MouseReport::new(
            self.state.buttons(),
            self.state.dx.load(Ordering::Relaxed),
            self.state.dy.load(Ordering::Relaxed),
        )
    }

    /// Report-and-clear: buttons are level state and persist, the axes are
    /// reset to zero.
    pub fn snapshot_and_clear(&mut self) -> MouseReport {
        let buttons = self.state.buttons();
        let dx = self.state.dx.swap(0, Ordering::Relaxed);
        let dy = self.state.dy.swap(0, Ordering::Relaxed);
        MouseReport::new(buttons, dx, dy)
    }
}
