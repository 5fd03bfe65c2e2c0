//! Generation loop.
//!
//! Each tick draws the current board, steps it and decides whether to keep
//! going. The loop stops when the population dies out, when a generation is
//! identical to the one before it, or when the user asks it to. Only a
//! single-step fixed point counts as stable: oscillators such as a blinker
//! run until cancelled.

use std::{fmt, io, time::Duration};

use tracing::{debug, info};

use crate::{engine, error::Result, grid::Board};

/// Receives every generation before it is stepped.
pub trait RenderSink {
    /// Draw `board`, which is generation number `generation`.
    fn draw(&mut self, board: &Board, generation: u64) -> io::Result<()>;
}

/// Non-blocking check for a user-requested stop.
pub trait CancelSignal {
    /// Returns `true` once the user has asked to stop. Must not block.
    fn poll_cancel(&mut self) -> io::Result<bool>;
}

/// Why the loop ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    /// No live cells left.
    Extinct,
    /// The board stopped changing.
    Stable,
    /// Stopped by the user.
    Cancelled,
}

impl fmt::Display for StopReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Extinct => "all cells died",
            Self::Stable => "board is stable",
            Self::Cancelled => "stopped by user",
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SimState {
    Running,
    /// Terminal; further ticks do nothing.
    Stopped(StopReason),
}

/// Final report of a finished run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    /// Number of generations stepped.
    pub generation: u64,
    pub reason: StopReason,
    /// Last board that was drawn.
    pub board: Board,
}

/// Loop state: the current board and the generation counter.
#[derive(Debug, Clone)]
pub struct Simulation {
    current: Board,
    generation: u64,
    state: SimState,
}

impl Simulation {
    pub fn new(board: Board) -> Self {
        Self { current: board, generation: 0, state: SimState::Running }
    }

    pub fn board(&self) -> &Board {
        &self.current
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn state(&self) -> SimState {
        self.state
    }

    /// Run one generation: draw, step, then check extinction, stability and
    /// cancellation in that order.
    pub fn tick<R, C>(&mut self, sink: &mut R, cancel: &mut C) -> io::Result<SimState>
    where
        R: RenderSink + ?Sized,
        C: CancelSignal + ?Sized,
    {
        if let SimState::Stopped(_) = self.state {
            return Ok(self.state);
        }

        sink.draw(&self.current, self.generation)?;
        self.generation += 1;

        let (next, live) = engine::step(&self.current);
        self.state = if live == 0 {
            SimState::Stopped(StopReason::Extinct)
        } else if next == self.current {
            SimState::Stopped(StopReason::Stable)
        } else if cancel.poll_cancel()? {
            SimState::Stopped(StopReason::Cancelled)
        } else {
            debug!(generation = self.generation, live, "generation stepped");
            self.current = next;
            SimState::Running
        };

        Ok(self.state)
    }
}

/// Drive a board until it stops, sleeping `interval` between generations.
pub async fn run<R, C>(initial: Board, interval: Duration, sink: &mut R, cancel: &mut C) -> Result<Outcome>
where
    R: RenderSink + ?Sized,
    C: CancelSignal + ?Sized,
{
    info!(height = initial.height(), width = initial.width(), live = initial.live_count(), "simulation started");
    let mut sim = Simulation::new(initial);

    loop {
        match sim.tick(sink, cancel)? {
            SimState::Running => tokio::time::sleep(interval).await,
            SimState::Stopped(reason) => {
                info!(generation = sim.generation, %reason, "simulation stopped");
                return Ok(Outcome { generation: sim.generation, reason, board: sim.current });
            },
        }
    }
}
