//! Simulation loop termination tests.
//!
//! Time is paused so the tick sleeps complete instantly while still being
//! measured on tokio's virtual clock.

use std::{io, time::Duration};

use life::{Board, CancelSignal, RenderSink, StopReason, find_pattern, sim};
use tokio::time::Instant;

const INTERVAL: Duration = Duration::from_millis(200);

/// Records every board handed to the renderer
#[derive(Default)]
struct Recorder {
    frames: Vec<(u64, Board)>,
}

impl RenderSink for Recorder {
    fn draw(&mut self, board: &Board, generation: u64) -> io::Result<()> {
        self.frames.push((generation, board.clone()));
        Ok(())
    }
}

/// Requests a stop on the n-th poll
struct CancelAfter {
    polls: u32,
    stop_at: u32,
}

impl CancelAfter {
    fn new(stop_at: u32) -> Self {
        Self { polls: 0, stop_at }
    }
}

impl CancelSignal for CancelAfter {
    fn poll_cancel(&mut self) -> io::Result<bool> {
        self.polls += 1;
        Ok(self.polls >= self.stop_at)
    }
}

struct FailingSink;

impl RenderSink for FailingSink {
    fn draw(&mut self, _board: &Board, _generation: u64) -> io::Result<()> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "terminal gone"))
    }
}

#[tokio::test(start_paused = true)]
async fn block_stops_stable_after_one_tick() {
    let block = Board::with_live_cells(4, 4, [(1, 1), (1, 2), (2, 1), (2, 2)]).unwrap();
    let mut sink = Recorder::default();
    let start = Instant::now();

    let outcome = sim::run(block.clone(), INTERVAL, &mut sink, &mut CancelAfter::new(u32::MAX)).await.unwrap();

    assert_eq!(outcome.reason, StopReason::Stable);
    assert_eq!(outcome.generation, 1);
    assert_eq!(outcome.board, block);
    assert_eq!(sink.frames, vec![(0, block)]);
    assert_eq!(start.elapsed(), Duration::ZERO);
}

#[tokio::test(start_paused = true)]
async fn dead_board_stops_extinct_after_first_step() {
    let mut sink = Recorder::default();

    let outcome =
        sim::run(Board::dead(5, 5).unwrap(), INTERVAL, &mut sink, &mut CancelAfter::new(u32::MAX)).await.unwrap();

    assert_eq!(outcome.reason, StopReason::Extinct);
    assert_eq!(outcome.generation, 1);
    assert_eq!(sink.frames.len(), 1);
}

#[tokio::test(start_paused = true)]
async fn lone_cell_dies_out() {
    let outcome = sim::run(
        Board::with_live_cells(3, 3, [(1, 1)]).unwrap(),
        INTERVAL,
        &mut Recorder::default(),
        &mut CancelAfter::new(u32::MAX),
    )
    .await
    .unwrap();

    assert_eq!(outcome.reason, StopReason::Extinct);
    assert_eq!(outcome.generation, 1);
}

#[tokio::test(start_paused = true)]
async fn blinker_runs_until_cancelled() {
    let blinker = find_pattern("blinker").unwrap().place(5, 5).unwrap();
    let mut sink = Recorder::default();
    let start = Instant::now();

    let outcome = sim::run(blinker, INTERVAL, &mut sink, &mut CancelAfter::new(10)).await.unwrap();

    assert_eq!(outcome.reason, StopReason::Cancelled);
    assert_eq!(outcome.generation, 10);
    assert_eq!(sink.frames.len(), 10);
    // One sleep between each pair of ticks
    let elapsed = start.elapsed();
    assert!(elapsed >= INTERVAL * 9 && elapsed < INTERVAL * 10, "elapsed = {elapsed:?}");
}

#[tokio::test(start_paused = true)]
async fn renderer_sees_pre_step_boards_in_order() {
    let blinker = find_pattern("blinker").unwrap().place(5, 5).unwrap();
    let mut sink = Recorder::default();

    sim::run(blinker.clone(), INTERVAL, &mut sink, &mut CancelAfter::new(3)).await.unwrap();

    let generations: Vec<u64> = sink.frames.iter().map(|(generation, _)| *generation).collect();
    assert_eq!(generations, vec![0, 1, 2]);
    assert_eq!(sink.frames[0].1, blinker);
    assert_ne!(sink.frames[1].1, blinker);
    assert_eq!(sink.frames[2].1, blinker);
}

#[tokio::test(start_paused = true)]
async fn stability_is_checked_before_cancellation() {
    let block = Board::with_live_cells(4, 4, [(1, 1), (1, 2), (2, 1), (2, 2)]).unwrap();

    let outcome = sim::run(block, INTERVAL, &mut Recorder::default(), &mut CancelAfter::new(1)).await.unwrap();

    assert_eq!(outcome.reason, StopReason::Stable);
}

#[tokio::test(start_paused = true)]
async fn glider_in_small_box_settles_into_block() {
    let glider = find_pattern("glider").unwrap().place(6, 6).unwrap();

    let outcome =
        sim::run(glider, INTERVAL, &mut Recorder::default(), &mut CancelAfter::new(u32::MAX)).await.unwrap();

    assert_eq!(outcome.reason, StopReason::Stable);
    assert_eq!(outcome.board.live_count(), 4);
}

#[tokio::test(start_paused = true)]
async fn render_errors_propagate() {
    let result =
        sim::run(Board::dead(2, 2).unwrap(), INTERVAL, &mut FailingSink, &mut CancelAfter::new(u32::MAX)).await;

    assert!(matches!(result, Err(life::LifeError::Io(_))));
}
