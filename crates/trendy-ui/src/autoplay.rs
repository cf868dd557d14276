//! Auto-advance timer task for carousels.
//!
//! Each carousel owns at most one timer resource: a tokio task holding the
//! [`Carousel`] state machine, fed by user commands over an mpsc channel
//! and by a `tokio::time::interval` while auto-advance is on. Every event
//! (command or tick) is handled to completion before the next one, and the
//! task publishes a fresh [`CarouselSnapshot`] over a watch channel after
//! each transition so the view can re-render.
//!
//! The task shuts down deterministically: cancelling the handle (or
//! dropping it) stops the loop, and no tick can land afterwards.

use crate::carousel::Carousel;
use crate::error::UiError;
use std::ops::Range;
use std::time::Duration;
use tokio::sync::{mpsc, oneshot, watch};
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tokio_util::sync::CancellationToken;
use tracing::debug;

/// Period between automatic advances.
pub const AUTO_ADVANCE_INTERVAL: Duration = Duration::from_millis(4000);

/// A point-in-time view of a running carousel, for rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CarouselSnapshot {
    pub current_index: usize,
    pub visible_count: usize,
    pub item_count: usize,
    pub max_index: usize,
    pub auto_advance: bool,
}

impl From<&Carousel> for CarouselSnapshot {
    fn from(carousel: &Carousel) -> Self {
        Self {
            current_index: carousel.current_index(),
            visible_count: carousel.visible_count(),
            item_count: carousel.item_count(),
            max_index: carousel.max_index(),
            auto_advance: carousel.auto_advance(),
        }
    }
}

impl CarouselSnapshot {
    /// Indices of the items currently in the viewport.
    pub fn visible_range(&self) -> Range<usize> {
        let end = (self.current_index + self.visible_count).min(self.item_count);
        self.current_index..end
    }

    /// Number of indicator dots.
    pub fn indicator_count(&self) -> usize {
        self.max_index + 1
    }
}

enum Command {
    Next,
    Prev,
    Toggle,
    SetVisibleCount(usize),
    GoTo(usize, oneshot::Sender<Result<(), UiError>>),
}

/// Handle to a spawned carousel task.
///
/// Dropping the handle cancels the task; [`stop`](CarouselHandle::stop)
/// does the same but waits until the task has actually exited.
pub struct CarouselHandle {
    tx: mpsc::Sender<Command>,
    state: watch::Receiver<CarouselSnapshot>,
    cancel: CancellationToken,
    task: Option<JoinHandle<()>>,
}

impl CarouselHandle {
    /// Spawn a carousel task with the standard 4-second period.
    pub fn spawn(carousel: Carousel) -> Self {
        Self::spawn_with_interval(carousel, AUTO_ADVANCE_INTERVAL)
    }

    /// Spawn a carousel task with a custom tick period.
    pub fn spawn_with_interval(carousel: Carousel, period: Duration) -> Self {
        let (tx, rx) = mpsc::channel(16);
        let (state_tx, state_rx) = watch::channel(CarouselSnapshot::from(&carousel));
        let cancel = CancellationToken::new();

        let task = tokio::spawn(run(carousel, period, rx, state_tx, cancel.clone()));

        Self {
            tx,
            state: state_rx,
            cancel,
            task: Some(task),
        }
    }

    /// Latest published state.
    pub fn snapshot(&self) -> CarouselSnapshot {
        *self.state.borrow()
    }

    /// Wait for the next published state.
    pub async fn changed(&mut self) -> Result<CarouselSnapshot, UiError> {
        self.state
            .changed()
            .await
            .map_err(|_| UiError::CarouselStopped)?;
        Ok(*self.state.borrow_and_update())
    }

    async fn send(&self, command: Command) -> Result<(), UiError> {
        self.tx
            .send(command)
            .await
            .map_err(|_| UiError::CarouselStopped)
    }

    /// Advance one slide (pauses auto-advance).
    pub async fn next(&self) -> Result<(), UiError> {
        self.send(Command::Next).await
    }

    /// Go back one slide (pauses auto-advance).
    pub async fn prev(&self) -> Result<(), UiError> {
        self.send(Command::Prev).await
    }

    /// Jump to a slide. Out-of-range indices are rejected by the task and
    /// the error is returned here.
    pub async fn go_to(&self, index: usize) -> Result<(), UiError> {
        let (reply_tx, reply_rx) = oneshot::channel();
        self.send(Command::GoTo(index, reply_tx)).await?;
        reply_rx.await.map_err(|_| UiError::CarouselStopped)?
    }

    /// Flip auto-advance.
    pub async fn toggle_auto_advance(&self) -> Result<(), UiError> {
        self.send(Command::Toggle).await
    }

    /// Apply a new viewport capacity (e.g., after a breakpoint change).
    pub async fn set_visible_count(&self, visible_count: usize) -> Result<(), UiError> {
        self.send(Command::SetVisibleCount(visible_count)).await
    }

    /// Cancel the task and wait for it to exit.
    pub async fn stop(mut self) {
        self.cancel.cancel();
        if let Some(task) = self.task.take() {
            let _ = task.await;
        }
    }
}

impl Drop for CarouselHandle {
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}

async fn run(
    mut carousel: Carousel,
    period: Duration,
    mut rx: mpsc::Receiver<Command>,
    state: watch::Sender<CarouselSnapshot>,
    cancel: CancellationToken,
) {
    // The timer exists only while auto-advance is on; it is dropped the
    // moment auto-play stops and re-acquired fresh when it resumes.
    let mut timer = carousel.auto_advance().then(|| new_interval(period));

    loop {
        tokio::select! {
            _ = cancel.cancelled() => {
                debug!("carousel task cancelled");
                break;
            }
            command = rx.recv() => match command {
                Some(command) => {
                    match command {
                        Command::Next => carousel.next(),
                        Command::Prev => carousel.prev(),
                        Command::Toggle => carousel.toggle_auto_advance(),
                        Command::SetVisibleCount(n) => carousel.set_visible_count(n),
                        Command::GoTo(index, reply) => {
                            let _ = reply.send(carousel.go_to(index));
                        }
                    }
                    match (timer.is_some(), carousel.auto_advance()) {
                        (true, false) => {
                            debug!("auto-play stopped, timer released");
                            timer = None;
                        }
                        (false, true) => timer = Some(new_interval(period)),
                        _ => {}
                    }
                    let _ = state.send(CarouselSnapshot::from(&carousel));
                }
                None => {
                    debug!("carousel handle dropped");
                    break;
                }
            },
            _ = next_tick(&mut timer), if timer.is_some() => {
                carousel.tick();
                debug!(index = carousel.current_index(), "carousel auto-advance");
                let _ = state.send(CarouselSnapshot::from(&carousel));
            }
        }
    }
}

/// A fresh interval whose first tick lands a full period from now (a raw
/// `interval()` fires immediately on its first tick).
fn new_interval(period: Duration) -> tokio::time::Interval {
    let mut interval = tokio::time::interval(period);
    interval.set_missed_tick_behavior(MissedTickBehavior::Skip);
    interval.reset();
    interval
}

async fn next_tick(timer: &mut Option<tokio::time::Interval>) {
    match timer {
        Some(interval) => {
            interval.tick().await;
        }
        // Unreachable behind the select guard; never resolves.
        None => std::future::pending::<()>().await,
    }
}
