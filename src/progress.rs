//! Progress reporting and cancellation.
//!
//! Solvers report every improvement of their incumbent through a
//! [`ProgressObserver`] and poll it (and an optional wall-clock limit) once
//! per generation or ant. Observers get read-only snapshots and decide on
//! their own what to do with them: draw, log, persist.

use std::time::{Duration, Instant};

use crate::models::TourSnapshot;

/// Receives improvements from a running solver.
pub trait ProgressObserver {
    /// Called after the solver's best tour improves.
    fn on_improvement(&mut self, snapshot: &TourSnapshot<'_>);

    /// Polled once per iteration; returning `true` stops the solver, which
    /// then returns its best tour so far.
    fn should_stop(&mut self) -> bool {
        false
    }
}

/// Ignores all progress.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoProgress;

impl ProgressObserver for NoProgress {
    fn on_improvement(&mut self, _snapshot: &TourSnapshot<'_>) {}
}

/// Logs each improvement at `info` level.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogProgress;

impl ProgressObserver for LogProgress {
    fn on_improvement(&mut self, snapshot: &TourSnapshot<'_>) {
        log::info!(
            "[{}] iteration {}: new best cost {:.3}",
            snapshot.solver,
            snapshot.iteration,
            snapshot.cost
        );
    }
}

/// Adapts a closure into an observer.
///
/// # Examples
///
/// ```
/// use u_tsp::models::Vertex;
/// use u_tsp::distance::CostMatrix;
/// use u_tsp::constructive::nearest_neighbor_with;
/// use u_tsp::progress::FnObserver;
///
/// let vertices = vec![Vertex::new(0, 0), Vertex::new(0, 1), Vertex::new(1, 1)];
/// let cm = CostMatrix::from_vertices(&vertices).unwrap();
/// let mut costs = Vec::new();
/// let mut observer = FnObserver::new(|snap| costs.push(snap.cost));
/// nearest_neighbor_with(&cm, 0, &mut observer).unwrap();
/// drop(observer);
/// assert_eq!(costs.len(), 1);
/// ```
pub struct FnObserver<F>(pub F);

impl<F> FnObserver<F>
where
    F: FnMut(&TourSnapshot<'_>),
{
    /// Wraps `f`.
    pub fn new(f: F) -> Self {
        Self(f)
    }
}

impl<F> ProgressObserver for FnObserver<F>
where
    F: FnMut(&TourSnapshot<'_>),
{
    fn on_improvement(&mut self, snapshot: &TourSnapshot<'_>) {
        (self.0)(snapshot)
    }
}

impl<O: ProgressObserver + ?Sized> ProgressObserver for &mut O {
    fn on_improvement(&mut self, snapshot: &TourSnapshot<'_>) {
        (**self).on_improvement(snapshot)
    }

    fn should_stop(&mut self) -> bool {
        (**self).should_stop()
    }
}

/// Optional wall-clock deadline, started when the solve begins.
#[derive(Debug, Clone, Copy)]
pub struct StopCondition {
    deadline: Option<Instant>,
}

impl StopCondition {
    /// Starts the clock; `None` means no time limit.
    pub fn start(time_limit: Option<Duration>) -> Self {
        Self {
            deadline: time_limit.map(|limit| Instant::now() + limit),
        }
    }

    /// Never stops.
    pub fn unlimited() -> Self {
        Self { deadline: None }
    }

    /// Returns `true` once the deadline has passed.
    pub fn is_reached(&self) -> bool {
        self.deadline.is_some_and(|d| Instant::now() >= d)
    }

    /// Checks the deadline, then asks the observer.
    pub(crate) fn should_stop<O: ProgressObserver + ?Sized>(&self, observer: &mut O) -> bool {
        self.is_reached() || observer.should_stop()
    }
}
