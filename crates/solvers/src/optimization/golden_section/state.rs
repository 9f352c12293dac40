use std::cmp::Ordering;

use girder_core::Snapshot;

use super::interval::Interval;
use super::{Config, Point, Solution, Status};

/// Which part of the interval to keep, and where to probe next.
#[derive(Debug, Clone, Copy)]
pub(super) enum Step {
    /// Keep `[lower, probe_high]`; payload is the new low probe.
    KeepLower(f64),

    /// Keep `[probe_low, upper]`; payload is the new high probe.
    KeepUpper(f64),
}

pub(super) struct State<I, O> {
    interval: Interval,
    low: Point,
    high: Point,
    best: Point,
    best_snapshot: Snapshot<I, O>,
    margin_tol: f64,
}

impl<I, O> State<I, O> {
    pub(super) fn new(
        interval: Interval,
        [low, high]: [Point; 2],
        best: Point,
        best_snapshot: Snapshot<I, O>,
        config: &Config,
    ) -> Self {
        Self {
            interval,
            low,
            high,
            best,
            best_snapshot,
            margin_tol: config.margin_tol(),
        }
    }

    pub(super) fn low(&self) -> Point {
        self.low
    }

    pub(super) fn high(&self) -> Point {
        self.high
    }

    /// Decides which side to keep. Ties keep the lower side.
    pub(super) fn next_step(&self) -> Step {
        match self.low.rank(&self.high, self.margin_tol) {
            Ordering::Less | Ordering::Equal => Step::KeepLower(self.interval.next_probe_low()),
            Ordering::Greater => Step::KeepUpper(self.interval.next_probe_high()),
        }
    }

    /// Shrinks the interval and stores the new probe.
    pub(super) fn apply(&mut self, step: Step, point: Point) {
        match step {
            Step::KeepLower(_) => {
                self.interval.keep_lower();
                self.high = self.low;
                self.low = point;
            }
            Step::KeepUpper(_) => {
                self.interval.keep_upper();
                self.low = self.high;
                self.high = point;
            }
        }
    }

    /// Replaces the best point if `point` ranks strictly better.
    pub(super) fn offer(&mut self, point: Point, snapshot: Snapshot<I, O>) {
        if point.rank(&self.best, self.margin_tol) == Ordering::Less {
            self.best = point;
            self.best_snapshot = snapshot;
        }
    }

    pub(super) fn is_converged(&self, config: &Config) -> bool {
        let reference = self.interval.probe_mid().abs();
        self.interval.probe_gap() <= config.x_abs_tol() + config.x_rel_tol() * reference
    }

    pub(super) fn into_solution(self, status: Status, iters: usize) -> Solution<I, O> {
        Solution {
            status,
            x: self.best.x,
            objective: self.best.objective,
            margin: self.best.margin,
            feasible: self.best.is_feasible(self.margin_tol),
            snapshot: self.best_snapshot,
            iters,
        }
    }
}
