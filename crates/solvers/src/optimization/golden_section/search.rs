use std::cmp::Ordering;

use girder_core::{Model, Observer, OptimizationProblem};

use crate::optimization::{Evaluation, evaluate};

use super::{
    Action, Config, Error, Event, Point, Solution, Status,
    interval::Interval,
    state::{State, Step},
};

/// Core golden section loop.
pub(super) fn search<M, P, Obs>(
    model: &M,
    problem: &P,
    bracket: [f64; 2],
    config: &Config,
    mut observer: Obs,
) -> Result<Solution<M::Input, M::Output>, Error>
where
    M: Model,
    P: OptimizationProblem<1, Input = M::Input, Output = M::Output>,
    Obs: for<'a> Observer<Event<'a, M, P>, Action>,
{
    let interval = Interval::new(bracket);

    let mut state = match start(model, problem, interval, config, &mut observer)? {
        Start::Continue(state) => state,
        Start::Stopped(solution) => return Ok(solution),
    };

    for iter in 1..=config.max_iters() {
        if state.is_converged(config) {
            return Ok(state.into_solution(Status::Converged, iter - 1));
        }

        let step = state.next_step();
        let (x, other) = match step {
            Step::KeepLower(x) => (x, state.low()),
            Step::KeepUpper(x) => (x, state.high()),
        };

        match probe(model, problem, x, other, &mut observer)? {
            Probe::Accepted(eval) => {
                let point = Point::from(&eval);
                state.apply(step, point);
                state.offer(point, eval.snapshot);
            }
            Probe::AssumedWorse => state.apply(step, Point::worst(x)),
            Probe::Stopped => return Ok(state.into_solution(Status::StoppedByObserver, iter)),
        }
    }

    Ok(state.into_solution(Status::MaxIters, config.max_iters()))
}

enum Start<I, O> {
    Continue(State<I, O>),
    Stopped(Solution<I, O>),
}

/// Evaluates both opening probes.
///
/// The low probe is evaluated silently; only the high probe (or whichever
/// failed) reaches the observer, since an event needs a point to compare
/// against. If both fail there is nothing to recover with, so the observer is
/// notified and the low probe's error is returned.
fn start<M, P, Obs>(
    model: &M,
    problem: &P,
    interval: Interval,
    config: &Config,
    observer: &mut Obs,
) -> Result<Start<M::Input, M::Output>, Error>
where
    M: Model,
    P: OptimizationProblem<1, Input = M::Input, Output = M::Output>,
    Obs: for<'a> Observer<Event<'a, M, P>, Action>,
{
    let low = evaluate(model, problem, [interval.probe_low]);
    let high = evaluate(model, problem, [interval.probe_high]);

    let (ok, failed_point) = match (low, high) {
        (Err(low_err), Err(_)) => {
            let placeholder = Point::worst(interval.probe_high);
            Event::emit_failure(interval.probe_low, placeholder, &low_err, observer);
            return Err(low_err.into());
        }
        (Ok(low), Ok(high)) => {
            return start_with_both::<M, P, Obs>(interval, low, high, config, observer);
        }
        (Ok(ok), Err(err)) => {
            let action = Event::emit_failure(interval.probe_high, Point::from(&ok), &err, observer);
            (ok, (Point::worst(interval.probe_high), action, err))
        }
        (Err(err), Ok(ok)) => {
            let action = Event::emit_failure(interval.probe_low, Point::from(&ok), &err, observer);
            (ok, (Point::worst(interval.probe_low), action, err))
        }
    };

    let (worse, action, err) = failed_point;
    let ok_point = Point::from(&ok);
    match action {
        Some(Action::StopEarly) => Ok(Start::Stopped(single(ok, config))),
        Some(Action::AssumeWorse) => {
            let probes = if ok_point.x <= worse.x {
                [ok_point, worse]
            } else {
                [worse, ok_point]
            };
            Ok(Start::Continue(State::new(
                interval,
                probes,
                ok_point,
                ok.snapshot,
                config,
            )))
        }
        None => Err(err.into()),
    }
}

fn start_with_both<M, P, Obs>(
    interval: Interval,
    low: Evaluation<M::Input, M::Output, 1>,
    high: Evaluation<M::Input, M::Output, 1>,
    config: &Config,
    observer: &mut Obs,
) -> Result<Start<M::Input, M::Output>, Error>
where
    M: Model,
    P: OptimizationProblem<1, Input = M::Input, Output = M::Output>,
    Obs: for<'a> Observer<Event<'a, M, P>, Action>,
{
    let low_point = Point::from(&low);
    let high_point = Point::from(&high);

    let action = observer.observe(&Event::Evaluated {
        point: high_point,
        input: &high.snapshot.input,
        output: &high.snapshot.output,
        other: low_point,
    });

    let high_wins = high_point.rank(&low_point, config.margin_tol()) == Ordering::Less;

    match action {
        Some(Action::StopEarly) => {
            let best = if high_wins { high } else { low };
            Ok(Start::Stopped(single(best, config)))
        }
        Some(Action::AssumeWorse) => Ok(Start::Continue(State::new(
            interval,
            [low_point, Point::worst(high_point.x)],
            low_point,
            low.snapshot,
            config,
        ))),
        None => {
            let (best, snapshot) = if high_wins {
                (high_point, high.snapshot)
            } else {
                (low_point, low.snapshot)
            };
            Ok(Start::Continue(State::new(
                interval,
                [low_point, high_point],
                best,
                snapshot,
                config,
            )))
        }
    }
}

/// Builds a solution from a single evaluation when stopping during start-up.
fn single<I, O>(eval: Evaluation<I, O, 1>, config: &Config) -> Solution<I, O> {
    let point = Point::from(&eval);
    Solution {
        status: Status::StoppedByObserver,
        x: point.x,
        objective: point.objective,
        margin: point.margin,
        feasible: point.is_feasible(config.margin_tol()),
        snapshot: eval.snapshot,
        iters: 0,
    }
}

enum Probe<I, O> {
    Accepted(Evaluation<I, O, 1>),
    AssumedWorse,
    Stopped,
}

/// Evaluates at `x`, emits the event, and applies the observer's action.
fn probe<M, P, Obs>(
    model: &M,
    problem: &P,
    x: f64,
    other: Point,
    observer: &mut Obs,
) -> Result<Probe<M::Input, M::Output>, Error>
where
    M: Model,
    P: OptimizationProblem<1, Input = M::Input, Output = M::Output>,
    Obs: for<'a> Observer<Event<'a, M, P>, Action>,
{
    match evaluate(model, problem, [x]) {
        Ok(eval) => {
            let action = observer.observe(&Event::Evaluated {
                point: Point::from(&eval),
                input: &eval.snapshot.input,
                output: &eval.snapshot.output,
                other,
            });
            Ok(match action {
                Some(Action::StopEarly) => Probe::Stopped,
                Some(Action::AssumeWorse) => Probe::AssumedWorse,
                None => Probe::Accepted(eval),
            })
        }
        Err(err) => match Event::emit_failure(x, other, &err, observer) {
            Some(Action::StopEarly) => Ok(Probe::Stopped),
            Some(Action::AssumeWorse) => Ok(Probe::AssumedWorse),
            None => Err(err.into()),
        },
    }
}
