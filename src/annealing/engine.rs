//! Generic annealing engine.
//!
//! Problem definitions plug in a state type, a cost function, and a
//! neighbor move; the runner owns the cooling loop and acceptance rule.
//!
//! # Acceptance rule
//!
//! A candidate is accepted into the trajectory when its cost beats the
//! best cost seen so far, or when the Metropolis term
//! `exp((best - candidate) / temperature)` exceeds a uniform draw.
//! Anchoring the term at the incumbent best (rather than the current
//! state's cost) tightens the walk around the best solution as the
//! temperature drops. Once the temperature decays below
//! [`MIN_TEMPERATURE`] only strict improvements pass, which is also
//! where the exponential would underflow.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use super::AnnealingConfig;

/// Temperature floor below which only strict improvements are accepted.
const MIN_TEMPERATURE: f64 = 1e-12;

/// An annealing problem instance.
pub trait AnnealingProblem {
    /// Solution state being searched over.
    type State: Clone;

    /// Cost of a state; lower is better.
    fn cost(&self, state: &Self::State) -> f64;

    /// A random neighbor of the given state.
    fn neighbor<R: Rng>(&self, state: &Self::State, rng: &mut R) -> Self::State;
}

/// Outcome of an annealing run.
#[derive(Debug, Clone)]
pub struct AnnealingResult<S> {
    /// Lowest-cost state seen during the run.
    pub best: S,
    /// Cost of `best`.
    pub best_cost: f64,
    /// Iterations executed (always the configured budget).
    pub iterations: usize,
    /// Candidates accepted into the trajectory.
    pub accepted: usize,
}

/// Runs annealing problems to completion.
pub struct AnnealingRunner;

impl AnnealingRunner {
    /// Runs the full iteration budget, seeding an RNG from the config.
    pub fn run<P: AnnealingProblem>(
        problem: &P,
        initial: P::State,
        config: &AnnealingConfig,
    ) -> AnnealingResult<P::State> {
        let mut rng = match config.seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_os_rng(),
        };
        Self::run_with_rng(problem, initial, config, &mut rng)
    }

    /// Runs the full iteration budget with a caller-supplied RNG.
    ///
    /// The returned best state never costs more than the initial state.
    pub fn run_with_rng<P: AnnealingProblem, R: Rng>(
        problem: &P,
        initial: P::State,
        config: &AnnealingConfig,
        rng: &mut R,
    ) -> AnnealingResult<P::State> {
        let mut temperature = config.initial_temperature;
        let mut current = initial.clone();
        let mut best = initial;
        let mut best_cost = problem.cost(&best);
        let mut accepted = 0;

        for _ in 0..config.max_iterations {
            temperature *= config.cooling_rate;

            let candidate = problem.neighbor(&current, rng);
            let candidate_cost = problem.cost(&candidate);

            if accepts(candidate_cost, best_cost, temperature, rng) {
                current = candidate.clone();
                accepted += 1;
            }

            // Best tracking is independent of trajectory acceptance.
            if candidate_cost < best_cost {
                best = candidate;
                best_cost = candidate_cost;
            }
        }

        AnnealingResult {
            best,
            best_cost,
            iterations: config.max_iterations,
            accepted,
        }
    }
}

fn accepts<R: Rng>(candidate_cost: f64, best_cost: f64, temperature: f64, rng: &mut R) -> bool {
    if candidate_cost < best_cost {
        return true;
    }
    if temperature < MIN_TEMPERATURE {
        return false;
    }
    ((best_cost - candidate_cost) / temperature).exp() > rng.random::<f64>()
}
