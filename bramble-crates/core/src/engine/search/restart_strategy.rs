use crate::basic_types::sequence_generators::ConstantSequence;
use crate::basic_types::sequence_generators::GeometricSequence;
use crate::basic_types::sequence_generators::LubySequence;
use crate::basic_types::sequence_generators::SequenceGenerator;
use crate::basic_types::sequence_generators::SequenceGeneratorType;

/// When the search should abandon the current tree and start again from the root.
///
/// Restarts are counted in failures. A restart keeps the model as posted (and the objective cut
/// of the best solution found so far), so it only pays off when the brancher makes different
/// choices after it, e.g. because it is randomised.
#[derive(Debug, Clone, Copy)]
pub struct RestartOptions {
    /// The sequence of restart intervals; [`None`] disables restarts.
    pub sequence_generator_type: Option<SequenceGeneratorType>,
    /// The multiplier of the sequence; constant restarts with base interval 100 restart every
    /// 100 failures.
    pub base_interval: u64,
    /// The factor of the geometric sequence.
    pub geometric_coef: f64,
}

impl Default for RestartOptions {
    fn default() -> Self {
        Self {
            sequence_generator_type: None,
            base_interval: 100,
            geometric_coef: 1.5,
        }
    }
}

#[derive(Debug)]
pub(crate) struct RestartStrategy {
    /// [`None`] when restarts are disabled.
    sequence_generator: Option<Box<dyn SequenceGenerator>>,
    /// Whether the current solve call allows restarts at all.
    enabled: bool,
    failures_since_restart: u64,
    failures_until_restart: u64,
}

impl Default for RestartStrategy {
    fn default() -> Self {
        RestartStrategy::new(RestartOptions::default())
    }
}

impl RestartStrategy {
    pub(crate) fn new(options: RestartOptions) -> Self {
        let mut sequence_generator = options.sequence_generator_type.map(|sequence_type| {
            let base_interval = options.base_interval.max(1) as i64;
            let generator: Box<dyn SequenceGenerator> = match sequence_type {
                SequenceGeneratorType::Constant => Box::new(ConstantSequence::new(base_interval)),
                SequenceGeneratorType::Geometric => Box::new(GeometricSequence::new(
                    base_interval,
                    options.geometric_coef,
                )),
                SequenceGeneratorType::Luby => Box::new(LubySequence::new(base_interval)),
            };
            generator
        });

        let failures_until_restart = sequence_generator
            .as_mut()
            .map_or(u64::MAX, |generator| generator.next().max(1) as u64);

        RestartStrategy {
            sequence_generator,
            enabled: false,
            failures_since_restart: 0,
            failures_until_restart,
        }
    }

    pub(crate) fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    pub(crate) fn notify_failure(&mut self) {
        self.failures_since_restart += 1;
    }

    pub(crate) fn should_restart(&self) -> bool {
        self.enabled
            && self.sequence_generator.is_some()
            && self.failures_since_restart >= self.failures_until_restart
    }

    pub(crate) fn notify_restart(&mut self) {
        self.failures_since_restart = 0;
        if let Some(generator) = self.sequence_generator.as_mut() {
            self.failures_until_restart = generator.next().max(1) as u64;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strategy(
        sequence_generator_type: SequenceGeneratorType,
        base_interval: u64,
    ) -> RestartStrategy {
        let mut strategy = RestartStrategy::new(RestartOptions {
            sequence_generator_type: Some(sequence_generator_type),
            base_interval,
            geometric_coef: 2.0,
        });
        strategy.set_enabled(true);
        strategy
    }

    fn failures_until_restart(strategy: &mut RestartStrategy) -> u64 {
        let mut failures = 0;
        while !strategy.should_restart() {
            strategy.notify_failure();
            failures += 1;
        }
        strategy.notify_restart();
        failures
    }

    #[test]
    fn constant_restarts_are_evenly_spaced() {
        let mut strategy = strategy(SequenceGeneratorType::Constant, 3);
        let intervals = (0..3)
            .map(|_| failures_until_restart(&mut strategy))
            .collect::<Vec<_>>();

        assert_eq!(intervals, vec![3, 3, 3]);
    }

    #[test]
    fn luby_restarts_follow_the_luby_sequence() {
        let mut strategy = strategy(SequenceGeneratorType::Luby, 2);
        let intervals = (0..7)
            .map(|_| failures_until_restart(&mut strategy))
            .collect::<Vec<_>>();

        assert_eq!(intervals, vec![2, 2, 4, 2, 2, 4, 8]);
    }

    #[test]
    fn geometric_restarts_grow() {
        let mut strategy = strategy(SequenceGeneratorType::Geometric, 2);
        let intervals = (0..3)
            .map(|_| failures_until_restart(&mut strategy))
            .collect::<Vec<_>>();

        assert_eq!(intervals, vec![2, 4, 8]);
    }

    #[test]
    fn disabled_strategies_never_restart() {
        let mut strategy = strategy(SequenceGeneratorType::Constant, 1);
        strategy.set_enabled(false);
        strategy.notify_failure();
        strategy.notify_failure();

        assert!(!strategy.should_restart());
    }

    #[test]
    fn no_sequence_means_no_restarts() {
        let mut strategy = RestartStrategy::default();
        strategy.set_enabled(true);
        for _ in 0..1000 {
            strategy.notify_failure();
        }

        assert!(!strategy.should_restart());
    }
}
