//! Statistics gathered by the solver and the way they are logged.
mod statistic_logger;
mod statistic_logging;

use std::fmt::Display;

pub use statistic_logger::StatisticLogger;
pub use statistic_logging::configure_statistic_logging;
pub use statistic_logging::log_statistic;
pub use statistic_logging::log_statistic_postfix;
pub use statistic_logging::should_log_statistics;
pub use statistic_logging::StatisticOptions;

/// Something that can be written through a [`StatisticLogger`].
///
/// See [`create_statistics_struct!`](crate::create_statistics_struct) for creating a statistics
/// struct with this trait implemented.
pub trait Statistic {
    fn log(&self, statistic_logger: StatisticLogger);
}

impl<Value: Display> Statistic for Value {
    fn log(&self, statistic_logger: StatisticLogger) {
        statistic_logger.log_statistic(self);
    }
}

/// Generates a struct of counters which logs every field under its own name.
///
/// # Example
/// ```rust
/// # use bramble_core::create_statistics_struct;
/// create_statistics_struct!(pub Statistics {
///     number_of_calls: u64
/// });
///
/// let statistics = Statistics::default();
///
/// assert_eq!(statistics.number_of_calls, 0);
/// ```
#[macro_export]
macro_rules! create_statistics_struct {
    ($(#[$struct_documentation:meta])* $vis:vis $name:ident {
        $($(#[$variable_documentation:meta])* $field:ident : $type:ty),+ $(,)?
    }) => {
        $(#[$struct_documentation])*
        #[derive(Default, Debug, Copy, Clone, PartialEq, Eq)]
        $vis struct $name {
            $($(#[$variable_documentation])* $vis $field: $type),+
        }

        impl $crate::statistics::Statistic for $name {
            fn log(&self, statistic_logger: $crate::statistics::StatisticLogger) {
                $(
                    $crate::statistics::Statistic::log(
                        &self.$field,
                        statistic_logger.attach_to_prefix(stringify!($field)),
                    );
                )+
            }
        }
    };
}
