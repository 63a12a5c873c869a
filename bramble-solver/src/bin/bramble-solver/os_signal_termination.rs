use std::sync::atomic::AtomicBool;
use std::sync::atomic::Ordering;
use std::sync::Arc;

use bramble_solver::termination::TerminationCondition;
use log::warn;

/// A [`TerminationCondition`] which triggers once the process receives SIGINT or SIGTERM.
#[derive(Clone, Debug)]
pub(crate) struct OsSignal {
    signal_received: Arc<AtomicBool>,
}

impl OsSignal {
    /// Create the condition and register it with the signal handlers.
    pub(crate) fn install() -> OsSignal {
        const TERMINATION_SIGNALS: &[std::ffi::c_int] =
            &[signal_hook::consts::SIGINT, signal_hook::consts::SIGTERM];

        let signal_termination = OsSignal {
            signal_received: Arc::new(AtomicBool::new(false)),
        };

        for &signal in TERMINATION_SIGNALS {
            if let Err(error) =
                signal_hook::flag::register(signal, Arc::clone(&signal_termination.signal_received))
            {
                warn!("Could not listen for signal {signal}: {error}");
            }
        }

        signal_termination
    }
}

impl TerminationCondition for OsSignal {
    fn should_stop(&mut self) -> bool {
        self.signal_received.load(Ordering::Relaxed)
    }
}
