use std::sync::atomic::AtomicBool;
use std::sync::atomic::Ordering;
use std::sync::mpsc;
use std::sync::mpsc::RecvTimeoutError;
use std::sync::Arc;
use std::thread::JoinHandle;
use std::time::Duration;

use log::warn;

use super::TerminationCondition;

/// A time limit enforced by a separate thread, which raises a shared flag when the budget runs
/// out. Polling only reads the flag.
///
/// Dropping the timer stops the thread.
#[derive(Debug)]
pub struct BackgroundTimer {
    expired: Arc<AtomicBool>,
    cancel: Option<mpsc::Sender<()>>,
    handle: Option<JoinHandle<()>>,
}

impl BackgroundTimer {
    pub fn start(budget: Duration) -> BackgroundTimer {
        let expired = Arc::new(AtomicBool::new(false));
        let (cancel, cancelled) = mpsc::channel::<()>();

        let flag = Arc::clone(&expired);
        let handle = std::thread::spawn(move || {
            if let Err(RecvTimeoutError::Timeout) = cancelled.recv_timeout(budget) {
                flag.store(true, Ordering::Relaxed);
            }
        });

        BackgroundTimer {
            expired,
            cancel: Some(cancel),
            handle: Some(handle),
        }
    }

    /// The flag raised when the budget has been used up.
    pub fn flag(&self) -> Arc<AtomicBool> {
        Arc::clone(&self.expired)
    }
}

impl TerminationCondition for BackgroundTimer {
    fn should_stop(&mut self) -> bool {
        self.expired.load(Ordering::Relaxed)
    }
}

impl Drop for BackgroundTimer {
    fn drop(&mut self) {
        if let Some(cancel) = self.cancel.take() {
            let _ = cancel.send(());
        }
        if let Some(handle) = self.handle.take() {
            if handle.join().is_err() {
                warn!("The background timer thread could not be joined");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flag_is_raised_after_the_budget() {
        let mut timer = BackgroundTimer::start(Duration::from_millis(10));
        std::thread::sleep(Duration::from_millis(200));

        assert!(timer.should_stop());
    }

    #[test]
    fn dropping_before_expiry_does_not_block() {
        let timer = BackgroundTimer::start(Duration::from_secs(3600));
        let flag = timer.flag();
        drop(timer);

        assert!(!flag.load(Ordering::Relaxed));
    }
}
