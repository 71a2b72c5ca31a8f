use crate::domain::errors::{BenchmarkError, BenchmarkResult};
use std::cell::Cell;
use std::marker::PhantomData;

thread_local! {
    static RUN_ACTIVE: Cell<bool> = const { Cell::new(false) };
}

/// Exclusive claim on the page's canvas and GPU for one benchmark run.
///
/// Probes of two runs must never interleave, so a second run is refused
/// while a ticket is alive. Dropping the ticket frees the slot.
#[must_use = "the slot is released as soon as the ticket is dropped"]
#[derive(Debug)]
pub struct RunTicket {
    _single_thread: PhantomData<*const ()>,
}

impl RunTicket {
    pub fn acquire() -> BenchmarkResult<Self> {
        RUN_ACTIVE.with(|active| {
            if active.replace(true) {
                Err(BenchmarkError::Configuration("benchmark already running".to_string()))
            } else {
                Ok(Self { _single_thread: PhantomData })
            }
        })
    }

    /// Whether some run currently holds the slot
    pub fn is_taken() -> bool {
        RUN_ACTIVE.with(Cell::get)
    }
}

impl Drop for RunTicket {
    fn drop(&mut self) {
        RUN_ACTIVE.with(|active| active.set(false));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn second_claim_is_refused_until_release() {
        let first = RunTicket::acquire().unwrap();
        assert!(RunTicket::is_taken());
        assert_eq!(
            RunTicket::acquire().unwrap_err(),
            BenchmarkError::Configuration("benchmark already running".to_string())
        );

        drop(first);
        assert!(!RunTicket::is_taken());
        assert!(RunTicket::acquire().is_ok());
    }
}
