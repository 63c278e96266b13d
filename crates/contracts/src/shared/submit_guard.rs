/// Refuses a second submission while the first one is still outstanding
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SubmitGuard {
    in_flight: bool,
}

impl SubmitGuard {
    /// Returns `false` when a submission is already running
    pub fn try_begin(&mut self) -> bool {
        if self.in_flight {
            return false;
        }
        self.in_flight = true;
        true
    }

    pub fn finish(&mut self) {
        self.in_flight = false;
    }

    pub fn is_in_flight(&self) -> bool {
        self.in_flight
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_second_begin_is_refused() {
        let mut guard = SubmitGuard::default();
        assert!(guard.try_begin());
        assert!(guard.is_in_flight());
        assert!(!guard.try_begin());

        guard.finish();
        assert!(!guard.is_in_flight());
        assert!(guard.try_begin());
    }
}
