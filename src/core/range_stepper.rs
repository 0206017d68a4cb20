use crate::errors::AppError;
use std::cmp::Ordering;
use log::{debug, warn};

pub const DEFAULT_CLASSES: i64 = 20;

/// A half-open interval `[start, stop)` split into `classes` equal steps.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RangeParams {
    pub start: f64,
    pub stop: f64,
    pub classes: i64,
}

impl RangeParams {
    pub fn new(start: f64, stop: f64, classes: i64) -> Self {
        RangeParams { start, stop, classes }
    }

    pub fn step(&self) -> Result<f64, AppError> {
        if self.classes == 0 {
            return Err(AppError::DivisionByZero);
        }
        Ok((self.stop - self.start) / self.classes as f64)
    }

    /// Returns the values `start, start + step, ...` while they stay below `stop`.
    ///
    /// A range that starts below `stop` but can never reach it (non-positive
    /// or NaN step, or a step too small to change `start`) is reported as
    /// [`AppError::NonTerminatingRange`] instead of looping forever.
    pub fn steps(&self) -> Result<RangeSteps, AppError> {
        let step = self.step()?;
        debug!("Range [{}, {}) in {} classes gives step {}", self.start, self.stop, self.classes, step);

        if self.start < self.stop && (step.is_nan() || step <= 0.0 || self.start + step <= self.start) {
            warn!(
                "⚠️ Range start {} < stop {} but step {} never advances; refusing to loop forever.",
                self.start, self.stop, step
            );
            return Err(self.non_terminating(step));
        }

        Ok(RangeSteps { params: *self, current: self.start, step, state: StepState::Running })
    }

    fn non_terminating(&self, step: f64) -> AppError {
        AppError::NonTerminatingRange { start: self.start, stop: self.stop, step }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum StepState {
    Running,
    Stalled,
    Done,
}

/// Values are accumulated by repeated addition, so floating-point drift can
/// yield one value more than `classes`.
///
/// If the step stops changing the accumulated value before `stop` is
/// reached, the last value is followed by a single
/// [`AppError::NonTerminatingRange`] and the iterator ends.
#[derive(Debug, Clone)]
pub struct RangeSteps {
    params: RangeParams,
    current: f64,
    step: f64,
    state: StepState,
}

impl Iterator for RangeSteps {
    type Item = Result<f64, AppError>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.state {
            StepState::Done => return None,
            StepState::Stalled => {
                self.state = StepState::Done;
                warn!("⚠️ Step {} no longer advances past {}; aborting sequence.", self.step, self.current);
                return Some(Err(self.params.non_terminating(self.step)));
            }
            StepState::Running => {}
        }

        if self.current.partial_cmp(&self.params.stop) != Some(Ordering::Less) {
            self.state = StepState::Done;
            return None;
        }
        let value = self.current;
        let next = self.current + self.step;
        if next <= self.current {
            self.state = StepState::Stalled;
        } else {
            self.current = next;
        }
        Some(Ok(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collect(start: f64, stop: f64, classes: i64) -> Vec<f64> {
        RangeParams::new(start, stop, classes)
            .steps()
            .unwrap()
            .collect::<Result<Vec<_>, _>>()
            .unwrap()
    }

    #[test]
    fn even_split_of_zero_to_ten() {
        assert_eq!(collect(0.0, 10.0, 5), vec![0.0, 2.0, 4.0, 6.0, 8.0]);
    }

    #[test]
    fn default_classes_gives_twenty_values() {
        let values = collect(0.0, 1.0, DEFAULT_CLASSES);
        assert_eq!(values.len(), 20);
        assert_eq!(values[0], 0.0);
        assert_eq!(values[1], 0.05);
    }

    #[test]
    fn zero_classes_is_division_by_zero() {
        let params = RangeParams::new(0.0, 10.0, 0);
        assert!(matches!(params.step(), Err(AppError::DivisionByZero)));
        assert!(matches!(params.steps(), Err(AppError::DivisionByZero)));
    }

    #[test]
    fn empty_when_start_not_below_stop() {
        assert!(collect(5.0, 5.0, 4).is_empty());
        assert!(collect(10.0, 0.0, 5).is_empty());
    }

    #[test]
    fn negative_classes_are_flagged() {
        let err = RangeParams::new(0.0, 10.0, -5).steps().unwrap_err();
        match err {
            AppError::NonTerminatingRange { step, .. } => assert_eq!(step, -2.0),
            other => panic!("unexpected error {:?}", other),
        }
    }

    #[test]
    fn negative_classes_on_inverted_range_are_empty() {
        // step is positive here, and start is already past stop
        assert!(collect(10.0, 0.0, -5).is_empty());
    }

    #[test]
    fn accumulation_drift_matches_repeated_addition() {
        let values = collect(0.0, 1.0, 10);
        let mut expected = Vec::new();
        let mut current = 0.0_f64;
        while current < 1.0 {
            expected.push(current);
            current += 0.1;
        }
        assert_eq!(values, expected);
        assert_eq!(values.len(), 11);
    }

    #[test]
    fn step_too_small_for_start_is_flagged() {
        // 1e16 + 0.5 rounds back to 1e16
        let err = RangeParams::new(1e16, 1e16 + 2.0, 4).steps().unwrap_err();
        match err {
            AppError::NonTerminatingRange { start, step, .. } => {
                assert_eq!(start, 1e16);
                assert_eq!(step, 0.5);
            }
            other => panic!("unexpected error {:?}", other),
        }
    }

    #[test]
    fn step_vanishing_midway_ends_with_error() {
        // step 0.75 advances below 2^53 (ulp 1) but not at 2^53 (ulp 2)
        let params = RangeParams::new(9007199254740990.0, 9007199254740996.0, 8);
        let mut steps = params.steps().unwrap();
        assert_eq!(steps.next().unwrap().unwrap(), 9007199254740990.0);
        assert_eq!(steps.next().unwrap().unwrap(), 9007199254740991.0);
        assert_eq!(steps.next().unwrap().unwrap(), 9007199254740992.0);
        match steps.next() {
            Some(Err(AppError::NonTerminatingRange { step, .. })) => assert_eq!(step, 0.75),
            other => panic!("expected NonTerminatingRange, got {:?}", other),
        }
        assert!(steps.next().is_none());
    }
}
