use super::rank::rank_left;

/// A right-continuous piecewise-constant function of time.
///
/// Outflow rates are modeled this way: the function holds each sample value
/// from the moment of its breakpoint until just before the next breakpoint.
/// Before the first breakpoint it holds the first value, and the last value
/// persists indefinitely.
///
/// Immutable after construction; `eval` assumes validated samples and never
/// fails.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "StepFunctionDto", into = "StepFunctionDto")
)]
pub struct StepFunction {
    times: Vec<f64>,
    values: Vec<f64>,
}

impl StepFunction {
    /// Creates a new step function, validating all constraints
    pub fn new(times: Vec<f64>, values: Vec<f64>) -> Result<Self, StepFunctionError> {
        Self::try_from(StepFunctionDto { times, values })
    }

    /// Creates a new step function without validating the samples
    ///
    /// # Safety
    ///
    /// This function bypasses all validation checks. The caller must
    /// guarantee the samples satisfy the constraints checked by
    /// [`StepFunction::try_from`]: non-empty, equal lengths, all finite,
    /// strictly increasing times. The rank search underneath `eval` has
    /// undefined behavior on unsorted times.
    pub unsafe fn new_unchecked(times: Vec<f64>, values: Vec<f64>) -> Self {
        Self { times, values }
    }

    /// Evaluates the function at `at`.
    ///
    /// The value changes exactly at each breakpoint, inclusive of the
    /// breakpoint itself (left-biased rank).
    pub fn eval(&self, at: f64) -> f64 {
        match rank_left(&self.times, at) {
            None => self.values[0],
            Some(rank) => self.values[rank],
        }
    }

    /// The breakpoint sequence, strictly increasing.
    pub fn times(&self) -> &[f64] {
        &self.times
    }

    /// The sample values, one per breakpoint.
    pub fn values(&self) -> &[f64] {
        &self.values
    }
}

/// DTO to ensure that we always validate when we deserialize from an untrusted source
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug)]
pub struct StepFunctionDto {
    /// The breakpoint sequence, expected strictly increasing
    pub times: Vec<f64>,
    /// The sample values, one per breakpoint
    pub values: Vec<f64>,
}

impl Into<StepFunctionDto> for StepFunction {
    fn into(self) -> StepFunctionDto {
        StepFunctionDto {
            times: self.times,
            values: self.values,
        }
    }
}

impl TryFrom<StepFunctionDto> for StepFunction {
    type Error = StepFunctionError;

    fn try_from(value: StepFunctionDto) -> Result<Self, Self::Error> {
        if value.times.is_empty() || value.values.is_empty() {
            return Err(StepFunctionError::Empty);
        }
        if value.times.len() != value.values.len() {
            return Err(StepFunctionError::LengthMismatch);
        }

        for sample in value.times.iter().chain(value.values.iter()) {
            if sample.is_nan() {
                return Err(StepFunctionError::NaN);
            }
            if sample.is_infinite() {
                return Err(StepFunctionError::Infinity);
            }
        }

        if value.times.windows(2).any(|pair| pair[0] >= pair[1]) {
            return Err(StepFunctionError::NotIncreasing);
        }

        Ok(Self {
            times: value.times,
            values: value.values,
        })
    }
}

/// Errors that can occur when creating or validating a StepFunction
#[derive(Debug, PartialEq, thiserror::Error)]
pub enum StepFunctionError {
    /// Error when no samples are provided
    #[error("No samples provided")]
    Empty,
    /// Error when times and values differ in length
    #[error("Times and values differ in length")]
    LengthMismatch,
    /// Error when any sample is NaN
    #[error("NaN value encountered")]
    NaN,
    /// Error when any sample is infinite
    #[error("Times and values cannot be infinite")]
    Infinity,
    /// Error when times are not strictly increasing
    #[error("Times are not strictly increasing")]
    NotIncreasing,
}
