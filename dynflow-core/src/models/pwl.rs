use super::rank::rank_strict;

/// A continuous piecewise-linear function of time, linearly extrapolated
/// outside its sampled domain.
///
/// Queue lengths are modeled this way. The function is linear between
/// consecutive breakpoints; before the first breakpoint it follows
/// `first_slope` and after the last breakpoint it follows `last_slope`, so
/// it is queryable at arbitrary real times, including slightly outside the
/// known sample range.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "PwlFunctionDto", into = "PwlFunctionDto")
)]
pub struct PwlFunction {
    times: Vec<f64>,
    values: Vec<f64>,
    first_slope: f64,
    last_slope: f64,
}

impl PwlFunction {
    /// Creates a new piecewise-linear function, validating all constraints
    pub fn new(
        times: Vec<f64>,
        values: Vec<f64>,
        first_slope: f64,
        last_slope: f64,
    ) -> Result<Self, PwlFunctionError> {
        Self::try_from(PwlFunctionDto {
            times,
            values,
            first_slope,
            last_slope,
        })
    }

    /// Creates a new piecewise-linear function without validating the samples
    ///
    /// # Safety
    ///
    /// This function bypasses all validation checks. The caller must
    /// guarantee the samples satisfy the constraints checked by
    /// [`PwlFunction::try_from`]: non-empty, equal lengths, all finite
    /// (slopes included), strictly increasing times.
    pub unsafe fn new_unchecked(
        times: Vec<f64>,
        values: Vec<f64>,
        first_slope: f64,
        last_slope: f64,
    ) -> Self {
        Self {
            times,
            values,
            first_slope,
            last_slope,
        }
    }

    /// The slope applicable to the segment identified by a strict rank.
    ///
    /// `None` (before the first breakpoint) yields `first_slope`; the last
    /// rank yields `last_slope`; interior ranks yield the secant slope of
    /// the segment.
    pub fn gradient(&self, rank: Option<usize>) -> f64 {
        match rank {
            None => self.first_slope,
            Some(rank) if rank == self.times.len() - 1 => self.last_slope,
            Some(rank) => {
                (self.values[rank + 1] - self.values[rank])
                    / (self.times[rank + 1] - self.times[rank])
            }
        }
    }

    /// Evaluates the function at `at`, extrapolating linearly outside the
    /// sampled domain.
    pub fn eval(&self, at: f64) -> f64 {
        let rank = rank_strict(&self.times, at);
        let gradient = self.gradient(rank);
        // Anchor at the sample opening the segment; for extrapolation the
        // anchor is the nearest boundary sample.
        let anchor = match rank {
            None => 0,
            Some(rank) => rank,
        };
        self.values[anchor] + (at - self.times[anchor]) * gradient
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
pub struct PwlFunctionDto {
    /// The breakpoint sequence, expected strictly increasing
    pub times: Vec<f64>,
    /// The sample values, one per breakpoint
    pub values: Vec<f64>,
    /// The extrapolation slope before the first breakpoint
    #[cfg_attr(feature = "serde", serde(rename = "firstSlope"))]
    pub first_slope: f64,
    /// The extrapolation slope after the last breakpoint
    #[cfg_attr(feature = "serde", serde(rename = "lastSlope"))]
    pub last_slope: f64,
}

impl Into<PwlFunctionDto> for PwlFunction {
    fn into(self) -> PwlFunctionDto {
        PwlFunctionDto {
            times: self.times,
            values: self.values,
            first_slope: self.first_slope,
            last_slope: self.last_slope,
        }
    }
}

impl TryFrom<PwlFunctionDto> for PwlFunction {
    type Error = PwlFunctionError;

    fn try_from(value: PwlFunctionDto) -> Result<Self, Self::Error> {
        if value.times.is_empty() || value.values.is_empty() {
            return Err(PwlFunctionError::Empty);
        }
        if value.times.len() != value.values.len() {
            return Err(PwlFunctionError::LengthMismatch);
        }

        let slopes = [value.first_slope, value.last_slope];
        for sample in value
            .times
            .iter()
            .chain(value.values.iter())
            .chain(slopes.iter())
        {
            if sample.is_nan() {
                return Err(PwlFunctionError::NaN);
            }
            if sample.is_infinite() {
                return Err(PwlFunctionError::Infinity);
            }
        }

        if value.times.windows(2).any(|pair| pair[0] >= pair[1]) {
            return Err(PwlFunctionError::NotIncreasing);
        }

        Ok(Self {
            times: value.times,
            values: value.values,
            first_slope: value.first_slope,
            last_slope: value.last_slope,
        })
    }
}

/// Errors that can occur when creating or validating a PwlFunction
#[derive(Debug, PartialEq, thiserror::Error)]
pub enum PwlFunctionError {
    /// Error when no samples are provided
    #[error("No samples provided")]
    Empty,
    /// Error when times and values differ in length
    #[error("Times and values differ in length")]
    LengthMismatch,
    /// Error when any sample or slope is NaN
    #[error("NaN value encountered")]
    NaN,
    /// Error when any sample or slope is infinite
    #[error("Times, values and slopes cannot be infinite")]
    Infinity,
    /// Error when times are not strictly increasing
    #[error("Times are not strictly increasing")]
    NotIncreasing,
}
