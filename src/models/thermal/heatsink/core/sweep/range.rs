use crate::models::thermal::heatsink::core::HeatsinkError;

/// Largest number of points a sweep range may produce.
pub const MAX_SWEEP_POINTS: usize = 10_000;

/// Which ambient quantity a sweep varies, in display units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SweepVariable {
    /// Ambient temperature in °C at fixed humidity.
    Ambient,

    /// Relative humidity in percent at fixed ambient temperature.
    Humidity,
}

/// Inclusive, evenly stepped range of one [`SweepVariable`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SweepRange {
    variable: SweepVariable,
    start: f64,
    step: f64,
    count: usize,

    /// Last value; exactly `stop` when the steps land on it.
    last: f64,
}

impl SweepRange {
    /// Ambient temperatures from `start` to `stop` °C inclusive.
    ///
    /// # Errors
    ///
    /// Returns [`HeatsinkError::InvalidInput`] for a non-positive step, a
    /// reversed or non-finite range, or more than [`MAX_SWEEP_POINTS`] points.
    pub fn ambient(start: f64, stop: f64, step: f64) -> Result<Self, HeatsinkError> {
        Self::new(SweepVariable::Ambient, start, stop, step)
    }

    /// Relative humidities from `start` to `stop` percent inclusive.
    ///
    /// # Errors
    ///
    /// As [`SweepRange::ambient`], and if either end lies outside 0–100 %.
    pub fn humidity(start: f64, stop: f64, step: f64) -> Result<Self, HeatsinkError> {
        for (field, value) in [("sweep.start", start), ("sweep.stop", stop)] {
            if !(0.0..=100.0).contains(&value) {
                return Err(HeatsinkError::invalid_input(
                    field,
                    format!("humidity of {value} % is outside 0–100 %"),
                ));
            }
        }
        Self::new(SweepVariable::Humidity, start, stop, step)
    }

    fn new(variable: SweepVariable, start: f64, stop: f64, step: f64) -> Result<Self, HeatsinkError> {
        if !(start.is_finite() && stop.is_finite()) {
            return Err(HeatsinkError::invalid_input("sweep.range", "bounds must be finite"));
        }
        if !(step > 0.0 && step.is_finite()) {
            return Err(HeatsinkError::invalid_input(
                "sweep.step",
                format!("must be positive, got {step}"),
            ));
        }
        if stop < start {
            return Err(HeatsinkError::invalid_input(
                "sweep.range",
                format!("stop {stop} is below start {start}"),
            ));
        }

        let exact = (stop - start) / step;
        let intervals = (exact + 1e-9).floor();
        let limit = MAX_SWEEP_POINTS as f64;
        if intervals >= limit {
            return Err(HeatsinkError::invalid_input(
                "sweep.step",
                format!("range would produce more than {MAX_SWEEP_POINTS} points"),
            ));
        }
        let count = intervals as usize + 1;
        let last = if (exact - intervals).abs() <= 1e-9 {
            stop
        } else {
            (start + intervals * step).min(stop)
        };

        Ok(Self {
            variable,
            start,
            step,
            count,
            last,
        })
    }

    #[must_use]
    pub fn variable(&self) -> SweepVariable {
        self.variable
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.count
    }

    /// Always `false`; a valid range holds at least its start.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Values in order; a fresh iterator on every call.
    pub fn values(&self) -> impl Iterator<Item = f64> + '_ {
        (0..self.count).map(|i| {
            if i + 1 == self.count {
                self.last
            } else {
                (self.start + i as f64 * self.step).min(self.last)
            }
        })
    }
}
