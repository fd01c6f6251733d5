//! Local-randomization window adapter.
//!
//! ## Purpose
//!
//! Randomization inference treats the observations inside a small window
//! around the cutoff as if assigned at random. This adapter prepares the
//! per-row inputs such an analysis needs: membership in the window, counts
//! on each side of the cutoff, and Bernoulli assignment probabilities.
//!
//! ## Design notes
//!
//! * The cutoff defaults to 0 (a centered score). Placebo analyses set
//!   another cutoff; rows with `x >= cutoff` are on the treated side.
//! * A symmetric window is centered on the cutoff.
//! * Window bounds, the cutoff and the assignment probability are
//!   validated once, in `build()`. The cutoff must lie inside the window.
//!
//! ## Non-goals
//!
//! * This adapter does not select windows or run randomization tests.

use log::debug;
use num_traits::Float;

use crate::algorithms::window::{bernoulli_probability, Window};
use crate::api::NormalizerBuilder;
use crate::engine::executor::row_pass;
use crate::engine::validator::Validator;
use crate::primitives::errors::NormalizeError;
use crate::primitives::input::ScoreInput;

/// Default Bernoulli assignment probability inside the window.
const DEFAULT_PROBABILITY: f64 = 0.5;

// ============================================================================
// Builder
// ============================================================================

/// Builder for a local-randomization window.
#[derive(Debug, Clone)]
pub struct LocalWindowBuilder<T> {
    /// Run row passes in parallel.
    pub parallel: bool,

    /// Explicit window bounds.
    pub window: Option<Window<T>>,

    /// Half-width of a window centered on the cutoff.
    pub half_width: Option<T>,

    /// Cutoff splitting control from treated rows (default: 0).
    pub cutoff: Option<T>,

    /// Assignment probability inside the window (default: 0.5).
    pub probability: Option<T>,

    /// First parameter set more than once.
    pub(crate) duplicate_param: Option<&'static str>,
}

impl<T: Float> LocalWindowBuilder<T> {
    pub(crate) fn from_shared(shared: NormalizerBuilder<T>) -> Self {
        Self {
            parallel: shared.parallel_or_default(),
            window: None,
            half_width: None,
            cutoff: None,
            probability: None,
            duplicate_param: shared.duplicate_param,
        }
    }

    fn mark(&mut self, set: bool, name: &'static str) {
        if set && self.duplicate_param.is_none() {
            self.duplicate_param = Some(name);
        }
    }

    /// Set the window `[left, right]`.
    pub fn window(mut self, left: T, right: T) -> Self {
        self.mark(self.has_window(), "window");
        self.window = Some(Window::new(left, right));
        self
    }

    /// Set the window `[cutoff - half_width, cutoff + half_width]`.
    pub fn symmetric(mut self, half_width: T) -> Self {
        self.mark(self.has_window(), "window");
        self.half_width = Some(half_width);
        self
    }

    /// Set the cutoff inside the window.
    pub fn cutoff(mut self, cutoff: T) -> Self {
        self.mark(self.cutoff.is_some(), "cutoff");
        self.cutoff = Some(cutoff);
        self
    }

    fn has_window(&self) -> bool {
        self.window.is_some() || self.half_width.is_some()
    }

    /// Set the Bernoulli assignment probability.
    pub fn probability(mut self, p: T) -> Self {
        self.mark(self.probability.is_some(), "probability");
        self.probability = Some(p);
        self
    }

    /// Build the window processor.
    pub fn build(self) -> Result<LocalWindow<T>, NormalizeError> {
        Validator::validate_no_duplicates(self.duplicate_param)?;
        let cutoff = self.cutoff.unwrap_or_else(T::zero);
        let window = match (self.window, self.half_width) {
            (Some(window), _) => window,
            (None, Some(h)) => Window::around(cutoff, h),
            (None, None) => {
                return Err(NormalizeError::InvalidInput(
                    "window bounds not set".to_string(),
                ))
            }
        };
        Validator::validate_window(&window)?;
        Validator::validate_window_cutoff(&window, cutoff)?;

        let probability = match self.probability {
            Some(p) => p,
            None => T::from(DEFAULT_PROBABILITY).unwrap_or_else(T::nan),
        };
        Validator::validate_probability(probability)?;

        Ok(LocalWindow {
            window,
            cutoff,
            probability,
            parallel: self.parallel,
        })
    }
}

// ============================================================================
// Processor
// ============================================================================

/// Observation counts inside a window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowCounts {
    /// Rows inside the window below the cutoff.
    pub control: usize,

    /// Rows inside the window at or above the cutoff.
    pub treated: usize,
}

impl WindowCounts {
    /// Total rows inside the window.
    pub fn total(&self) -> usize {
        self.control + self.treated
    }
}

/// A validated local-randomization window.
#[derive(Debug, Clone, Copy)]
pub struct LocalWindow<T> {
    window: Window<T>,
    cutoff: T,
    probability: T,
    parallel: bool,
}

impl<T: Float + Send + Sync> LocalWindow<T> {
    /// The window bounds.
    pub fn window(&self) -> Window<T> {
        self.window
    }

    /// The cutoff splitting control from treated rows.
    pub fn cutoff(&self) -> T {
        self.cutoff
    }

    /// The assignment probability inside the window.
    pub fn probability(&self) -> T {
        self.probability
    }

    /// Indices of rows inside the window.
    pub fn rows<I>(&self, x: &I) -> Result<Vec<usize>, NormalizeError>
    where
        I: ScoreInput<T> + ?Sized,
    {
        let x = x.as_score_slice()?;
        Ok(x.iter()
            .enumerate()
            .filter(|&(_, &v)| self.window.contains(v))
            .map(|(i, _)| i)
            .collect())
    }

    /// Counts inside the window on each side of the cutoff.
    pub fn counts<I>(&self, x: &I) -> Result<WindowCounts, NormalizeError>
    where
        I: ScoreInput<T> + ?Sized,
    {
        let x = x.as_score_slice()?;
        let mut counts = WindowCounts {
            control: 0,
            treated: 0,
        };
        for &v in x.iter().filter(|&&v| self.window.contains(v)) {
            if v >= self.cutoff {
                counts.treated += 1;
            } else {
                counts.control += 1;
            }
        }
        debug!(
            "window: {} of {} rows inside ({} control, {} treated)",
            counts.total(),
            x.len(),
            counts.control,
            counts.treated
        );
        Ok(counts)
    }

    /// Per-row Bernoulli assignment probabilities: `p` inside, NaN outside.
    pub fn bernoulli_probabilities<I>(&self, x: &I) -> Result<Vec<T>, NormalizeError>
    where
        I: ScoreInput<T> + ?Sized,
    {
        let x = x.as_score_slice()?;
        let window = self.window;
        let p = self.probability;
        Ok(row_pass(x.len(), self.parallel, |i| {
            bernoulli_probability(x[i], &window, p)
        }))
    }
}
