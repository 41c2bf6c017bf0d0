//! Pipeline options building on the shared `config` crate.
//!
//! Tolerances come from [`GlobalConfig`]; this module adds the knobs that
//! only the triangulation pipeline cares about.

use config::constants::{ConfigError, GlobalConfig};

use crate::basis::BasisStrategy;

/// Options for [`triangulate_solid_with`](crate::triangulate_solid_with).
///
/// # Examples
/// ```
/// use earcut3d::Options;
/// let opts = Options::default();
/// assert_eq!(opts.weld_threshold(), 0.01);
/// assert!(!opts.parallel);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Options {
    /// Validated tolerances.
    pub config: GlobalConfig,
    /// How each face's basis is seeded.
    pub basis: BasisStrategy,
    /// Triangulate faces on the rayon pool.
    pub parallel: bool,
}

impl Options {
    /// Creates options with an explicit weld threshold.
    ///
    /// # Examples
    /// ```
    /// use earcut3d::Options;
    /// assert!(Options::with_weld_threshold(0.0).is_err());
    /// assert_eq!(Options::with_weld_threshold(1e-4).unwrap().weld_threshold(), 1e-4);
    /// ```
    pub fn with_weld_threshold(weld_threshold: f64) -> Result<Self, ConfigError> {
        let defaults = GlobalConfig::default();
        Ok(Self {
            config: GlobalConfig::new(weld_threshold, defaults.parallel_tolerance)?,
            ..Self::default()
        })
    }

    /// Returns a copy that seeds bases with `strategy`.
    pub fn basis(mut self, strategy: BasisStrategy) -> Self {
        self.basis = strategy;
        self
    }

    /// Returns a copy with parallel face triangulation switched on or off.
    pub fn parallel(mut self, enabled: bool) -> Self {
        self.parallel = enabled;
        self
    }

    /// Distance under which vertices are welded.
    #[inline]
    pub fn weld_threshold(&self) -> f64 {
        self.config.weld_threshold
    }

    /// Cosine tolerance of the near-parallel test.
    #[inline]
    pub fn parallel_tolerance(&self) -> f64 {
        self.config.parallel_tolerance
    }
}
