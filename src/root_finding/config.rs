//! Shared configuration for root-finding algorithms.
//!
//! Provides [`CommonCfg`] with default tolerance and iteration limit,
//! used by all root-finding configs.
//!
//! [`CommonCfg`] : universal fields
//! ├ `tolerance` : threshold on the residual and on the step/width
//! └ `max_iter`  : iteration cap
//!
//! [`CommonCfg::new`] initializes configuration with default values.
//!
//! Some algorithms have additional config arguments
//! (e.g. `delta` for modified secant, `fd_step` for newton).


pub const DEFAULT_TOLERANCE : f64   = 1e-4;
pub const DEFAULT_MAX_ITER  : usize = 50;
pub const DEFAULT_DELTA     : f64   = 0.01;
pub const DEFAULT_FD_STEP   : f64   = 1e-8;

/// Magnitude below which a denominator or derivative is treated as zero.
pub const DEGENERACY_THRESHOLD: f64 = 1e-12;


#[derive(Debug, Copy, Clone, PartialEq)]
pub struct CommonCfg {
    tolerance: f64,
    max_iter:  usize,
}

impl CommonCfg {
    pub fn new() -> Self {
        Self {
            tolerance : DEFAULT_TOLERANCE,
            max_iter  : DEFAULT_MAX_ITER,
        }
    }

    // getters
    pub fn tolerance(&self) -> f64   { self.tolerance }
    pub fn max_iter(&self)  -> usize { self.max_iter }

    // setters (internal)
    pub(crate) fn with_tolerance(&mut self, v: f64)   { self.tolerance = v; }
    pub(crate) fn with_max_iter (&mut self, v: usize) { self.max_iter  = v; }
}

impl Default for CommonCfg {
    fn default() -> Self { Self::new() }
}

macro_rules! impl_common_cfg {
    ($cfg:ty) => {
        impl $cfg {
            pub fn set_tolerance(
                mut self, v: f64
            ) -> Result<Self, $crate::root_finding::errors::ConfigError> {
                if !v.is_finite() || v <= 0.0 {
                    return Err(
                        $crate::root_finding::errors::ConfigError::InvalidTolerance { got: v }
                    );
                }
                self.common.with_tolerance(v);
                Ok(self)
            }
            pub fn set_max_iter(
                mut self, v: usize
            ) -> Result<Self, $crate::root_finding::errors::ConfigError> {
                if v == 0 {
                    return Err(
                        $crate::root_finding::errors::ConfigError::InvalidMaxIter { got: v }
                    );
                }
                self.common.with_max_iter(v);
                Ok(self)
            }

            #[inline] #[must_use] pub fn tolerance(&self) -> f64   { self.common.tolerance() }
            #[inline] #[must_use] pub fn max_iter(&self)  -> usize { self.common.max_iter() }
        }
    };
}
pub(crate) use impl_common_cfg;
