//! Shared configuration for root-finding algorithms.
//!
//! Provides [`CommonCfg`] with the default tolerance and iteration limit,
//! used by all root-finding configs.
//!
//! [`CommonCfg`]: universal fields
//! ├ `tolerance` : absolute bound on `|x_{n+1} - x_n|`
//! └ `max_iter`  : iteration cap (optional)
//!
//! [`CommonCfg::new`] initializes configuration with default values.


pub const DEFAULT_TOLERANCE: f64 = 1e-6;


#[derive(Debug, Copy, Clone, PartialEq)]
pub struct CommonCfg {
    tolerance : f64,
    max_iter  : Option<usize>,
}

impl CommonCfg {
    pub fn new() -> Self {
        Self {
            tolerance : DEFAULT_TOLERANCE,
            max_iter  : None,
        }
    }

    // getters
    pub fn tolerance(&self) -> f64 { self.tolerance }
    pub fn max_iter(&self)  -> Option<usize> { self.max_iter }

    // setters (internal)
    pub(crate) fn with_tolerance (&mut self, v: f64)   { self.tolerance = v; }
    pub(crate) fn with_max_iter  (&mut self, v: usize) { self.max_iter  = Some(v); }
}

impl Default for CommonCfg {
    fn default() -> Self {
        Self::new()
    }
}

macro_rules! impl_common_cfg {
    ($cfg:ty) => {
        impl $cfg {
            pub fn tolerance(&self) -> f64 {
                self.common.tolerance()
            }
            pub fn max_iter(&self) -> Option<usize> {
                self.common.max_iter()
            }
            pub fn set_tolerance(
                mut self, v: f64
            ) -> Result<Self, $crate::root_finding::errors::ToleranceError> {
                $crate::root_finding::tolerances::validate_tolerance(v)?;
                self.common.with_tolerance(v);
                Ok(self)
            }
            pub fn set_max_iter(
                mut self, v: usize
            ) -> Result<Self, $crate::root_finding::errors::RootFindingError> {
                if v == 0 {
                    return Err(
                        $crate::root_finding::errors::RootFindingError::InvalidMaxIter { got: v }
                    );
                }
                self.common.with_max_iter(v);
                Ok(self)
            }
        }
        impl Default for $cfg {
            fn default() -> Self {
                Self::new()
            }
        }
    };
}
pub(crate) use impl_common_cfg;
