//! Per-cell operations of the PSATD field update.
//!
//! Every operation is a [`CellKernel`](psatd_kernel::CellKernel) over one
//! mode's cells, so any scheduler can run it.
//!
//! # Step order
//!
//! 1. [`GridResetter`]: zero interpolation-grid `J` / `rho` before deposition
//! 2. [`VolumeNormalizer`]: divide deposited sums by cell volume
//! 3. (forward transform into spectral `J`, `rho_next`)
//! 4. [`CurrentCorrector`]: make `J` consistent with the charge change (optional)
//! 5. [`FieldPusher`]: advance `E`, `B` by one step
//! 6. [`SpectralFilter`]: damp high wavenumbers (optional)
//! 7. [`RhoHistoryShifter`]: `rho_prev := rho_next`, `rho_next := 0`

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod current_correction;
pub mod filter;
pub mod push;
pub mod reset;
pub mod rho_shift;
pub mod target;
pub mod volume;

pub use current_correction::CurrentCorrector;
pub use filter::SpectralFilter;
pub use push::{FieldPusher, PushOptions};
pub use reset::GridResetter;
pub use rho_shift::RhoHistoryShifter;
pub use target::{Deposit, SpectralTarget};
pub use volume::VolumeNormalizer;
