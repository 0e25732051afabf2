//! Yield engine for comparing Brazilian fixed-income instruments: savings
//! (poupança), taxable CDI-indexed notes (CDB/RDB/LC) and tax-exempt
//! CDI-indexed notes (LCI/LCA).
//!
//! The engine is stateless and side-effect-free: every operation is a pure
//! function over a validated [`types::SimulationInput`], cheap enough to
//! re-run on every input change. All arithmetic uses `rust_decimal`.

pub mod accrual;
pub mod engine;
pub mod error;
pub mod gross_up;
pub mod indexer;
pub mod schedule;
pub mod tax;
pub mod types;

pub use error::RendaFixaError;
pub use types::*;

/// Standard result type for all renda-fixa operations
pub type RendaFixaResult<T> = Result<T, RendaFixaError>;
