//! Use Cases Layer: NaturalNumber Arithmetic
//!
//! Provides the secondary NaturalNumber operations, built only on the kernel
//! exposed by `entities_natural_number`. They work the same for every
//! representation, including `dyn NaturalNumber`.
//!
//! ## Modules
//!
//! - **[`ops`](ops/index.html)**: the [`NaturalNumberOps`] extension trait
//!
//! ## See Also
//!
//! - [`entities_natural_number`]: kernel trait and representations

pub mod ops;

pub use ops::{can_set_from_str, NaturalNumberOps};
