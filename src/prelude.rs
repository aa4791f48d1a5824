//! Convenient re-exports for common usage patterns.
//!
//! ```ignore
//! use lambdas::prelude::*;
//!
//! let people = sample_people();
//! let mut out = std::io::stdout();
//! display_people(&mut out, Routine::FunctionPointer, "Dogs", &people, age_in_range)?;
//! ```

// Unified error handling
pub use crate::error::{Error, Result};

// Records and predicates
pub use crate::filter::{PersonFilter, age_in_range, filter_people};
pub use crate::person::Person;

// Reporting
pub use crate::demo::sample_people;
pub use crate::report::{Routine, display_people};
