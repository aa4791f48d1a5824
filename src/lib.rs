//! Filtering people by age, with the predicate spelled several ways.
//!
//! A predicate is any `Fn(&Person) -> bool`: a closure bound to a typed
//! variable, an inline closure, a function pointer, or a named function.
//! All of them go through the same [`filter_people`] and [`display_people`].
//!
//! # Quick Start
//!
//! ```
//! use lambdas::prelude::*;
//!
//! let people = sample_people();
//! let mut out = Vec::new();
//! display_people(&mut out, Routine::Delegate, "Dogs", &people, age_in_range)?;
//!
//! assert_eq!(
//!     String::from_utf8_lossy(&out),
//!     "DisplayPeopleViaDelegate Dogs:\nMargie, 12 years old\nBart, 13 years old\n"
//! );
//! # Ok::<(), std::io::Error>(())
//! ```
//!
//! # Modules
//!
//! - [`person`] - The immutable name/age record
//! - [`filter`] - Predicates and the stable filter
//! - [`report`] - Header plus one line per match
//! - [`demo`] - The fixed demonstration run
//! - [`cli`] - Arguments, configuration and log setup (requires `cli` feature)
//!
//! # Feature Flags
//!
//! - `logging` - Enable library-level tracing (consumers provide their own subscriber)
//! - `cli` - Enable the command-line binary (enabled by default)

#[cfg(feature = "cli")]
pub mod cli;
pub mod demo;
pub mod filter;
mod logging;
pub mod person;
pub mod prelude;
pub mod report;

mod error;

pub use error::{Error, Result};

pub use demo::sample_people;
pub use filter::{PersonFilter, age_in_range, filter_people};
pub use person::Person;
pub use report::{Routine, display_people};
