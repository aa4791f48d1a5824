//! Filter-and-report: print the people matching a predicate.

use std::fmt;
use std::io::{self, Write};

use crate::filter::filter_people;
use crate::logging::debug;
use crate::person::Person;

/// Which display routine produced a report.
///
/// Both routines behave identically; only the header label differs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Routine {
    /// Predicate supplied through a typed closure value.
    Delegate,
    /// Predicate supplied through a function pointer.
    FunctionPointer,
}

impl Routine {
    /// Label written at the start of the header line.
    pub fn label(self) -> &'static str {
        match self {
            Routine::Delegate => "DisplayPeopleViaDelegate",
            Routine::FunctionPointer => "DisplayPeopleViaFunctionPointer",
        }
    }
}

impl fmt::Display for Routine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Write a header line followed by one line per matching person.
///
/// ```text
/// DisplayPeopleViaDelegate Dogs:
/// Margie, 12 years old
/// Bart, 13 years old
/// ```
///
/// An empty `people` slice produces the header alone.
pub fn display_people<W, P>(
    out: &mut W,
    routine: Routine,
    title: &str,
    people: &[Person],
    predicate: P,
) -> io::Result<()>
where
    W: Write + ?Sized,
    P: Fn(&Person) -> bool,
{
    writeln!(out, "{} {}:", routine, title)?;

    let matches = filter_people(people, predicate);
    debug!(%routine, title, matched = matches.len(), "displaying people");

    for person in matches {
        writeln!(out, "{}", person)?;
    }

    Ok(())
}
