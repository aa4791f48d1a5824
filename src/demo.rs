//! The demonstration run: one list of people, one age predicate, spelled
//! several different ways.

use std::io::{self, Write};

use crate::filter::{PersonFilter, age_in_range};
use crate::logging::info;
use crate::person::Person;
use crate::report::{Routine, display_people};

/// The fixed list of people the demonstration filters.
pub fn sample_people() -> Vec<Person> {
    vec![
        Person::new("Ando", 47),
        Person::new("Danika", 48),
        Person::new("Margie", 12),
        Person::new("Bart", 13),
    ]
}

/// Run every report against `people`, writing to `out`.
///
/// Each report is followed by a blank line. All predicates compute
/// `age > 10 && age < 20`.
pub fn run<W: Write + ?Sized>(out: &mut W, people: &[Person]) -> io::Result<()> {
    info!(people = people.len(), "running demonstration");

    // Closure bound to a variable whose function type is spelled out.
    let filter: &dyn Fn(&Person) -> bool = &|p: &Person| p.age() > 10 && p.age() < 20;
    display_people(out, Routine::Delegate, "Dogs", people, filter)?;
    writeln!(out)?;

    // Inline closure with a statement body.
    display_people(out, Routine::Delegate, "Lambda via delegate Dogs", people, |p: &Person| {
        let greater_than_10 = p.age() > 10;
        let less_than_20 = p.age() < 20;

        greater_than_10 && less_than_20
    })?;
    writeln!(out)?;

    // Non-capturing closures coerce to a plain function pointer.
    let filter_function: PersonFilter = |p| p.age() > 10 && p.age() < 20;
    display_people(out, Routine::FunctionPointer, "Dogs", people, filter_function)?;
    writeln!(out)?;

    display_people(
        out,
        Routine::FunctionPointer,
        "Lambda via function pointer Dogs",
        people,
        |p: &Person| {
            let greater_than_10 = p.age() > 10;
            let less_than_20 = p.age() < 20;

            greater_than_10 && less_than_20
        },
    )?;
    writeln!(out)?;

    // A named function works wherever a closure does.
    display_people(
        out,
        Routine::Delegate,
        "Another lambda via delegate Dogs",
        people,
        age_in_range,
    )?;
    writeln!(out)?;

    display_people(
        out,
        Routine::FunctionPointer,
        "Another lambda via function pointer Dogs",
        people,
        age_in_range,
    )?;
    writeln!(out)?;

    Ok(())
}
