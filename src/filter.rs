//! Predicates over [`Person`] and the stable filter that applies them.
//!
//! Every predicate in this crate is just a value implementing
//! `Fn(&Person) -> bool`. Closures bound to a typed variable, inline
//! closures, function pointers and named functions all satisfy the same
//! bound, so [`filter_people`] accepts any of them:
//!
//! ```
//! use lambdas::{age_in_range, filter_people, Person, PersonFilter};
//!
//! let people = vec![Person::new("Ando", 47), Person::new("Margie", 12)];
//!
//! // Named function
//! assert_eq!(filter_people(&people, age_in_range).len(), 1);
//!
//! // Function pointer assigned from a non-capturing closure
//! let pointer: PersonFilter = |p| p.age() > 10 && p.age() < 20;
//! assert_eq!(filter_people(&people, pointer).len(), 1);
//!
//! // Inline closure
//! assert_eq!(filter_people(&people, |p: &Person| p.age() > 40).len(), 1);
//! ```

use crate::logging::trace;
use crate::person::Person;

/// Function-pointer spelling of a person predicate.
///
/// Only non-capturing closures and plain functions coerce to this type.
/// Anything that accepts a predicate takes `impl Fn(&Person) -> bool`
/// instead, which a `PersonFilter` also satisfies.
pub type PersonFilter = fn(&Person) -> bool;

/// Lower bound (exclusive) of [`age_in_range`].
pub const MIN_AGE_EXCLUSIVE: i32 = 10;

/// Upper bound (exclusive) of [`age_in_range`].
pub const MAX_AGE_EXCLUSIVE: i32 = 20;

/// Returns `true` for people strictly older than 10 and strictly younger
/// than 20.
pub fn age_in_range(person: &Person) -> bool {
    let greater_than_min = person.age() > MIN_AGE_EXCLUSIVE;
    let less_than_max = person.age() < MAX_AGE_EXCLUSIVE;

    greater_than_min && less_than_max
}

/// Select the people matching `predicate`, keeping their original order.
///
/// The input is only borrowed; the result is a new list of references
/// into it.
pub fn filter_people<'a, P>(people: &'a [Person], predicate: P) -> Vec<&'a Person>
where
    P: Fn(&Person) -> bool,
{
    let matches: Vec<&Person> = people.iter().filter(|p| predicate(p)).collect();

    trace!(
        total = people.len(),
        matched = matches.len(),
        "filtered people"
    );

    matches
}
