//! Common test utilities and fixtures.
//!
//! Shared expected output, predicates and proptest strategies for the
//! integration tests.

#![allow(dead_code)]

use lambdas::Person;
use proptest::prelude::*;

// =============================================================================
// Expected Output
// =============================================================================

/// Full stdout of the demonstration run over the sample people.
pub const DEMO_OUTPUT: &str = "\
DisplayPeopleViaDelegate Dogs:
Margie, 12 years old
Bart, 13 years old

DisplayPeopleViaDelegate Lambda via delegate Dogs:
Margie, 12 years old
Bart, 13 years old

DisplayPeopleViaFunctionPointer Dogs:
Margie, 12 years old
Bart, 13 years old

DisplayPeopleViaFunctionPointer Lambda via function pointer Dogs:
Margie, 12 years old
Bart, 13 years old

DisplayPeopleViaDelegate Another lambda via delegate Dogs:
Margie, 12 years old
Bart, 13 years old

DisplayPeopleViaFunctionPointer Another lambda via function pointer Dogs:
Margie, 12 years old
Bart, 13 years old

";

// =============================================================================
// Helpers
// =============================================================================

/// Collect borrowed matches into owned values for comparison.
pub fn owned(matches: Vec<&Person>) -> Vec<Person> {
    matches.into_iter().cloned().collect()
}

/// Render a single report into a string.
pub fn render<P>(routine: lambdas::Routine, title: &str, people: &[Person], predicate: P) -> String
where
    P: Fn(&Person) -> bool,
{
    let mut buf = Vec::new();
    lambdas::display_people(&mut buf, routine, title, people, predicate).unwrap();
    String::from_utf8(buf).unwrap()
}

// =============================================================================
// Strategies
// =============================================================================

/// A person with a short name and an age that often lands near the range bounds.
pub fn arb_person() -> impl Strategy<Value = Person> {
    ("[A-Z][a-z]{0,7}", prop_oneof![0i32..30, any::<i32>()])
        .prop_map(|(name, age)| Person::new(name, age))
}

/// A list of people, possibly empty.
pub fn arb_people() -> impl Strategy<Value = Vec<Person>> {
    prop::collection::vec(arb_person(), 0..32)
}
