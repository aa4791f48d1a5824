//! The record type being filtered.

use std::fmt;

/// A named person with an age.
///
/// Fields are private so a `Person` cannot change after construction.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Person {
    name: String,
    age: i32,
}

impl Person {
    /// Create a new person.
    pub fn new(name: impl Into<String>, age: i32) -> Self {
        Self {
            name: name.into(),
            age,
        }
    }

    /// The person's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The person's age in years.
    pub fn age(&self) -> i32 {
        self.age
    }
}

/// Renders the report line for this person, e.g. `Margie, 12 years old`.
impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {} years old", self.name, self.age)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(Person::new("Margie", 12).to_string(), "Margie, 12 years old");
        assert_eq!(Person::new("Ando", -1).to_string(), "Ando, -1 years old");
    }

    #[test]
    fn test_structural_equality() {
        assert_eq!(Person::new("Bart", 13), Person::new(String::from("Bart"), 13));
        assert_ne!(Person::new("Bart", 13), Person::new("Bart", 14));
    }
}
