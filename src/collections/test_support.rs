//! Shared fixtures for the collection unit tests

#[derive(Debug, Clone, PartialEq)]
pub struct Person {
    pub name: String,
    pub age: u32,
}

impl Person {
    pub fn new(name: &str, age: u32) -> Self {
        Self {
            name: name.to_string(),
            age,
        }
    }
}

pub fn people() -> Vec<Person> {
    vec![
        Person::new("Test1", 10),
        Person::new("Test2", 20),
        Person::new("Test3", 30),
        Person::new("Test4", 40),
    ]
}
