//! # Trait Dispatch
//!
//! One trait, two implementors, called through `&dyn Speaker`.

pub trait Speaker {
    fn name(&self) -> &str;

    fn speak(&self) -> String;

    fn moves(&self) -> String {
        format!("{} is moving!", self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Animal {
    pub name: String,
    pub age: u32,
}

impl Animal {
    pub fn new(name: impl Into<String>, age: u32) -> Self {
        Self {
            name: name.into(),
            age,
        }
    }
}

impl Speaker for Animal {
    fn name(&self) -> &str {
        &self.name
    }

    fn speak(&self) -> String {
        match self.name.as_str() {
            "Dog" => "Woof!",
            "Cat" => "Mew mew!",
            _ => "...",
        }
        .to_string()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Robot {
    pub model: String,
}

impl Speaker for Robot {
    fn name(&self) -> &str {
        &self.model
    }

    fn speak(&self) -> String {
        "Beep boop.".to_string()
    }

    fn moves(&self) -> String {
        format!("{} is rolling!", self.model)
    }
}

pub fn introduce(speaker: &dyn Speaker) -> String {
    format!("{} says {} {}", speaker.name(), speaker.speak(), speaker.moves())
}

/// The cast used by the demo command.
pub fn cast() -> Vec<Box<dyn Speaker>> {
    vec![
        Box::new(Animal::new("Dog", 5)),
        Box::new(Animal::new("Cat", 3)),
        Box::new(Animal::new("Bird", 1)),
        Box::new(Robot {
            model: "RX-2".to_string(),
        }),
    ]
}
