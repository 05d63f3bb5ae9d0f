//! # Ownership and Mutation
//!
//! Mutating through `&mut` changes the caller's value; mutating a value
//! that was cloned and moved into a function does not.

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mouse {
    pub name: String,
    pub cheese_eaten: u32,
}

impl Mouse {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            cheese_eaten: 0,
        }
    }

    pub fn eat(&mut self) {
        self.cheese_eaten += 1;
    }
}

pub fn feed_in_place(mouse: &mut Mouse) {
    mouse.eat();
}

pub fn feed_owned(mut mouse: Mouse) -> Mouse {
    mouse.eat();
    mouse
}

/// Walk through both cases and describe the state after each step.
pub fn walkthrough() -> Vec<String> {
    let mut mouse = Mouse::new("Squeak");
    let mut lines = vec![format!("start:            {mouse:?}")];

    feed_in_place(&mut mouse);
    lines.push(format!("after &mut feed:  {mouse:?}"));

    let fed_copy = feed_owned(mouse.clone());
    lines.push(format!("copy after feed:  {fed_copy:?}"));
    lines.push(format!("original is still {mouse:?}"));
    lines
}
