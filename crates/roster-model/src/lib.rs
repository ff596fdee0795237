//! Record kinds served by roster: people and teams.

mod person;
mod team;

pub use person::Person;
pub use team::Team;

pub use roster_core::{Text, TextList};
