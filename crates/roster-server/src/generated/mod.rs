//! Collections compiled from `data/` by `roster-gen`.

mod people_data;
mod teams_data;

pub use people_data::PEOPLE;
pub use teams_data::TEAMS;
