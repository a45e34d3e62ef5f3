mod household;

pub use household::{Household, HouseholdStatus};
