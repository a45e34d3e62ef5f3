mod household_handler;

pub use household_handler::*;
