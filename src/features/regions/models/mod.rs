mod district;
mod state;

pub use district::District;
pub use state::State;
