pub mod config;
pub mod options;
pub mod run;
pub mod task;
pub mod vehicle;

pub use run::{Outcome, Settings, run};
pub use task::{Mutation, SharedVehicle, TaskError};
pub use vehicle::Vehicle;
