pub mod errors;
pub mod extract;
pub mod routes;
pub mod state;
pub mod startup;

pub use startup::run;
