pub mod bootstrap;
pub mod controller;
pub mod state;

pub use bootstrap::run;
