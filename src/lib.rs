pub mod classify;
pub mod clock;
pub mod driver;
pub mod errors;
pub mod extract;
pub mod input;
pub mod output;
mod parallelism;
pub mod record;
pub mod variant;
