pub mod handlers;
pub mod sink;
pub mod validation;

pub use sink::{ContactSink, SimulatedContactSink};

