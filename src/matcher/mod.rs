mod cancel;
mod outcome;
mod params;
pub mod resolver;

pub use cancel::{Cancellation, NeverCancel};
pub use outcome::MatchOutcome;
pub use params::PathParams;
pub use resolver::find_route;
