pub mod compliance;
pub mod error;
pub mod json;
pub mod performance;
pub mod quality;
pub mod security;

pub use compliance::evaluate_compliance;
pub use error::*;
pub use performance::evaluate_performance;
pub use quality::evaluate_quality;
pub use security::evaluate_security;
