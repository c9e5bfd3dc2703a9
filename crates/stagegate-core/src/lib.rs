pub mod evaluation;
pub mod ids;
pub mod model;
pub mod scores;
pub mod summary;
pub mod thresholds;
pub mod time;

pub use evaluation::*;
pub use ids::*;
pub use model::*;
pub use scores::*;
pub use summary::*;
pub use thresholds::*;
pub use time::*;
