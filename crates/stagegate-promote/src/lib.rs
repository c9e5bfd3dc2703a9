pub mod error;
pub mod metadata;
pub mod promoter;
pub mod readme;
pub mod report;
pub mod settings;

pub use error::*;
pub use metadata::*;
pub use promoter::*;
pub use readme::*;
pub use report::*;
pub use settings::*;
