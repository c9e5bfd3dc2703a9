pub mod config;
pub mod evaluate;
pub mod report;
pub mod status;

pub use config::*;
pub use evaluate::*;
pub use report::*;
pub use status::*;
