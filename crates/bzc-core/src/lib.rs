pub mod error;
pub mod options;
pub mod schedule;
pub mod tolerance;
pub mod traits;

pub use error::{BzcError, Result};
pub use options::SamplingOptions;
pub use schedule::{Debouncer, TaskHandle};
pub use tolerance::Tolerance;
