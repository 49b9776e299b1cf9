pub mod analysis_handlers;
pub mod system_handlers;
pub mod test_result_handlers;

pub use analysis_handlers::*;
pub use system_handlers::*;
pub use test_result_handlers::*;
