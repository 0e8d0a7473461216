//! Command implementations.

mod register;
mod scan;
mod show;

pub use register::execute_register;
pub use scan::execute_scan;
pub use show::execute_show;
