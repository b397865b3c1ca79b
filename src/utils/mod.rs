pub mod env;
pub mod logging;
