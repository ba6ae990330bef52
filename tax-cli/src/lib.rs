pub mod cli;
pub mod income_loader;
pub mod logging;
pub mod report;
