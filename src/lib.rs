// madslang - terminal client for the MadSlangDict slang dictionary
// Library exports

pub mod cli;
pub mod client;
pub mod config;
pub mod logging;
pub mod protocol;
