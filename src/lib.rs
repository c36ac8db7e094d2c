// Library exports for dwgeval
pub mod accuracy;
pub mod discordant;
pub mod dwgsim;
pub mod errors;
pub mod report;
pub mod windows;
