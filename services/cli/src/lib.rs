mod cli;
mod driver;
mod error;
mod prompt;
mod render;

pub use driver::DriverError;
pub use error::CliError;

pub fn run() -> Result<(), CliError> {
    cli::run()
}
