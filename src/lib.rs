#![doc = include_str!("../README.md")]

pub mod cli;
pub mod command;
pub mod error;
pub mod field;
pub mod fs;
pub mod rewrite;
pub mod verify;

pub use error::*;
pub use field::Field;

pub fn run() -> Result<()> {
    use clap::Parser;

    let args = cli::BumpArgs::parse();
    command::bump::execute(args)
}
