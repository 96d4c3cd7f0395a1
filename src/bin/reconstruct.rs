use std::env;
use std::process::ExitCode;

use num_bigint::BigInt;

use shamir_recover::error::Result;
use shamir_recover::provider::{self, FileOrStdinProvider, FileProvider, RequestProvider};
use shamir_recover::reconstruct;

fn run(provider: &impl RequestProvider) -> Result<BigInt> {
    let request = provider::load(provider)?;
    reconstruct::reconstruct(&request)
}

fn main() -> ExitCode {
    let result = match env::args().nth(1) {
        Some(path) => run(&FileProvider::new(path)),
        None => run(&FileOrStdinProvider::default()),
    };
    match result {
        Ok(secret) => {
            println!("{secret}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
