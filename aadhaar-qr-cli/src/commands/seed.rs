//! Seed Command
//!
//! Prints a random nullifier seed.

use aadhaar_qr::generate_seed;

pub fn run() {
    println!("{}", generate_seed());
}
