//! # Purolea Desk Entry Point
//!
//! Starts the quote desk and serves form events from stdin.
//!
//! ```text
//! $ printf 'select serum\nset quantity 250\nexport\n' | purolea-desk > out.txt
//! ```
//!
//! The actual setup is in lib.rs for testability.

fn main() -> std::io::Result<()> {
    purolea_desk::run()
}
