//! `fixit_rust` (fx) - Campus facility issue tracker
//!
//! Report facility issues, walk them through the PENDING/IN_PROGRESS/DONE
//! lifecycle, and watch the SLA dashboard. All state lives in a small
//! JSON store on disk; no daemon, no database.

use fixit_rust::run;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
