// Handlers for CLI subcommands.
//
// main.rs parses arguments and dispatches here; each handler returns the text
// to print so the handlers can be exercised without spawning the binary.

pub mod airplanes;
pub mod convert;
pub mod estimate;
