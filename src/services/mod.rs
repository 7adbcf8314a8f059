//! Services that talk to the outside world.
//!
//! The engine itself never does I/O; these modules take owned snapshots of
//! its output and handle transport, so editing is never blocked on them.

pub mod generate;
