//! Memory-mapped register definitions for the KL25Z clock tree.
//!
//! Offsets and field positions are from the KL25 Sub-Family Reference
//! Manual (document KL25P80M48SF0RM).

pub mod mcg;
pub mod osc;
pub mod sim;
pub mod wdog;
