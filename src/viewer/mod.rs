//! The structure-loading state machine.
//!
//! [`ViewController`] owns the [`LoadState`] shown to the user, the single
//! live rendering surface ([`SurfaceSlot`]) and a generation counter. Every
//! load attempt is identified by a [`LoadTicket`]; completions for a ticket
//! whose generation has been superseded (by a new selection or by teardown)
//! are dropped without any observable effect.
//!
//! [`drive_load`] runs one attempt end to end against a
//! [`StructureSource`](crate::source::StructureSource), suspending only at
//! the network fetch and at the engine module load.

mod controller;
mod driver;
mod slot;
mod state;

pub use controller::{Completion, ViewController};
pub use driver::drive_load;
pub use slot::SurfaceSlot;
pub use state::{LoadState, LoadTicket};
