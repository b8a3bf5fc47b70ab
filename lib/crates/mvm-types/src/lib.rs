pub mod microvm;

pub use microvm::{MicroVm, MicroVmSpec, MicroVmState, MicroVmStatus};
