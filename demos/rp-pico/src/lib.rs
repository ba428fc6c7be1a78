#![no_std]

pub mod cycle_wire;
