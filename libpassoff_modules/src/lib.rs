// SPDX-FileCopyrightText: 2022 Intel Corporation
//
// SPDX-License-Identifier: Apache-2.0

pub mod build_bitstream;
pub mod from_config;
pub mod simulation;
pub mod tcl_simulation;
pub mod testbench_simulation;
pub mod tester_module;

#[cfg(test)]
mod fake_lab;

pub use build_bitstream::BuildBitstream;
pub use from_config::modules_from_config;
pub use simulation::SimulationConfig;
pub use tcl_simulation::TclSimulation;
pub use testbench_simulation::TestbenchSimulation;
pub use tester_module::{PassoffModule, TesterModule};
