// SPDX-FileCopyrightText: 2022 Intel Corporation
//
// SPDX-License-Identifier: Apache-2.0

use libpassoff_harness::{LabTest, Result};

use crate::simulation::SimulationConfig;
use crate::tester_module::TesterModule;

/// Simulation of a self-checking testbench, run to completion.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TestbenchSimulation {
    pub testbench_description: String,
    pub sim: SimulationConfig,
    /// Extra `xelab` options. Stored with the configuration; elaboration
    /// does not apply them yet.
    pub xe_options_list: Vec<String>,
}

impl TestbenchSimulation {
    pub fn new(
        testbench_description: &str,
        testbench_top: &str,
        hdl_sim_keylist: Vec<String>,
        xe_options_list: Vec<String>,
    ) -> Self {
        TestbenchSimulation {
            testbench_description: testbench_description.to_string(),
            sim: SimulationConfig::new(testbench_top, hdl_sim_keylist),
            xe_options_list,
        }
    }
}

impl TesterModule for TestbenchSimulation {
    fn module_name(&self) -> String {
        format!(
            "Testbench Simulation \"{}\" ({})",
            self.testbench_description, self.sim.sim_top_module
        )
    }

    fn perform_test(&self, lab_test: &dyn LabTest) -> Result<bool> {
        if !self.sim.analyze_and_elaborate(lab_test)? {
            return Ok(false);
        }
        self.sim.simulate(lab_test, None)
    }
}
