// SPDX-FileCopyrightText: 2022 Intel Corporation
//
// SPDX-License-Identifier: Apache-2.0

use libpassoff_harness::{LabTest, Result};

use crate::build_bitstream::BuildBitstream;
use crate::tcl_simulation::TclSimulation;
use crate::testbench_simulation::TestbenchSimulation;

/// Contract shared by every grading strategy.
///
/// `perform_test` returns `Ok(true)` when the submission passes, `Ok(false)`
/// when a step failed (the failing step has already been logged) and `Err`
/// only for harness problems such as an unwritable execution directory.
pub trait TesterModule {
    /// Name of the module, used for logging.
    fn module_name(&self) -> String {
        "BASE MODULE".to_string()
    }

    /// Strategies must override this; the default reports the omission and fails.
    fn perform_test(&self, lab_test: &dyn LabTest) -> Result<bool> {
        lab_test.print_warning("This should be overridden");
        Ok(false)
    }
}

/// The closed set of grading strategies a lab can be configured with.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PassoffModule {
    TclSimulation(TclSimulation),
    TestbenchSimulation(TestbenchSimulation),
    BuildBitstream(BuildBitstream),
}

impl TesterModule for PassoffModule {
    fn module_name(&self) -> String {
        match self {
            PassoffModule::TclSimulation(m) => m.module_name(),
            PassoffModule::TestbenchSimulation(m) => m.module_name(),
            PassoffModule::BuildBitstream(m) => m.module_name(),
        }
    }

    fn perform_test(&self, lab_test: &dyn LabTest) -> Result<bool> {
        match self {
            PassoffModule::TclSimulation(m) => m.perform_test(lab_test),
            PassoffModule::TestbenchSimulation(m) => m.perform_test(lab_test),
            PassoffModule::BuildBitstream(m) => m.perform_test(lab_test),
        }
    }
}

impl From<TclSimulation> for PassoffModule {
    fn from(m: TclSimulation) -> Self {
        PassoffModule::TclSimulation(m)
    }
}

impl From<TestbenchSimulation> for PassoffModule {
    fn from(m: TestbenchSimulation) -> Self {
        PassoffModule::TestbenchSimulation(m)
    }
}

impl From<BuildBitstream> for PassoffModule {
    fn from(m: BuildBitstream) -> Self {
        PassoffModule::BuildBitstream(m)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fake_lab::FakeLabTest;

    struct Unfinished;

    impl TesterModule for Unfinished {}

    #[test]
    fn test_base_contract_fails() {
        let lab = FakeLabTest::new();
        let module = Unfinished;
        assert_eq!(module.module_name(), "BASE MODULE");
        assert!(!module.perform_test(&lab).unwrap());
        assert_eq!(lab.warnings(), vec!["This should be overridden".to_string()]);
        assert!(lab.commands().is_empty());
    }

    #[test]
    fn test_dispatch_names() {
        let tb: PassoffModule = TestbenchSimulation::new(
            "adder testbench",
            "tb_adder4",
            vec!["adder4".to_string()],
            Vec::new(),
        )
        .into();
        assert_eq!(tb.module_name(), "Testbench Simulation \"adder testbench\" (tb_adder4)");

        let build: PassoffModule = BuildBitstream::builder()
            .design_name("adder4")
            .hdl_key_list(vec!["adder4".to_string()])
            .build()
            .into();
        assert_eq!(build.module_name(), "Synthesis/Bitstream Gen (adder4)");
    }
}
