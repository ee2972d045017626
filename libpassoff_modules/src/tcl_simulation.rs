// SPDX-FileCopyrightText: 2022 Intel Corporation
//
// SPDX-License-Identifier: Apache-2.0

use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

use libpassoff_harness::{LabTest, PassoffError, Result};

use crate::simulation::SimulationConfig;
use crate::tester_module::TesterModule;

/// Simulation driven by a Tcl script from the submission.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TclSimulation {
    pub tcl_filename_key: String,
    pub sim: SimulationConfig,
}

impl TclSimulation {
    pub fn new(tcl_filename_key: &str, tcl_sim_top_module: &str, hdl_sim_keylist: Vec<String>) -> Self {
        TclSimulation {
            tcl_filename_key: tcl_filename_key.to_string(),
            sim: SimulationConfig::new(tcl_sim_top_module, hdl_sim_keylist),
        }
    }

    pub fn temp_tcl_filename(&self) -> String {
        format!("{}_tempsim.tcl", self.sim.sim_top_module)
    }
}

/// Copy `src` to `dst` and end the copy with a `quit` so xsim exits instead
/// of waiting at its prompt. `src` is left untouched; a `dst` naming the same
/// file is rejected.
pub fn write_quitting_copy(src: &Path, dst: &Path) -> Result<()> {
    let src_canonical = std::fs::canonicalize(src)?;
    if dst.exists() && std::fs::canonicalize(dst)? == src_canonical {
        return Err(PassoffError::Config(format!(
            "Tcl script {} would be overwritten by its own temporary copy",
            src.display()
        )));
    }

    std::fs::copy(src, dst)?;
    let mut tmp_tcl = OpenOptions::new().append(true).open(dst)?;
    tmp_tcl.write_all(b"\n# Add Exit quit command\n")?;
    tmp_tcl.write_all(b"quit\n")?;
    Ok(())
}

impl TesterModule for TclSimulation {
    fn module_name(&self) -> String {
        format!("TCL Simulation ({})", self.tcl_filename_key)
    }

    fn perform_test(&self, lab_test: &dyn LabTest) -> Result<bool> {
        if !self.sim.analyze_and_elaborate(lab_test)? {
            return Ok(false);
        }

        let tcl_filename = lab_test.filename_from_key(&self.tcl_filename_key)?;
        let temp_tcl_filename = self.temp_tcl_filename();
        let src_tcl = lab_test.execution_path().join(&tcl_filename);
        let tmp_tcl = lab_test.execution_path().join(&temp_tcl_filename);
        write_quitting_copy(&src_tcl, &tmp_tcl)?;

        self.sim.simulate(lab_test, Some(&temp_tcl_filename))
    }
}
