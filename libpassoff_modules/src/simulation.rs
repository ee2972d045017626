// SPDX-FileCopyrightText: 2022 Intel Corporation
//
// SPDX-License-Identifier: Apache-2.0

//! Simulation steps shared by the Tcl and testbench strategies:
//! analysis with `xvlog`, elaboration with `xelab` and simulation with `xsim`.

use libpassoff_harness::process::argv;
use libpassoff_harness::{LabTest, Result, TermColor};

/// Top module and sources of one simulation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SimulationConfig {
    pub sim_top_module: String,
    pub hdl_sim_keylist: Vec<String>,
}

pub fn xvlog_command(src_filename: &str) -> Vec<String> {
    argv(&["xvlog", "--nolog", "-sv", src_filename])
}

pub fn xelab_command(design_name: &str) -> Vec<String> {
    argv(&[
        "xelab",
        "--debug",
        "typical",
        "--nolog",
        "-L",
        "unisims_ver",
        design_name,
    ])
}

/// `-tclbatch <script>` when a script drives the run, `-runall` otherwise.
pub fn xsim_command(top_module: &str, tcl_script_filename: Option<&str>) -> Vec<String> {
    let mut cmd = argv(&["xsim", "-nolog", top_module]);
    match tcl_script_filename {
        Some(script) => {
            cmd.push("-tclbatch".to_string());
            cmd.push(script.to_string());
        }
        None => cmd.push("-runall".to_string()),
    }
    cmd
}

impl SimulationConfig {
    pub fn new(sim_top_module: &str, hdl_sim_keylist: Vec<String>) -> Self {
        SimulationConfig {
            sim_top_module: sim_top_module.to_string(),
            hdl_sim_keylist,
        }
    }

    pub fn simulation_log_filename(&self) -> String {
        format!("{}_simulation.txt", self.sim_top_module)
    }

    /// Analyze every HDL file, stopping at the first one `xvlog` rejects.
    pub fn analyze_hdl_files(&self, lab_test: &dyn LabTest) -> Result<bool> {
        let hdl_filename_list = lab_test.filenames_from_keylist(&self.hdl_sim_keylist)?;

        if !lab_test.check_executable_existence(&argv(&["xvlog", "--version"])) {
            return Ok(false);
        }

        lab_test.print_info(TermColor::Blue, " Analyzing source files");
        for src_filename in &hdl_filename_list {
            let xvlog_cmd = xvlog_command(src_filename);
            if !lab_test.run_command(&xvlog_cmd, lab_test.execution_path())? {
                lab_test.print_error(&format!("Failed analyze of file {}", src_filename));
                return Ok(false);
            }
        }
        Ok(true)
    }

    pub fn elaborate(&self, lab_test: &dyn LabTest) -> Result<bool> {
        lab_test.print_info(TermColor::Blue, " Elaborating");
        let xelab_cmd = xelab_command(&self.sim_top_module);
        if !lab_test.run_command(&xelab_cmd, lab_test.execution_path())? {
            lab_test.print_error("Error in elaboration");
            return Ok(false);
        }
        Ok(true)
    }

    /// Run `xsim`, capturing its output to `<top>_simulation.txt` in the
    /// submission directory.
    pub fn simulate(&self, lab_test: &dyn LabTest, tcl_script_filename: Option<&str>) -> Result<bool> {
        lab_test.print_info(TermColor::Blue, " Starting Simulation");
        let simulation_log_filepath = lab_test
            .submission_lab_path()
            .join(self.simulation_log_filename());

        let xsim_cmd = xsim_command(&self.sim_top_module, tcl_script_filename);
        if !lab_test.subprocess_file_print(
            &simulation_log_filepath,
            &xsim_cmd,
            lab_test.execution_path(),
        )? {
            lab_test.print_error("Failed simulation");
            return Ok(false);
        }
        Ok(true)
    }

    /// Analyze then elaborate; the first failing step ends the run.
    pub fn analyze_and_elaborate(&self, lab_test: &dyn LabTest) -> Result<bool> {
        if !self.analyze_hdl_files(lab_test)? {
            return Ok(false);
        }
        self.elaborate(lab_test)
    }
}
