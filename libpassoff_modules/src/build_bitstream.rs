// SPDX-FileCopyrightText: 2022 Intel Corporation
//
// SPDX-License-Identifier: Apache-2.0

//! Non-project mode Vivado build: synthesis, and optionally place, route,
//! checkpoint and bitstream.
//!
//! The build is a generated Tcl script run with `vivado -mode batch`. The
//! script is regenerated on every run and left in the execution directory.

use std::path::Path;

use libpassoff_harness::paths::relative_path;
use libpassoff_harness::process::argv;
use libpassoff_harness::{LabTest, Result, TermColor};
use typed_builder::TypedBuilder;

use crate::tester_module::TesterModule;

#[derive(Clone, Debug, PartialEq, Eq, TypedBuilder)]
pub struct BuildBitstream {
    #[builder(setter(into))]
    pub design_name: String,
    /// Constraint (xdc) file keys. Only read when implementing.
    #[builder(default)]
    pub xdc_key_list: Vec<String>,
    pub hdl_key_list: Vec<String>,
    /// Place, route and write the bitstream after synthesis.
    #[builder(default = true)]
    pub implement_build: bool,
    /// Write a design checkpoint, with or without implementation.
    #[builder(default = false)]
    pub create_dcp: bool,
}

/// Resolved inputs of one build script.
#[derive(Clone, Debug, Default)]
pub struct BuildScriptInputs<'a> {
    pub pre_script_filenames: &'a [String],
    pub hdl_filenames: &'a [String],
    pub xdc_filenames: &'a [String],
    pub part: &'a str,
}

impl BuildBitstream {
    pub fn bitfile_filename(&self) -> String {
        format!("{}.bit", self.design_name)
    }

    pub fn dcp_filename(&self) -> String {
        format!("{}.dcp", self.design_name)
    }

    pub fn build_script_filename(&self) -> String {
        format!("{}_buildscript.tcl", self.design_name)
    }

    pub fn implementation_log_filename(&self) -> String {
        format!("{}_implementation.txt", self.design_name)
    }

    pub fn build_command(&self) -> Vec<String> {
        let script = self.build_script_filename();
        argv(&[
            "vivado",
            "-nolog",
            "-mode",
            "batch",
            "-nojournal",
            "-source",
            script.as_str(),
        ])
    }

    /// Path of the project settings script as seen from the execution
    /// directory.
    pub fn settings_script_path(&self, lab_test: &dyn LabTest) -> Result<String> {
        let rel = relative_path(lab_test.submission_lab_path(), lab_test.execution_path())?;
        Ok(rel
            .join(lab_test.project_settings_filename())
            .to_string_lossy()
            .into_owned())
    }

    /// Text of the build script. Line order is significant: every command
    /// works on the design state left by the commands before it.
    pub fn build_script(&self, inputs: &BuildScriptInputs) -> String {
        let mut script = String::new();
        let mut line = |text: &str| {
            script.push_str(text);
            script.push('\n');
        };

        line("# Bitfile Generation script (non-project mode)");
        line("#");
        if inputs.pre_script_filenames.is_empty() {
            line("# No Pre-build script files");
        } else {
            line("# Pre-build source files");
            for pre_source_filename in inputs.pre_script_filenames {
                line(&format!("source {}", pre_source_filename));
            }
        }

        line("# Add sources");
        for hdl_filename in inputs.hdl_filenames {
            line(&format!("read_verilog -sv {}", hdl_filename));
        }

        if self.implement_build {
            line("# Add XDC file");
            for xdc_filename in inputs.xdc_filenames {
                line(&format!("read_xdc {}", xdc_filename));
            }
        }

        line("# Synthesize design");
        line(&format!(
            "synth_design -top {} -part {}",
            self.design_name, inputs.part
        ));

        if self.implement_build {
            line("# Implement Design");
            line("place_design");
            line("route_design");
            line(&format!("write_checkpoint {} -force", self.dcp_filename()));
            line(&format!("write_bitstream -force {}", self.bitfile_filename()));
        }

        if self.create_dcp {
            line("# Create DCP");
            line(&format!("write_checkpoint {} -force", self.dcp_filename()));
        }

        line("# End of build script");
        script
    }

    fn write_build_script(&self, lab_test: &dyn LabTest, script_path: &Path) -> Result<()> {
        let hdl_filenames = lab_test.filenames_from_keylist(&self.hdl_key_list)?;
        let xdc_filenames = lab_test.filenames_from_keylist(&self.xdc_key_list)?;
        let pre_script_filenames = vec![self.settings_script_path(lab_test)?];

        let script = self.build_script(&BuildScriptInputs {
            pre_script_filenames: &pre_script_filenames,
            hdl_filenames: &hdl_filenames,
            xdc_filenames: &xdc_filenames,
            part: lab_test.target_part(),
        });
        std::fs::write(script_path, script)?;
        Ok(())
    }
}

impl TesterModule for BuildBitstream {
    fn module_name(&self) -> String {
        format!("Synthesis/Bitstream Gen ({})", self.design_name)
    }

    fn perform_test(&self, lab_test: &dyn LabTest) -> Result<bool> {
        lab_test.print_info(
            TermColor::Blue,
            &format!(" Attempting to build bitfile {}", self.bitfile_filename()),
        );

        let script_path = lab_test.execution_path().join(self.build_script_filename());
        self.write_build_script(lab_test, &script_path)?;

        if !lab_test.check_executable_existence(&argv(&["vivado", "-version"])) {
            return Ok(false);
        }

        let implementation_log_filepath = lab_test
            .execution_path()
            .join(self.implementation_log_filename());
        if !lab_test.subprocess_file_print(
            &implementation_log_filepath,
            &self.build_command(),
            lab_test.execution_path(),
        )? {
            lab_test.print_error(&format!("Failed build of {}", self.design_name));
            return Ok(false);
        }
        Ok(true)
    }
}
