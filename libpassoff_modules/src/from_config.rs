// SPDX-FileCopyrightText: 2022 Intel Corporation
//
// SPDX-License-Identifier: Apache-2.0

use libpassoff_harness::config::{required_str, string_list};
use libpassoff_harness::{LabConfig, PassoffError, Result};
use serde_yaml::Value;

use crate::build_bitstream::BuildBitstream;
use crate::tcl_simulation::TclSimulation;
use crate::testbench_simulation::TestbenchSimulation;
use crate::tester_module::PassoffModule;

/// Build every module listed under `lab.modules`, in order.
pub fn modules_from_config(config: &LabConfig) -> Result<Vec<PassoffModule>> {
    config
        .modules
        .iter()
        .enumerate()
        .map(|(index, entry)| {
            module_from_yaml(entry).map_err(|err| match err {
                PassoffError::Config(msg) => PassoffError::Config(format!("module {}: {}", index, msg)),
                other => other,
            })
        })
        .collect()
}

pub fn module_from_yaml(entry: &Value) -> Result<PassoffModule> {
    let module: PassoffModule = match required_str(entry, "kind")? {
        "tcl_simulation" => TclSimulation::new(
            required_str(entry, "tcl")?,
            required_str(entry, "top")?,
            string_list(entry, "hdl")?,
        )
        .into(),
        "testbench_simulation" => TestbenchSimulation::new(
            required_str(entry, "description")?,
            required_str(entry, "top")?,
            string_list(entry, "hdl")?,
            string_list(entry, "xelab_options")?,
        )
        .into(),
        "build_bitstream" => BuildBitstream::builder()
            .design_name(required_str(entry, "design")?)
            .xdc_key_list(string_list(entry, "xdc")?)
            .hdl_key_list(string_list(entry, "hdl")?)
            .implement_build(entry["implement"].as_bool().unwrap_or(true))
            .create_dcp(entry["create_dcp"].as_bool().unwrap_or(false))
            .build()
            .into(),
        kind => {
            return Err(PassoffError::Config(format!(
                "unknown module kind '{}'",
                kind
            )))
        }
    };
    Ok(module)
}
