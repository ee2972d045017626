// SPDX-FileCopyrightText: 2022 Intel Corporation
//
// SPDX-License-Identifier: Apache-2.0

//! Lab description loaded from YAML.
//!
//! ```yaml
//! lab:
//!   name: lab3
//!   part: xc7a35tcpg236-1
//!   settings_file: new_project_settings.tcl
//!   files:
//!     adder4: adder4.sv
//!   modules:
//!     - kind: testbench_simulation
//!       ...
//! ```
//!
//! Module entries are kept as raw YAML; the module crate decides how to
//! interpret them.

use std::collections::BTreeMap;
use std::path::Path;

use serde_yaml::Value;

use crate::error::{PassoffError, Result};

/// FPGA part of the Basys3 board used by the labs.
pub const BASYS3_PART: &str = "xc7a35tcpg236-1";

/// Settings script generated for every lab and sourced before a build.
pub const NEW_PROJECT_SETTINGS_FILENAME: &str = "new_project_settings.tcl";

#[derive(Clone, Debug)]
pub struct LabConfig {
    pub name: String,
    pub part: String,
    pub settings_file: String,
    /// file key -> file name relative to the submission lab directory
    pub files: BTreeMap<String, String>,
    pub modules: Vec<Value>,
}

impl LabConfig {
    pub fn new_from_config_file<P: AsRef<Path>>(config_filename: P) -> Result<Self> {
        let yaml_fd = std::fs::File::open(config_filename)?;
        let config: Value = serde_yaml::from_reader(yaml_fd)?;
        Self::from_value(&config)
    }

    pub fn from_yaml_str(text: &str) -> Result<Self> {
        let config: Value = serde_yaml::from_str(text)?;
        Self::from_value(&config)
    }

    fn from_value(config: &Value) -> Result<Self> {
        let lab = &config["lab"];
        if !lab.is_mapping() {
            return Err(PassoffError::Config(
                "missing top level 'lab' section".to_string(),
            ));
        }

        let name = lab["name"].as_str().unwrap_or("lab").to_string();
        let part = lab["part"].as_str().unwrap_or(BASYS3_PART).to_string();
        let settings_file = lab["settings_file"]
            .as_str()
            .unwrap_or(NEW_PROJECT_SETTINGS_FILENAME)
            .to_string();

        let mut files = BTreeMap::new();
        match &lab["files"] {
            Value::Null => {}
            Value::Mapping(mapping) => {
                for (key, filename) in mapping {
                    let (Some(key), Some(filename)) = (key.as_str(), filename.as_str()) else {
                        return Err(PassoffError::Config(format!(
                            "file entry {:?}: {:?} must map a string key to a file name",
                            key, filename
                        )));
                    };
                    files.insert(key.to_string(), filename.to_string());
                }
            }
            _ => {
                return Err(PassoffError::Config(
                    "'files' must be a mapping of file keys to file names".to_string(),
                ))
            }
        }

        let modules = match &lab["modules"] {
            Value::Null => Vec::new(),
            Value::Sequence(modules) => modules.clone(),
            _ => {
                return Err(PassoffError::Config(
                    "'modules' must be a list".to_string(),
                ))
            }
        };

        Ok(LabConfig {
            name,
            part,
            settings_file,
            files,
            modules,
        })
    }
}

/// Read `entry[field]` as a list of strings. An absent field is an empty list.
pub fn string_list(entry: &Value, field: &str) -> Result<Vec<String>> {
    match &entry[field] {
        Value::Null => Ok(Vec::new()),
        Value::Sequence(items) => items
            .iter()
            .map(|item| {
                item.as_str().map(str::to_string).ok_or_else(|| {
                    PassoffError::Config(format!("'{}' must only contain strings", field))
                })
            })
            .collect(),
        _ => Err(PassoffError::Config(format!("'{}' must be a list", field))),
    }
}

/// Read a mandatory string field.
pub fn required_str<'a>(entry: &'a Value, field: &str) -> Result<&'a str> {
    entry[field]
        .as_str()
        .ok_or_else(|| PassoffError::Config(format!("missing string field '{}'", field)))
}
