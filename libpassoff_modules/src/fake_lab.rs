// SPDX-FileCopyrightText: 2022 Intel Corporation
//
// SPDX-License-Identifier: Apache-2.0

//! Recording [`LabTest`] used by the module tests. No process is ever
//! launched: commands are logged and succeed unless one of their arguments
//! was marked as failing.

use std::cell::RefCell;
use std::collections::{BTreeMap, BTreeSet};
use std::path::{Path, PathBuf};

use libpassoff_harness::config::BASYS3_PART;
use libpassoff_harness::{LabTest, PassoffError, Result, TermColor};
use tempfile::TempDir;

pub const SETTINGS_FILE: &str = "new_project_settings.tcl";

pub struct FakeLabTest {
    dir: TempDir,
    files: BTreeMap<String, String>,
    missing: BTreeSet<String>,
    failing: BTreeSet<String>,
    commands: RefCell<Vec<Vec<String>>>,
    logs: RefCell<Vec<PathBuf>>,
    probes: RefCell<Vec<Vec<String>>>,
    infos: RefCell<Vec<String>>,
    warnings: RefCell<Vec<String>>,
    errors: RefCell<Vec<String>>,
}

impl FakeLabTest {
    pub fn new() -> Self {
        FakeLabTest {
            dir: TempDir::new().unwrap(),
            files: BTreeMap::new(),
            missing: BTreeSet::new(),
            failing: BTreeSet::new(),
            commands: RefCell::new(Vec::new()),
            logs: RefCell::new(Vec::new()),
            probes: RefCell::new(Vec::new()),
            infos: RefCell::new(Vec::new()),
            warnings: RefCell::new(Vec::new()),
            errors: RefCell::new(Vec::new()),
        }
    }

    /// Map `key` to `filename` and create the file with `contents`.
    pub fn with_file(mut self, key: &str, filename: &str, contents: &str) -> Self {
        std::fs::write(self.dir.path().join(filename), contents).unwrap();
        self.files.insert(key.to_string(), filename.to_string());
        self
    }

    /// Map `key` to `filename` without creating it.
    pub fn with_key(mut self, key: &str, filename: &str) -> Self {
        self.files.insert(key.to_string(), filename.to_string());
        self
    }

    /// Make the executable probe for `program` fail.
    pub fn without_executable(mut self, program: &str) -> Self {
        self.missing.insert(program.to_string());
        self
    }

    /// Make every command that has `arg` in its argv exit non-zero.
    pub fn failing_on(mut self, arg: &str) -> Self {
        self.failing.insert(arg.to_string());
        self
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn commands(&self) -> Vec<Vec<String>> {
        self.commands.borrow().clone()
    }

    pub fn commands_of(&self, program: &str) -> Vec<Vec<String>> {
        self.commands()
            .into_iter()
            .filter(|argv| argv.first().map(String::as_str) == Some(program))
            .collect()
    }

    pub fn logs(&self) -> Vec<PathBuf> {
        self.logs.borrow().clone()
    }

    pub fn probes(&self) -> Vec<Vec<String>> {
        self.probes.borrow().clone()
    }

    pub fn infos(&self) -> Vec<String> {
        self.infos.borrow().clone()
    }

    pub fn warnings(&self) -> Vec<String> {
        self.warnings.borrow().clone()
    }

    pub fn errors(&self) -> Vec<String> {
        self.errors.borrow().clone()
    }

    fn record(&self, argv: &[String]) -> bool {
        self.commands.borrow_mut().push(argv.to_vec());
        !argv.iter().any(|arg| self.failing.contains(arg))
    }
}

impl LabTest for FakeLabTest {
    fn execution_path(&self) -> &Path {
        self.dir.path()
    }

    fn submission_lab_path(&self) -> &Path {
        self.dir.path()
    }

    fn target_part(&self) -> &str {
        BASYS3_PART
    }

    fn project_settings_filename(&self) -> &str {
        SETTINGS_FILE
    }

    fn filename_from_key(&self, key: &str) -> Result<String> {
        self.files
            .get(key)
            .cloned()
            .ok_or_else(|| PassoffError::UnknownFileKey(key.to_string()))
    }

    fn check_executable_existence(&self, probe: &[String]) -> bool {
        self.probes.borrow_mut().push(probe.to_vec());
        match probe.first() {
            Some(program) if !self.missing.contains(program) => true,
            _ => {
                self.print_error("Executable not found");
                false
            }
        }
    }

    fn run_command(&self, argv: &[String], _cwd: &Path) -> Result<bool> {
        Ok(self.record(argv))
    }

    fn subprocess_file_print(&self, log_path: &Path, argv: &[String], _cwd: &Path) -> Result<bool> {
        std::fs::write(log_path, format!("{}\n", argv.join(" ")))?;
        self.logs.borrow_mut().push(log_path.to_path_buf());
        Ok(self.record(argv))
    }

    fn print_info(&self, _color: TermColor, msg: &str) {
        self.infos.borrow_mut().push(msg.to_string());
    }

    fn print_warning(&self, msg: &str) {
        self.warnings.borrow_mut().push(msg.to_string());
    }

    fn print_error(&self, msg: &str) {
        self.errors.borrow_mut().push(msg.to_string());
    }
}
