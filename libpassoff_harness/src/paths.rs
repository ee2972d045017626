// SPDX-FileCopyrightText: 2022 Intel Corporation
//
// SPDX-License-Identifier: Apache-2.0

use std::io;
use std::path::{self, Component, Path, PathBuf};

/// Express `target` relative to `base`. Relative inputs are taken from the
/// current directory first, so the two may be given in different forms.
///
/// Returns `.` when the two paths are the same directory.
pub fn relative_path(target: &Path, base: &Path) -> io::Result<PathBuf> {
    let target = path::absolute(target)?;
    let base = path::absolute(base)?;

    let target: Vec<Component> = target
        .components()
        .filter(|c| !matches!(c, Component::CurDir))
        .collect();
    let base: Vec<Component> = base
        .components()
        .filter(|c| !matches!(c, Component::CurDir))
        .collect();

    let common = target
        .iter()
        .zip(base.iter())
        .take_while(|(t, b)| t == b)
        .count();

    let mut rel = PathBuf::new();
    for _ in &base[common..] {
        rel.push("..");
    }
    for component in &target[common..] {
        rel.push(component.as_os_str());
    }

    if rel.as_os_str().is_empty() {
        rel.push(".");
    }
    Ok(rel)
}
