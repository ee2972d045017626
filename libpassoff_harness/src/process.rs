// SPDX-FileCopyrightText: 2022 Intel Corporation
//
// SPDX-License-Identifier: Apache-2.0

//! Blocking execution of external tools.
//!
//! Every command is a full argv (`argv[0]` is the program). Exit codes are
//! collapsed to a pass/fail boolean; failing to launch the program at all is
//! an error.

use std::fs::File;
use std::io::{BufRead, BufReader, Write};
use std::path::Path;

use subprocess::{Exec, NullFile, Redirection};

use crate::error::{PassoffError, Result};

/// Build an argv from string literals and owned arguments alike.
pub fn argv<S: AsRef<str>>(parts: &[S]) -> Vec<String> {
    parts.iter().map(|p| p.as_ref().to_string()).collect()
}

fn split_program(argv: &[String]) -> Result<(&String, &[String])> {
    argv.split_first().ok_or(PassoffError::EmptyCommand)
}

fn launch_error(program: &str) -> impl FnOnce(subprocess::PopenError) -> PassoffError + '_ {
    move |source| PassoffError::Launch {
        program: program.to_string(),
        source,
    }
}

/// Run `argv` in `cwd` with stdio inherited from this process.
pub fn run(argv: &[String], cwd: &Path) -> Result<bool> {
    let (program, args) = split_program(argv)?;

    let status = Exec::cmd(program)
        .args(args)
        .cwd(cwd)
        .join()
        .map_err(launch_error(program))?;

    Ok(status.success())
}

/// Check that a probe command (e.g. `xvlog --version`) can be launched and
/// exits cleanly. Output is discarded.
pub fn probe(argv: &[String]) -> bool {
    let Ok((program, args)) = split_program(argv) else {
        return false;
    };

    match Exec::cmd(program)
        .args(args)
        .stdin(NullFile)
        .stdout(NullFile)
        .stderr(NullFile)
        .join()
    {
        Ok(status) => status.success(),
        Err(_) => false,
    }
}

/// Run `argv` in `cwd` with stderr merged into stdout and copy every line,
/// as soon as it is produced, to `console` and to a fresh file at `log_path`.
///
/// Both sinks are flushed after each line so the log survives the tool being
/// killed from outside.
pub fn tee_to_file<W: Write>(
    argv: &[String],
    cwd: &Path,
    log_path: &Path,
    console: &mut W,
) -> Result<bool> {
    let (program, args) = split_program(argv)?;
    let mut log = File::create(log_path)?;

    let mut popen = Exec::cmd(program)
        .args(args)
        .cwd(cwd)
        .stdin(NullFile)
        .stdout(Redirection::Pipe)
        .stderr(Redirection::Merge)
        .popen()
        .map_err(launch_error(program))?;

    if let Some(stdout) = popen.stdout.take() {
        let mut reader = BufReader::new(stdout);
        let mut line = Vec::new();
        loop {
            line.clear();
            if reader.read_until(b'\n', &mut line)? == 0 {
                break;
            }
            console.write_all(&line)?;
            console.flush()?;
            log.write_all(&line)?;
            log.flush()?;
        }
    }

    let status = popen.wait().map_err(launch_error(program))?;
    Ok(status.success())
}
