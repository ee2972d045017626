// SPDX-FileCopyrightText: 2022 Intel Corporation
//
// SPDX-License-Identifier: Apache-2.0

use std::path::PathBuf;
use std::process::ExitCode;

use chrono::Local;
use clap::{value_parser, Arg, ArgMatches, Command};
use color_print::cprintln;

use libpassoff_harness::{FsLabTest, LabConfig, LabTest, PassoffError, TermColor};
use libpassoff_modules::{modules_from_config, PassoffModule, TesterModule};

#[derive(Debug, PartialEq, Eq)]
pub enum Verdict {
    Pass,
    Fail,
    Error(String),
}

fn cli() -> Command {
    Command::new("lab-passoff")
        .about("Grade an HDL lab submission with the Vivado toolchain")
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .value_parser(value_parser!(PathBuf))
                .default_value("lab.yml")
                .help("Lab description (YAML)"),
        )
        .arg(
            Arg::new("submission")
                .long("submission")
                .short('s')
                .value_parser(value_parser!(PathBuf))
                .required(true)
                .help("Directory holding the extracted submission for the lab"),
        )
        .arg(
            Arg::new("execution")
                .long("execution")
                .short('e')
                .value_parser(value_parser!(PathBuf))
                .help("Directory to run the tools in (defaults to the submission directory)"),
        )
        .arg(
            Arg::new("module")
                .long("module")
                .short('m')
                .value_parser(value_parser!(usize))
                .help("Only run the module with this index"),
        )
}

/// Run each module independently; a failure does not stop the modules after it.
pub fn run_modules(lab_test: &dyn LabTest, modules: &[(usize, PassoffModule)]) -> Vec<(String, Verdict)> {
    let mut verdicts = Vec::new();
    for (index, module) in modules {
        let name = module.module_name();
        lab_test.print_info(
            TermColor::Magenta,
            &format!(
                "[{}] Module {}: {}",
                Local::now().format("%Y-%m-%d %H:%M:%S"),
                index,
                name
            ),
        );

        let verdict = match module.perform_test(lab_test) {
            Ok(true) => Verdict::Pass,
            Ok(false) => Verdict::Fail,
            Err(err) => {
                lab_test.print_error(&format!("{}: {}", name, err));
                Verdict::Error(err.to_string())
            }
        };
        verdicts.push((name, verdict));
    }
    verdicts
}

fn print_summary(verdicts: &[(String, Verdict)]) {
    cprintln!("<bold>Summary</bold>");
    for (name, verdict) in verdicts {
        match verdict {
            Verdict::Pass => cprintln!("  <green>PASS</green>  {}", name),
            Verdict::Fail => cprintln!("  <red>FAIL</red>  {}", name),
            Verdict::Error(err) => cprintln!("  <red>FAIL</red>  {} ({})", name, err),
        }
    }
}

fn passoff(matches: &ArgMatches) -> Result<bool, PassoffError> {
    let config_filename = matches
        .get_one::<PathBuf>("config")
        .ok_or_else(|| PassoffError::Config("no lab configuration given".to_string()))?;
    let config = LabConfig::new_from_config_file(config_filename)?;

    let submission = matches
        .get_one::<PathBuf>("submission")
        .ok_or_else(|| PassoffError::Config("no submission directory given".to_string()))?;
    let submission = std::fs::canonicalize(submission)?;
    let execution = match matches.get_one::<PathBuf>("execution") {
        Some(dir) => std::fs::canonicalize(dir)?,
        None => submission.clone(),
    };

    let modules: Vec<(usize, PassoffModule)> = modules_from_config(&config)?
        .into_iter()
        .enumerate()
        .filter(|(index, _)| matches.get_one::<usize>("module").map_or(true, |only| only == index))
        .collect();
    if modules.is_empty() {
        return Err(PassoffError::Config(format!(
            "lab '{}' has no module to run",
            config.name
        )));
    }

    let lab_test = FsLabTest::from_config(&config, submission, execution);
    lab_test.print_info(TermColor::Green, &format!(" Lab {}", config.name));

    let verdicts = run_modules(&lab_test, &modules);
    print_summary(&verdicts);
    Ok(verdicts.iter().all(|(_, verdict)| *verdict == Verdict::Pass))
}

pub fn main() -> ExitCode {
    let matches = cli().get_matches();
    match passoff(&matches) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(err) => {
            cprintln!("<red><bold>[ERROR]</bold></red> {}", err);
            ExitCode::FAILURE
        }
    }
}
