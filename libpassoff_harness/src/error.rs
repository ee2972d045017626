// SPDX-FileCopyrightText: 2022 Intel Corporation
//
// SPDX-License-Identifier: Apache-2.0

use thiserror::Error;

/// Infrastructure failures of the harness.
///
/// A tool that is missing or exits non-zero is a grading verdict, not an
/// error: those are reported as `Ok(false)` by the operations that run tools.
#[derive(Debug, Error)]
pub enum PassoffError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to launch '{program}': {source}")]
    Launch {
        program: String,
        #[source]
        source: subprocess::PopenError,
    },

    #[error("malformed YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("invalid lab configuration: {0}")]
    Config(String),

    #[error("unknown file key '{0}'")]
    UnknownFileKey(String),

    #[error("empty command line")]
    EmptyCommand,
}

pub type Result<T> = std::result::Result<T, PassoffError>;
