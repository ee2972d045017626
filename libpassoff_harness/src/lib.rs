// SPDX-FileCopyrightText: 2022 Intel Corporation
//
// SPDX-License-Identifier: Apache-2.0

pub mod config;
pub mod error;
pub mod log;
pub mod paths;
pub mod process;

pub use config::LabConfig;
pub use error::{PassoffError, Result};
pub use lab_test::{FsLabTest, LabTest};
pub use log::TermColor;
