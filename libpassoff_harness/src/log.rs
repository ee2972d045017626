// SPDX-FileCopyrightText: 2022 Intel Corporation
//
// SPDX-License-Identifier: Apache-2.0

//! Line oriented, colored console logging used by the harness and the
//! grading modules.

use color_print::cprintln;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TermColor {
    Blue,
    Green,
    Magenta,
}

pub fn print_info(color: TermColor, msg: &str) {
    match color {
        TermColor::Blue => cprintln!("<green>[INFO]</green> <blue>{}</blue>", msg),
        TermColor::Green => cprintln!("<green>[INFO]</green> <green>{}</green>", msg),
        TermColor::Magenta => cprintln!("<green>[INFO]</green> <magenta>{}</magenta>", msg),
    }
}

pub fn print_warning(msg: &str) {
    cprintln!("<yellow>[WARNING]</yellow> {}", msg);
}

pub fn print_error(msg: &str) {
    cprintln!("<red><bold>[ERROR]</bold></red> {}", msg);
}
