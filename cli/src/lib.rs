// SPDX-FileCopyrightText: 2026 Huddle contributors
//
// SPDX-License-Identifier: Apache-2.0

mod cli;
mod cmd_event;
mod cmd_show;
mod config;
mod render;
mod storage;

pub use crate::cli::{Cli, Commands, run};
pub use crate::config::Config;
pub use crate::storage::FileStorage;
