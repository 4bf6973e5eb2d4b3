// SPDX-FileCopyrightText: 2026 Huddle contributors
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    huddle_cli::run()
}
