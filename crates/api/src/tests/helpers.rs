// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Test helper functions and fixtures.

use global_lotto::NumberSource;

use crate::{DrawRequest, WishInput};

/// Number source whose n-th pick (from zero) returns `upper - n`, never below 1.
pub struct CountdownSource {
    next: u8,
}

impl CountdownSource {
    pub const fn new() -> Self {
        Self { next: 0 }
    }
}

impl NumberSource for CountdownSource {
    fn pick(&mut self, upper: u8) -> u8 {
        let value: u8 = upper.saturating_sub(self.next).max(1);
        self.next = self.next.saturating_add(1);
        value
    }
}

pub fn create_draw_request(country: &str, wishes: Option<WishInput>) -> DrawRequest {
    DrawRequest {
        country: String::from(country),
        wishes,
    }
}

/// Writes `contents` to a fresh file in the system temp directory.
pub fn write_temp_catalog(name: &str, contents: &str) -> std::path::PathBuf {
    let path: std::path::PathBuf = std::env::temp_dir().join(format!(
        "global-lotto-{}-{name}.json",
        std::process::id()
    ));
    std::fs::write(&path, contents).unwrap();
    path
}
