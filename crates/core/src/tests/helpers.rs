// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::NumberSource;
use global_lotto_domain::{DrawResult, Rule, RuleCatalog};
use std::collections::VecDeque;

/// Number source that replays a fixed script of values.
///
/// Panics if the script runs out or a value falls outside the requested range,
/// so a test fails loudly when the engine consumes more randomness than expected.
pub struct ScriptedSource {
    values: VecDeque<u8>,
    requests: Vec<u8>,
}

impl ScriptedSource {
    pub fn new(values: &[u8]) -> Self {
        Self {
            values: values.iter().copied().collect(),
            requests: Vec::new(),
        }
    }

    /// The `upper` bound of every pick so far, in order.
    pub fn requests(&self) -> &[u8] {
        &self.requests
    }

    pub fn remaining(&self) -> usize {
        self.values.len()
    }
}

impl NumberSource for ScriptedSource {
    fn pick(&mut self, upper: u8) -> u8 {
        self.requests.push(upper);
        let value: u8 = self.values.pop_front().expect("script exhausted");
        assert!(
            (1..=upper).contains(&value),
            "scripted value {value} outside 1..={upper}"
        );
        value
    }
}

pub fn rule_for(code: &str) -> Rule {
    *RuleCatalog::builtin().get_rule(code).unwrap()
}

pub fn kr_rule() -> Rule {
    rule_for("KR")
}

pub fn us_rule() -> Rule {
    rule_for("US")
}

pub fn jp_rule() -> Rule {
    rule_for("JP")
}

pub fn eu_rule() -> Rule {
    rule_for("EU")
}

/// Asserts every structural property a draw must have under `rule`.
pub fn assert_valid_draw(rule: &Rule, result: &DrawResult) {
    let main: &[u8] = result.main_numbers();
    let bonus: &[u8] = result.bonus_numbers();

    assert_eq!(main.len(), usize::from(rule.main_count()));
    assert!(main.windows(2).all(|w| w[0] < w[1]), "main not strictly ascending: {main:?}");
    assert!(main.iter().all(|n| (1..=rule.main_max()).contains(n)));

    assert_eq!(bonus.len(), usize::from(rule.bonus_count()));
    assert!(bonus.windows(2).all(|w| w[0] < w[1]), "bonus not strictly ascending: {bonus:?}");
    assert!(bonus.iter().all(|n| (1..=rule.bonus_max()).contains(n)));

    if rule.bonus_disjoint_from_main() {
        assert!(
            bonus.iter().all(|n| !main.contains(n)),
            "bonus {bonus:?} overlaps main {main:?}"
        );
    }
}
