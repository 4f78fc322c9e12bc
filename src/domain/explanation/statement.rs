//! Driver statements and the ordered explanation set.

use serde::{Deserialize, Serialize};

use crate::domain::features::Feature;
use crate::domain::foundation::{Direction, RiskBucket, Subsystem};

/// One "why" statement naming a subsystem, a factor and its effect.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DriverStatement {
    pub subsystem: Subsystem,
    pub bucket: RiskBucket,
    pub direction: Direction,
    pub factor: Feature,
    /// Signed contribution on the 0-1 risk scale
    pub contribution: f64,
    pub statement: String,
}

impl DriverStatement {
    pub fn new(
        subsystem: Subsystem,
        bucket: RiskBucket,
        factor: Feature,
        contribution: f64,
        projected: f64,
    ) -> Self {
        let direction = Direction::of(contribution);
        let statement = format!(
            "{} risk is {} (projected {}). {} {} it by {:.2} on the 0-1 risk scale.",
            subsystem.display_name(),
            bucket,
            subsystem.format_value(projected),
            capitalize(factor.label()),
            direction.verb(),
            contribution.abs(),
        );
        Self {
            subsystem,
            bucket,
            direction,
            factor,
            contribution,
            statement,
        }
    }

    pub fn magnitude(&self) -> f64 {
        self.contribution.abs()
    }
}

fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Driver statements in presentation order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExplanationSet {
    statements: Vec<DriverStatement>,
}

impl ExplanationSet {
    pub(crate) fn new(statements: Vec<DriverStatement>) -> Self {
        Self { statements }
    }

    pub fn statements(&self) -> &[DriverStatement] {
        &self.statements
    }

    pub fn iter(&self) -> std::slice::Iter<'_, DriverStatement> {
        self.statements.iter()
    }

    pub fn len(&self) -> usize {
        self.statements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }

    /// Statements about one subsystem, in order.
    pub fn for_subsystem(&self, subsystem: Subsystem) -> impl Iterator<Item = &DriverStatement> {
        self.statements
            .iter()
            .filter(move |s| s.subsystem == subsystem)
    }
}

impl<'a> IntoIterator for &'a ExplanationSet {
    type Item = &'a DriverStatement;
    type IntoIter = std::slice::Iter<'a, DriverStatement>;

    fn into_iter(self) -> Self::IntoIter {
        self.statements.iter()
    }
}
