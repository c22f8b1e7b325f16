use serde::Deserialize;
use serde::Serialize;

/// Knobs for a single [`validate`](crate::validation::validate) run.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(default)]
pub struct ValidationOptions {
    /// Stop validating once this many errors have been reported. `None`
    /// means no limit.
    pub max_errors: Option<usize>,
    pub execution: RuleExecution,
}

impl Default for ValidationOptions {
    fn default() -> Self {
        Self {
            max_errors: Some(100),
            execution: RuleExecution::default(),
        }
    }
}

/// How rules are scheduled over the document.
#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleExecution {
    /// All rules share one traversal.
    #[default]
    Parallel,

    /// Each rule gets its own traversal, one after another.
    Sequential,
}
