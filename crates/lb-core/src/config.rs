//! Run configuration.

use serde::Deserialize;

/// Knobs shared by the simulator and the `ladybug` binary.
///
/// Every field has a default, so an empty TOML file (or none at all) yields
/// [`SimConfig::default`].
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// Echo every line of a loaded board or tree file to the console.
    pub echo_inputs: bool,

    /// When a tick resumes mid-tree and the root completes without any
    /// action having run, walk the freshly reset tree once more from the
    /// root so the call still performs an action if one is reachable.
    pub wrap_around: bool,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            echo_inputs: true,
            wrap_around: true,
        }
    }
}
