use tilegrid_core::Range;

/// Engine-wide collision settings, passed in at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct CollisionConfig {
    /// When `false`, the hero walks through tiles occupied by allies.
    pub allow_ally_collision: bool,
    /// A path query with no explicit node limit may settle
    /// `map area / path_limit_divisor` nodes.
    pub path_limit_divisor: u32,
}

impl Default for CollisionConfig {
    fn default() -> Self {
        Self {
            allow_ally_collision: false,
            path_limit_divisor: 10,
        }
    }
}

impl CollisionConfig {
    /// Set whether the hero is blocked by allies.
    pub fn with_ally_collision(mut self, allow: bool) -> Self {
        self.allow_ally_collision = allow;
        self
    }

    /// Set the divisor of the implicit path budget.
    pub fn with_path_limit_divisor(mut self, divisor: u32) -> Self {
        self.path_limit_divisor = divisor;
        self
    }

    /// Node budget used when a path query passes a limit of zero.
    /// Never less than one so the start tile can always be settled.
    pub fn default_path_limit(&self, bounds: Range) -> usize {
        (bounds.len() / self.path_limit_divisor.max(1) as usize).max(1)
    }
}
