//! Debugging feature flags.
//!
//! Toggle individual diagnostics here; keep the noisy ones `false` so normal
//! runs stay quiet.

pub struct DebugFlags {
    /// Emit record counts and source attribution after each feed load.
    pub print_fetch: bool,
    /// Emit UI interaction logs (marker clicks, checkbox toggles).
    pub print_ui_interactions: bool,
    /// Emit dataset/point counts every time the chart is re-projected.
    pub print_projection: bool,
    /// Emit reload-cycle scheduling logs.
    pub print_reload: bool,
}

pub const DEBUG_FLAGS: DebugFlags = DebugFlags {
    print_fetch: true,
    print_ui_interactions: false,
    print_projection: false,
    print_reload: false,
};
