// Window size constants
pub const DEFAULT_WINDOW_WIDTH: f32 = 900.0;
pub const DEFAULT_WINDOW_HEIGHT: f32 = 620.0;
pub const DEFAULT_WINDOW_TITLE: &str = "WAD Peek";

/// Application name, used for the config file location.
pub const APP_NAME: &str = "WAD Peek";

/// Display budget for the busy-state label; longer labels get an ellipsis.
pub const LABEL_BUDGET: usize = 30;

/// Update interval for the elapsed-seconds line while a request is in flight.
pub const WAIT_CLOCK_TICK_MS: u64 = 500;
