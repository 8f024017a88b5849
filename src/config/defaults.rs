/// Hex digits accepted per input unless overridden (1 MiB of digits).
pub const DEFAULT_MAX_HEX_LEN: usize = 1024 * 1024;

/// Largest value `--max-hex-len` may be raised to.
pub(super) const MAX_HEX_LEN_HARD_LIMIT: usize = 64 * 1024 * 1024;

/// Smallest useful cap: one byte.
pub(super) const MIN_HEX_LEN: usize = 2;

/// Diagnostics echo at most this many characters of a failing input.
pub const DIAGNOSTIC_ECHO_CHARS: usize = 64;

/// Sample inputs decoded by `--demo`.
pub const DEMO_INPUTS: [&str; 2] = [
    "5765204d616b652054756d6d69657320486170707921",
    "e299a5205765204d616b652054756d6d792048617070792120e299a5",
];
