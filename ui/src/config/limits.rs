// Copy indicator limits
pub const MIN_COPY_FEEDBACK_MS: u64 = 250;
pub const MAX_COPY_FEEDBACK_MS: u64 = 10_000;
