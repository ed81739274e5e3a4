//! Exit code constants for the dupsweep CLI.
//!
//! - 0: Success (both passes completed, regardless of how many targets
//!   were already missing)
//! - 1: User error (bad args, missing or invalid manifest)
//! - 2: Cleanup failure (a deletion failed for a reason other than
//!   not-found or not-empty)

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// User error: bad arguments or a missing/invalid manifest.
pub const USER_ERROR: i32 = 1;

/// Cleanup failure: a file or directory could not be deleted.
pub const CLEANUP_FAILURE: i32 = 2;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_codes_are_distinct() {
        let codes = [SUCCESS, USER_ERROR, CLEANUP_FAILURE];
        for (i, &a) in codes.iter().enumerate() {
            for (j, &b) in codes.iter().enumerate() {
                if i != j {
                    assert_ne!(a, b, "Exit codes must be distinct");
                }
            }
        }
    }

    #[test]
    fn success_is_zero() {
        assert_eq!(SUCCESS, 0);
        assert_eq!(USER_ERROR, 1);
        assert_eq!(CLEANUP_FAILURE, 2);
    }
}
