//! Exit code constants for the dynaprompt CLI.
//!
//! - 0: Success
//! - 1: User error (bad args, invalid config)
//! - 2: Invalid node input
//! - 3: Prompt engine failure
//! - 4: Wildcard directory failure

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// User error: bad arguments or an invalid configuration file.
pub const USER_ERROR: i32 = 1;

/// Node input could not be decoded or is out of range.
pub const INPUT_FAILURE: i32 = 2;

/// The sampling engine reported a fault that the cursor does not recover from.
pub const ENGINE_FAILURE: i32 = 3;

/// Wildcard directory could not be resolved, created, or listed.
pub const WILDCARD_FAILURE: i32 = 4;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_codes_are_distinct() {
        let codes = [
            SUCCESS,
            USER_ERROR,
            INPUT_FAILURE,
            ENGINE_FAILURE,
            WILDCARD_FAILURE,
        ];
        for (i, &a) in codes.iter().enumerate() {
            for (j, &b) in codes.iter().enumerate() {
                if i != j {
                    assert_ne!(a, b, "Exit codes must be distinct");
                }
            }
        }
    }
}
