//! Exit code constants for the quickreply CLI.
//!
//! - 0: Success
//! - 1: User error (bad args, unknown template)
//! - 2: Validation failure (template missing title or content)
//! - 3: Configuration error (bad config, missing assistant credential)
//! - 4: Storage failure
//! - 5: Content assistant failure
//! - 6: Clipboard failure

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// User error: bad arguments or a template that does not exist.
pub const USER_ERROR: i32 = 1;

/// Validation failure: a template draft is missing its title or content.
pub const VALIDATION_FAILURE: i32 = 2;

/// Configuration error: invalid config file or missing credential.
pub const CONFIG_ERROR: i32 = 3;

/// Storage failure: the template collection could not be written.
pub const STORAGE_FAILURE: i32 = 4;

/// Content assistant failure: provider unreachable, rejected, or timed out.
pub const ASSISTANT_FAILURE: i32 = 5;

/// Clipboard failure: neither rich nor plain-text write succeeded.
pub const CLIPBOARD_FAILURE: i32 = 6;
