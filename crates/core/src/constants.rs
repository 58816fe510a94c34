/// Length of a list share code
pub const SHARE_CODE_LENGTH: usize = 6;

/// Alphabet used when generating share codes
pub const SHARE_CODE_ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Maximum number of saved-product suggestions returned by a search
pub const PRODUCT_SUGGESTION_LIMIT: usize = 5;

/// Decimal precision for display
pub const DISPLAY_DECIMAL_PRECISION: u32 = 2;
