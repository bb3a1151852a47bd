//! Argument limits the remote program enforces. Checked client-side so a
//! doomed instruction is never submitted.

pub const MAX_NAME_LEN: usize = 32;
pub const MAX_BIO_LEN: usize = 500;
pub const MAX_SKILLS: usize = 10;
pub const MAX_TITLE_LEN: usize = 100;
pub const MAX_DESCRIPTION_LEN: usize = 2000;
pub const MAX_URL_LEN: usize = 500;
pub const MIN_DEADLINE_HOURS: u64 = 1;
/// Thirty days.
pub const MAX_DEADLINE_HOURS: u64 = 720;
pub const MIN_RATING: u8 = 1;
pub const MAX_RATING: u8 = 5;
