pub mod panic;
#[cfg(feature = "hash")]
pub mod result;
