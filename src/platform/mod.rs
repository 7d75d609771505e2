pub mod blocking;
#[cfg(feature = "desktop")]
pub mod desktop;
pub mod picker;
