/// Internal helper to emit items only when the `serde` feature is enabled.
///
/// The `cfg` is evaluated in this crate, so user crates invoking
/// [`crate::define_id!`] get serde impls exactly when `tickid` was built with
/// the feature.
#[doc(hidden)]
#[cfg(feature = "serde")]
#[macro_export]
macro_rules! cfg_serde {
    ($($item:item)*) => { $($item)* };
}

#[doc(hidden)]
#[cfg(not(feature = "serde"))]
#[macro_export]
macro_rules! cfg_serde {
    ($($item:item)*) => {};
}
