//! Macros for ergonomic state value construction.

/// Build a [`StateValue`](crate::core::StateValue) from a literal.
///
/// A string literal is an atomic value; a braced record of
/// `"region": value` pairs is a compound value, with `{}` marking a
/// childless region.
///
/// # Example
///
/// ```
/// use statechart_core::state_value;
/// use statechart_core::core::StateValue;
///
/// let value = state_value!({
///     "media": { "playing": "fast" },
///     "volume": {},
/// });
///
/// assert_eq!(
///     value,
///     StateValue::compound([
///         ("media", StateValue::compound([("playing", StateValue::atomic("fast"))])),
///         ("volume", StateValue::leaf()),
///     ])
/// );
/// ```
#[macro_export]
macro_rules! state_value {
    ({ $($key:tt : $value:tt),* $(,)? }) => {{
        #[allow(unused_mut)]
        let mut regions = ::std::collections::BTreeMap::new();
        $(
            regions.insert(::std::string::String::from($key), $crate::state_value!($value));
        )*
        $crate::core::StateValue::Compound(regions)
    }};
    ($name:expr) => {
        $crate::core::StateValue::Atomic(::std::string::String::from($name))
    };
}
