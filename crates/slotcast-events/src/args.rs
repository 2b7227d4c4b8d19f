//! Untyped event arguments.

/// A single argument passed to a listener callback.
///
/// Callbacks receive `&[EventArg]`, so any number of heterogeneous values
/// can be forwarded at emit time without a per-event schema.
pub type EventArg = serde_json::Value;

/// Build a `Vec<EventArg>` from a list of expressions.
///
/// Each expression is converted with `serde_json::json!`, so anything
/// implementing `Serialize` is accepted.
///
/// ```rust
/// use slotcast_events::{EventArg, args};
///
/// let args: Vec<EventArg> = args![1, "two", 3.5, true];
/// assert_eq!(args.len(), 4);
/// assert_eq!(args[1], "two");
///
/// assert!(args![].is_empty());
/// ```
#[macro_export]
macro_rules! args {
    () => {
        ::std::vec::Vec::<$crate::EventArg>::new()
    };
    ($($arg:expr),+ $(,)?) => {
        ::std::vec![$($crate::__private::json!($arg)),+]
    };
}
