/// Fill every listed field, in the listed order.
///
/// Invoke it in the module that defines the type so private fields can be
/// listed. Tuple structs list their indices.
///
/// ```
/// mod ledger {
///     #[derive(Debug, Default)]
///     pub struct Entry {
///         pub memo: String,
///         cents: i64,
///     }
///     probity_rand::fill_record!(Entry { memo, cents });
///
///     impl Entry {
///         pub fn cents(&self) -> i64 {
///             self.cents
///         }
///     }
/// }
///
/// let entry: ledger::Entry = probity_rand::Filler::from_seed(7).generate();
/// assert_eq!(entry.memo.len(), 16);
/// assert!(entry.cents() >= 0);
/// ```
#[macro_export]
macro_rules! fill_record {
    ($ty:ty { $($field:tt),* $(,)? }) => {
        impl $crate::Fill for $ty {
            fn target(&mut self) -> $crate::Target<'_> {
                $crate::Target::Record(::std::vec![
                    $( &mut self.$field as &mut dyn $crate::Fill ),*
                ])
            }
        }
    };
}
