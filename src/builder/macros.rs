//! Macros for declaring state and trigger enums.

/// Declare a fieldless enum usable as a state identifier.
///
/// The enum derives everything a state or trigger identifier needs, plus
/// serde support, and gains `name()`, `ALL` and a `Display` impl printing the
/// variant name. Callers need `serde` among their dependencies.
///
/// # Example
///
/// ```
/// use hsm::state_enum;
///
/// state_enum! {
///     pub enum Motion {
///         Root,
///         Idle,
///         Jump,
///     }
/// }
///
/// assert_eq!(Motion::Jump.name(), "Jump");
/// assert_eq!(Motion::ALL.len(), 3);
/// assert_eq!(Motion::Idle.to_string(), "Idle");
/// ```
#[macro_export]
macro_rules! state_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(
            Clone,
            Copy,
            PartialEq,
            Eq,
            Hash,
            Debug,
            serde::Serialize,
            serde::Deserialize
        )]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant
            ),*
        }

        impl $name {
            /// Every variant, in declaration order.
            #[allow(dead_code)]
            pub const ALL: &'static [$name] = &[$(Self::$variant),*];

            /// Variant name.
            #[allow(dead_code)]
            pub fn name(&self) -> &'static str {
                match self {
                    $(Self::$variant => stringify!($variant)),*
                }
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.name())
            }
        }
    };
}

/// Declare a fieldless enum usable as a trigger identifier.
///
/// Expands exactly like [`state_enum!`].
///
/// ```
/// use hsm::trigger_enum;
///
/// trigger_enum! {
///     enum Signal {
///         JumpSignal,
///     }
/// }
///
/// assert_eq!(Signal::JumpSignal.name(), "JumpSignal");
/// ```
#[macro_export]
macro_rules! trigger_enum {
    ($($body:tt)*) => {
        $crate::state_enum! { $($body)* }
    };
}
