//! Macros for ergonomic state declarations.

/// Declare a state enum and generate its `State` implementation.
///
/// The enum derives everything `State` requires. `final:` lists the
/// terminal states, if any.
///
/// # Example
///
/// ```
/// use turnmind::state_enum;
/// use turnmind::core::State;
///
/// state_enum! {
///     pub enum MatchState {
///         Lobby,
///         Running,
///         Over,
///     }
///     final: [Over]
/// }
///
/// assert_eq!(MatchState::Running.name(), "Running");
/// assert!(MatchState::Over.is_final());
/// assert_eq!(MatchState::all().len(), 3);
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

        $(final: [$($final:ident),* $(,)?])?
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, serde::Serialize, serde::Deserialize)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant
            ),*
        }

        impl $crate::core::State for $name {
            fn name(&self) -> &'static str {
                match self {
                    $(Self::$variant => stringify!($variant)),*
                }
            }

            fn is_final(&self) -> bool {
                match self {
                    $($(Self::$final => true,)*)?
                    _ => false,
                }
            }

            fn all() -> &'static [Self] {
                &[$(Self::$variant),*]
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use crate::core::State;

    state_enum! {
        enum TestState {
            Waiting,
            Active,
            Closed,
        }
        final: [Closed]
    }

    #[test]
    fn state_enum_macro_generates_trait() {
        assert_eq!(TestState::Waiting.name(), "Waiting");
        assert!(!TestState::Active.is_final());
        assert!(TestState::Closed.is_final());
        assert_eq!(
            TestState::all(),
            &[TestState::Waiting, TestState::Active, TestState::Closed]
        );
    }

    #[test]
    fn state_enum_supports_visibility() {
        state_enum! {
            pub enum PublicState {
                A,
                B,
            }
            final: [B]
        }

        let _state = PublicState::A;
    }

    #[test]
    fn state_enum_works_without_final() {
        state_enum! {
            enum MinimalState {
                One,
                Two,
            }
        }

        assert!(!MinimalState::One.is_final());
        assert!(!MinimalState::Two.is_final());
    }
}
