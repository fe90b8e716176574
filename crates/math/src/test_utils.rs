use std::sync::Once;

/// `derive_type`
///
/// Allow compiler to derive the type of a variable,
/// which is necessary for the test functions.
pub(crate) fn dt<T>(_: T, _: T) {}

/// `built_type`
///
///  Allow compiler to derive the type of a variable, and return right.
pub(crate) fn bt<T>(_: T, ret: T) -> T {
    ret
}

/// Install a fmt subscriber writing to the test output, so that events are
/// shown for failing tests. Safe to call from every test.
pub(crate) fn init_tracing() {
    static INIT: Once = Once::new();

    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("debug")),
            )
            .with_test_writer()
            .try_init();
    });
}

// --------------------------------- fraction ----------------------------------

/// Macro for unit tests for `Fraction`.
/// Is not possible to use [`test_case::test_case`] because the backing integer
/// is different for each test case.
///
/// The macro passes `Fraction::ZERO` as first parameter of the callback
/// function, so the compiler can derive the type (see [`dt`] and [`bt`]).
#[macro_export(local_inner_macros)]
macro_rules! fraction_test {
    // No Args
    (
        $name:ident
        $(attrs = $(#[$meta:meta])* $(,)?)?
        method = $test_fn:expr
    ) => {
        fraction_test!($name
            inputs = {
                i32 = []
                i64 = []
                i128 = []
            }
            $(attrs = $(#[$meta])*)?
            method = $test_fn
        );
    };
    // Multiple optional tests with attrs.
    (
        $name:ident
        inputs = {
            $(i32 = [$($pi32:expr),*] $(,)?)?
            $(i64 = [$($pi64:expr),*] $(,)?)?
            $(i128 = [$($pi128:expr),*] $(,)?)?
        } $(,)?
        attrs = $(#[$meta:meta])* $(,)?
        method = $test_fn:expr
    ) => {
        paste::paste! {
            $(#[$meta])*
            #[allow(clippy::just_underscores_and_digits)]
            #[test]
            fn [<$name _i32>]() {
                $(
                    ($test_fn)(<$crate::Fraction32 as $crate::NumberConst>::ZERO, $($pi32),*);
                )?
            }

            $(#[$meta])*
            #[allow(clippy::just_underscores_and_digits)]
            #[test]
            fn [<$name _i64>]() {
                $(
                    ($test_fn)(<$crate::Fraction64 as $crate::NumberConst>::ZERO, $($pi64),*);
                )?
            }

            $(#[$meta])*
            #[allow(clippy::just_underscores_and_digits)]
            #[test]
            fn [<$name _i128>]() {
                $(
                    ($test_fn)(<$crate::Fraction128 as $crate::NumberConst>::ZERO, $($pi128),*);
                )?
            }
        }
    };
    // Multiple optional tests without attrs.
    (
        $name:ident
        inputs = {
            $(i32 = [$($pi32:expr),*] $(,)?)?
            $(i64 = [$($pi64:expr),*] $(,)?)?
            $(i128 = [$($pi128:expr),*] $(,)?)?
        } $(,)?
        method = $test_fn:expr
    ) => {
        paste::paste! {
            $(
                #[test]
                #[allow(clippy::just_underscores_and_digits)]
                fn [<$name _i32>]() {
                    ($test_fn)(<$crate::Fraction32 as $crate::NumberConst>::ZERO, $($pi32),*);
                }
            )?

            $(
                #[test]
                #[allow(clippy::just_underscores_and_digits)]
                fn [<$name _i64>]() {
                    ($test_fn)(<$crate::Fraction64 as $crate::NumberConst>::ZERO, $($pi64),*);
                }
            )?

            $(
                #[test]
                #[allow(clippy::just_underscores_and_digits)]
                fn [<$name _i128>]() {
                    ($test_fn)(<$crate::Fraction128 as $crate::NumberConst>::ZERO, $($pi128),*);
                }
            )?
        }
    };
    // Passing and failing samples.
    (
        $name:ident
        inputs = {
            $(i32 = {
                passing: [$($pi32:expr),* $(,)?] $(,)?
                $(failing: [$($fi32:expr),* $(,)?])? $(,)?
            } $(,)? )?
            $(i64 = {
                passing: [$($pi64:expr),* $(,)?] $(,)?
                $(failing: [$($fi64:expr),* $(,)?])? $(,)?
            } $(,)? )?
            $(i128 = {
                passing: [$($pi128:expr),* $(,)?] $(,)?
                $(failing: [$($fi128:expr),* $(,)?])? $(,)?
            } $(,)? )?
        } $(,)?
        $(attrs = $(#[$meta:meta])*)? $(,)?
        method = $test_fn:expr
    ) => {
        fraction_test!(
            $name
            inputs = {
                $(i32 = [[$($pi32),*] $(, [$($fi32),*])?])?
                $(i64 = [[$($pi64),*] $(, [$($fi64),*])?])?
                $(i128 = [[$($pi128),*] $(, [$($fi128),*])?])?
            }
            $(attrs = $(#[$meta])*)?
            method = $test_fn
        );
    };
}
