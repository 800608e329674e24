#[macro_export]
macro_rules! expect_errors {
    (types {$($syntax:tt)*} => [$($err:expr,)*]) => {{
        let syntax = stringify!($($syntax)*);
        let errors = syn::parse_str::<htuple_compiler::Invocation>(syntax)
            .unwrap()
            .to_target()
            .unwrap_err();
        expect_errors!(@compare errors, [$($err,)*]);
    }};
    (tuple {$($syntax:tt)*} => [$($err:expr,)*]) => {{
        let syntax = stringify!($($syntax)*);
        let errors = syn::parse_str::<htuple_compiler::ValueInvocation>(syntax)
            .unwrap()
            .to_target(htuple_compiler::Mode::Tuple)
            .unwrap_err();
        expect_errors!(@compare errors, [$($err,)*]);
    }};
    (tie {$($syntax:tt)*} => [$($err:expr,)*]) => {{
        let syntax = stringify!($($syntax)*);
        let errors = syn::parse_str::<htuple_compiler::ValueInvocation>(syntax)
            .unwrap()
            .to_target(htuple_compiler::Mode::Tie)
            .unwrap_err();
        expect_errors!(@compare errors, [$($err,)*]);
    }};
    (@compare $errors:expr, [$($err:expr,)*]) => {{
        use std::collections::HashMap;

        let mut found = HashMap::<String, usize>::new();
        for error in $errors.into_iter() {
            *found.entry(error.to_string()).or_default() += 1;
        }
        let expected_errs: &[htuple_compiler::CompileError] = &[$($err),*];
        let mut expected = HashMap::<String, usize>::new();
        for error in expected_errs {
            *expected.entry(error.to_string()).or_default() += 1;
        }

        assert_eq!(found, expected, "unexpected set of errors");
    }};
}
