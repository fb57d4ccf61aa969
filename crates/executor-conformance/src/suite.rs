//! The `atomic_executor_conformance_tests!` macro.
//!
//! This macro generates one `#[tokio::test]` function per executor
//! obligation A1 through A8 for any type that implements
//! `AtomicExecutorApi`.
//!
//! # Usage
//!
//! ```rust,ignore
//! use atomic_executor_conformance::atomic_executor_conformance_tests;
//!
//! atomic_executor_conformance_tests!(MyExecutor::new());
//!
//! // Also pin the version obligation to a known identity:
//! atomic_executor_conformance_tests!(MyExecutor::new(), identity = expected_identity());
//! ```
//!
//! Each generated test function is named `conformance_aNN_<description>` and
//! can be run with `cargo test conformance_` to execute the full suite.

/// Generate conformance tests for an executor implementation.
///
/// The `$executor_expr` expression is evaluated fresh for each test, so
/// each test gets an independent executor instance. Tests can be run in
/// any order.
#[macro_export]
macro_rules! atomic_executor_conformance_tests {
    ($executor_expr:expr, identity = $identity_expr:expr) => {
        $crate::atomic_executor_conformance_tests!($executor_expr);

        #[tokio::test]
        async fn conformance_a02_version_matches_identity() {
            let executor = $executor_expr;
            let expected = $identity_expr;
            $crate::tests::a02_version::test_a02_version_matches(&executor, &expected)
                .await
                .expect("A2: version identity conformance failed");
        }
    };
    ($executor_expr:expr) => {
        #[tokio::test]
        async fn conformance_a01_health_ok() {
            let executor = $executor_expr;
            $crate::tests::a01_health::test_a01_health_ok(&executor)
                .await
                .expect("A1: health conformance failed");
        }

        #[tokio::test]
        async fn conformance_a02_version_stable() {
            let executor = $executor_expr;
            $crate::tests::a02_version::test_a02_version_stable(&executor)
                .await
                .expect("A2: version stability conformance failed");
        }

        #[tokio::test]
        async fn conformance_a03_echo_ping() {
            let executor = $executor_expr;
            $crate::tests::a03_echo::test_a03_echo_ping(&executor)
                .await
                .expect("A3: echo ping conformance failed");
        }

        #[tokio::test]
        async fn conformance_a03_echo_any_inputs() {
            let executor = $executor_expr;
            $crate::tests::a03_echo::test_a03_echo_any_inputs(&executor)
                .await
                .expect("A3: echo inputs conformance failed");
        }

        #[tokio::test]
        async fn conformance_a04_bogus_type() {
            let executor = $executor_expr;
            $crate::tests::a04_unknown_node_type::test_a04_bogus_type(&executor)
                .await
                .expect("A4: bogus.type conformance failed");
        }

        #[tokio::test]
        async fn conformance_a04_unknown_ids() {
            let executor = $executor_expr;
            $crate::tests::a04_unknown_node_type::test_a04_unknown_ids(&executor)
                .await
                .expect("A4: unknown node type conformance failed");
        }

        #[tokio::test]
        async fn conformance_a05_timestamps_ordered() {
            let executor = $executor_expr;
            $crate::tests::a05_timestamps::test_a05_timestamps_ordered(&executor)
                .await
                .expect("A5: timestamp ordering conformance failed");
        }

        #[tokio::test]
        async fn conformance_a06_result_shape() {
            let executor = $executor_expr;
            $crate::tests::a06_result_shape::test_a06_result_shape(&executor)
                .await
                .expect("A6: result shape conformance failed");
        }

        #[tokio::test]
        async fn conformance_a07_node_run_id_echoed() {
            let executor = $executor_expr;
            $crate::tests::a07_run_identity::test_a07_node_run_id_echoed(&executor)
                .await
                .expect("A7: run identity conformance failed");
        }

        #[tokio::test]
        async fn conformance_a08_cancel_noop() {
            let executor = $executor_expr;
            $crate::tests::a08_cancel::test_a08_cancel_noop(&executor)
                .await
                .expect("A8: cancel conformance failed");
        }
    };
}
