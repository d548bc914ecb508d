//! Integration tests of the service mesh control plane
//!
//! The harness in [`test`] renders YAML templates, applies them to a
//! cluster and polls until the cluster has converged. Scenarios live in
//! `tests/` and import everything from [`test::prelude`].
