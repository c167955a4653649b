//! Executor-level tests: lifecycle, dispatch and payloads through the façade.
