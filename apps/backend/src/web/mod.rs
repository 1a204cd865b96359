//! Request-scoped web context shared by middleware and error rendering.

pub mod trace_ctx;
