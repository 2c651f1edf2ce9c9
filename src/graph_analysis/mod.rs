/// Domain layer - dependency graph model and pure graph services
///
/// Nothing in this module performs I/O. The graph is built once and only
/// read afterwards, so every service here can run concurrently over it.
pub mod domain;
pub mod services;
