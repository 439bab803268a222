// Dependency-pinning crate; intentionally empty.
