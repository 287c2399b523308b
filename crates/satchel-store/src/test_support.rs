//! Shared test utilities for satchel-store unit tests.
