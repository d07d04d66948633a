//! End-to-end tests for the trellis workspace
