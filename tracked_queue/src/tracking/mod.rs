// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach sources.
pub mod callback_tracker;
pub mod revision_tracker;
pub mod tracker;

// Re-export.
pub use callback_tracker::*;
pub use revision_tracker::*;
pub use tracker::*;
