// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach sources.
pub mod queue_error;
pub mod ring_queue;
pub mod ring_queue_iterator;

// Re-export.
pub use queue_error::*;
pub use ring_queue::*;
pub use ring_queue_iterator::*;
