//! # Notez Architecture
//!
//! Notez is a small note keeper built as a **UI-agnostic library** with a thin
//! CLI client on top.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI (main.rs, args.rs)                                     │
//! │  - Parses arguments, prints results, owns exit codes        │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade, owns the NoteStore                          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - One operation per module, returns CmdResult              │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  NoteStore (notes.rs)                                       │
//! │  - Collection, active selection, input buffers              │
//! │  - create / select / update / delete, sync on change        │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - SlotStorage trait: FileSlots, InMemorySlots              │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## No I/O Assumptions in Core
//!
//! From `api.rs` inward, code never writes to stdout/stderr and never exits
//! the process. Diagnostics go through the `log` facade; the binary decides
//! where they end up.
//!
//! ## Module Overview
//!
//! - [`api`]: the facade every UI talks to
//! - [`commands`]: one module per operation
//! - [`notes`]: the note store and its persistence rule
//! - [`store`]: slot storage backends
//! - [`model`]: `Note` and `InputBuffers`
//! - [`id`]: collision-checked id generation
//! - [`config`]: `config.json` handling
//! - [`editor`]: `$EDITOR` round-trip for the input buffers
//! - [`error`]: error types

pub mod api;
pub mod commands;
pub mod config;
pub mod editor;
pub mod error;
pub mod id;
pub mod model;
pub mod notes;
pub mod store;
