//! Admission-controlled comparison dispatch
//!
//! The dispatcher enumerates the Cartesian product of two file sets in a
//! fixed nested order (first directory outer, second inner) and spawns
//! one comparison task per pair, never letting more than N tasks run at
//! once.
//!
//! # Architecture
//!
//! ```text
//!                  ┌───────────────────────────┐
//!                  │        Dispatcher         │
//!                  │  - enumerates (i, j)      │
//!                  │  - active count <= N      │
//!                  │  - reaps completions      │
//!                  └────────────┬──────────────┘
//!                               │ spawn (gated)
//!        ┌──────────────────────┼──────────────────────┐
//!        │                      │                      │
//!  ┌─────▼─────┐          ┌─────▼─────┐          ┌─────▼─────┐
//!  │  Task 1   │          │  Task 2   │   ...    │  Task N   │
//!  │  compare  │          │  compare  │          │  compare  │
//!  └─────┬─────┘          └─────┬─────┘          └─────┬─────┘
//!        │                      │                      │
//!        └──────────────────────┼──────────────────────┘
//!                               ▼
//!                 crossbeam completion channel
//!                 (TaskReport: verdict + bytes)
//! ```
//!
//! Completion order is unconstrained: the channel delivers reports as
//! tasks finish, and the dispatcher decrements its active count once per
//! received report. Only the dispatcher thread touches the count.

pub mod dispatcher;
pub mod task;

pub use dispatcher::{Dispatcher, RunSummary};
pub use task::{PairTask, TaskReport};
