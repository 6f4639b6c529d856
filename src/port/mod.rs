//! Trait definitions (hexagonal ports). Depend only on domain.
//!
//! ```text
//!   ┌──────────────┐      ┌──────────────┐      ┌────────────────┐
//!   │ CLI adapter  │ ───▶ │    Roster    │ ───▶ │ EmployeeStore  │
//!   │  (inbound)   │      │ (application)│      │ (SQLite/memory)│
//!   └──────────────┘      └──────────────┘      └────────────────┘
//! ```

pub mod outbound;

pub use outbound::store::EmployeeStore;
