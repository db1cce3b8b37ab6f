//! Text Menu Module
//!
//! Line-oriented front end over the student store.
//!
//! ## Flow
//! ```text
//!   print menu ──▶ read choice ──▶ prompt fields ──▶ store call ──▶ print outcome
//!        ▲                                                               │
//!        └───────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every outcome, including store errors, is printed and the loop carries
//! on. The loop ends on "Exit" or when input reaches EOF.

mod choice;
mod session;

pub use choice::{Choice, MENU_TEXT};
pub use session::MenuSession;
