//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render individual pieces of shop chrome and emit intents upward
//! through callbacks; pages own the state they bind to.

pub mod add_sweet_modal;
pub mod sweet_card;
