//! Wallet selection core: trigger/overlay coordination plus the pure
//! partition policy behind the picker overlay.
//!
//! The two collaborators this crate deliberately does not own:
//! - the overlay/windowing primitive, injected through
//!   [`dialog::DialogService`] (open a component, get back a handle with a
//!   single asynchronous close notification);
//! - the per-item rendering surface, supplied by the embedding UI.
//!
//! What it does own is the policy: at most one overlay in flight per
//! trigger, exactly one close notification per accepted request, and the
//! installed/other partition with its onboarding recommendation.

pub mod dialog;
pub mod partition;
pub mod trigger;
pub mod wallet;

pub use dialog::{DialogConfig, DialogHandle, DialogPoll, DialogRequest, DialogService};
pub use partition::WalletPartition;
pub use trigger::PickerTrigger;
pub use wallet::{ReadyState, Wallet, WalletName};
