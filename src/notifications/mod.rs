//! Transient UI notifications.
//!
//! A [`NotificationCenter`] keeps an ordered list of short-lived messages
//! and publishes every change through an [`Observable`], so presentation
//! code can re-render on its own schedule.

mod center;
mod observable;

pub use center::*;
pub use observable::{Observable, Subscription};
