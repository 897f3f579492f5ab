//! Design System Components for Leptos
//!
//! Reusable UI building blocks shared by the hub page, the editor and the
//! viewer. None of these own business state.

mod badge;
mod button;
mod input;
mod loading;
mod modal;
mod select;

pub use badge::{Badge, BadgeVariant};
pub use button::{Button, ButtonVariant};
pub use input::Input;
pub use loading::LoadingSpinner;
pub use modal::Modal;
pub use select::Select;
