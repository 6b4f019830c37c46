//! Leptos Pager
//!
//! Client-side pagination over a fixed, already-known row set.
//! The core (`PageState`, `control_row`, `Paginator`) never touches the DOM;
//! rendering goes through a caller-supplied callback so it can drive a Leptos
//! signal or rows that already exist in a server-rendered table.

mod config;
mod error;
mod hook;
mod paginator;
mod state;
mod view;
mod window;

pub use config::{PagerConfig, SinglePagePolicy, DEFAULT_MAX_VISIBLE};
pub use error::PagerError;
pub use hook::{use_paginator, PagerHandle};
pub use paginator::{PageSnapshot, Paginator, RenderPage};
pub use state::{PageState, RangeLabel};
pub use view::{PageControls, PageRange};
pub use window::{control_row, page_window, PageControl};
