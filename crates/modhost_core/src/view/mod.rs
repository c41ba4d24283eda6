//! Host view capability contracts.
//!
//! The host displays a view without knowing its concrete producer: it holds
//! a [`ViewProvider`](provider::ViewProvider) behind the trait and asks for
//! a fresh [`View`](view::View) on demand. Rendering belongs to the
//! platform UI layer and is out of scope here.

pub mod provider;
pub mod view;
