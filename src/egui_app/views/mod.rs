//! egui views: the auth form and the signed-in dashboard.
//!
//! Views are presentation only. They read the session store's state and
//! dispatch actions; every rule about what a valid submission looks like
//! lives in `shared::validation` and the store itself.

pub mod auth_view;
pub mod dashboard_view;
