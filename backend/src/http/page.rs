//! Embedded dashboard page.
//!
//! The page is a thin view renderer: it drives a session through the REST API
//! and draws whatever panels the server reports as updated.

pub const DASHBOARD_PAGE: &str = include_str!("../../static/dashboard.html");
