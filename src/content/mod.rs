// src/content/mod.rs

/// Articles, comments, quiz questions and the featured resource, with their validation rules.
pub mod models;

/// Keyword routing for the site search box.
pub mod search;

/// Startup provisioning from built-in or file-based content.
pub mod seed;

/// The storage seam and its in-memory implementation.
pub mod store;
