/// Category data structure shared between the database layer and the views.
pub mod category;

/// Application configuration stored as JSON in the platform data directory.
pub mod config;

/// Platform-specific data directory resolution.
pub mod data_storage;

/// Centralized user-facing messages and display macros.
pub mod messages;

/// Task data structure and list filters.
pub mod task;

/// Terminal table rendering for tasks and categories.
pub mod view;
