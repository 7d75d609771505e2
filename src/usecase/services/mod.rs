pub mod edit_service;
pub mod import_service;
