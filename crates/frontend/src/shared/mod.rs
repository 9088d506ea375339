pub mod session_storage;
