mod models;

pub use models::{Credentials, SessionToken};
