pub mod education;
pub mod experience;
pub mod owner;
pub mod profile;
pub mod repo_summary;
