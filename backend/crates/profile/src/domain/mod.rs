//! Domain Layer
//!
//! - `entity` - Profile aggregate with its experience and education history
//! - `value_object` - Sparse updates, skills, social links, history dates
//! - `repository` - Persistence and outbound lookup traits

pub mod entity;
pub mod repository;
pub mod value_object;
