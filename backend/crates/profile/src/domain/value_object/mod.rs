pub mod field_update;
pub mod history;
pub mod history_date;
pub mod skills;
pub mod social;
