pub mod record;
pub mod report;
pub mod sort_spec;
