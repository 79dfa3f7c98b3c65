pub mod add_record;
pub mod list_records;
