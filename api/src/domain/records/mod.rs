pub mod medical_record;
