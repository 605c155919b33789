pub mod resume_check;
