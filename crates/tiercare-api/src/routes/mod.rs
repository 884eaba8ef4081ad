pub mod assessments;
pub mod health;
pub mod questionnaires;
pub mod ui;
