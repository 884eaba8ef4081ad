pub mod cssrs;
pub mod gad7;
pub mod phq4;
pub mod phq9;
