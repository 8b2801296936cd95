pub mod catalog;
pub mod checkbox;
pub mod dropdown;
pub mod login;
pub mod pattern_model;
pub mod radio;
pub mod required_form;
pub mod search;
pub mod validation;
pub mod values;
