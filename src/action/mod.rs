pub mod action_model;
