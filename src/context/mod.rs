pub mod element_model;
pub mod grouping;
pub mod normalize;
pub mod page_context;
