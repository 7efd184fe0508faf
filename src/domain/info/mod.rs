//! Resource detail, list and update operations for the dashboard

pub mod dto;
pub mod model;
pub mod service;
