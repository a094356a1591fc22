pub mod dto;
pub mod extract;
pub mod rank;
pub mod resolve;
pub mod task_service;
