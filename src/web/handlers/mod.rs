//! # Web API Request Handlers

pub mod queues;
