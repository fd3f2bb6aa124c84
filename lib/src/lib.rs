pub mod aws;
pub mod config;
pub mod environment;
pub mod error;
pub mod http_gateway;
pub mod notification;
pub mod relay;
pub mod response;
pub mod webhook_notification_service;
