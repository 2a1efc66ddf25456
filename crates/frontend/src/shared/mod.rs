pub mod clipboard;
pub mod components;
pub mod config;
pub mod icons;
pub mod links;
pub mod modal_frame;
pub mod notifications;
pub mod observable;
pub mod services;
