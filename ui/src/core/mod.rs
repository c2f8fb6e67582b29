//! Platform glue shared by every view: persistence, DOM helpers, timers.

pub mod listeners;
pub mod motion;
pub mod platform;
pub mod storage;
pub mod timing;
