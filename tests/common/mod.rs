#![allow(dead_code)]

use std::time::Duration;

pub const SHORT_DELAY: Duration = Duration::from_millis(100);
pub const SHORT_TIMEOUT: Duration = Duration::from_millis(500);
pub const LONG_TIMEOUT: Duration = Duration::from_secs(3);
pub const STRESS_TIMEOUT: Duration = Duration::from_secs(10);
pub const ITEMS_LOW: usize = 50;
pub const ITEMS_MEDIUM: usize = 200;
pub const ITEMS_HIGH: usize = 1000;
pub const ITEMS_STRESS: usize = 50_000;
