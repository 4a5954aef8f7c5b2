use super::*;
use crate::server::service::greeting::GreetingService;

mod announce;
