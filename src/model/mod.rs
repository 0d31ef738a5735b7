/******************************************************************************
   Author: Checkout Tech
   Email: dev@checkout.tech
   Date: 16/10/26
******************************************************************************/
/// Request building and dispatch
pub mod http;
/// Request models for API calls
pub mod requests;
/// Response models from API calls
pub mod responses;
/// Input validation helpers
pub mod utils;
