pub mod exp;
pub mod jwt;
pub mod response;
