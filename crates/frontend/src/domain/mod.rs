pub mod a001_partner;
pub mod a002_port;
