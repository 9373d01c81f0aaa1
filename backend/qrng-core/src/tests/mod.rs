mod config;
mod password;
