pub mod classify;
pub mod cmds;
pub mod config;
pub mod envs;
pub mod error;
pub mod graal;
pub mod jdk;
pub mod launch;
pub mod spawn;
