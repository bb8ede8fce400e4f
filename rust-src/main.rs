//! Salary Dash CLI
//!
//! Dark-themed analytics dashboard for salary-at-30 career records.

mod aggregation;
mod cli;
mod commands;
mod config;
mod data;
mod models;
mod server;
mod visualization;


fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
