// error_chain macro can recurse deeply
#![recursion_limit = "1024"]

#[macro_use]
extern crate error_chain;
#[macro_use(lazy_static)]
extern crate lazy_static;
#[macro_use]
extern crate log;

pub mod aggregate;
pub mod args;
pub mod commands;
pub mod constants;
pub mod errors;
pub mod fasta;
pub mod guides;
pub mod iupac;
pub mod progress;
pub mod record;
pub mod strategy;
