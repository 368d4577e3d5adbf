//! Commute planner server.
//!
//! A small web service that answers: "what are my best next options
//! right now?" for two fixed commuter routes with static timetables.

pub mod config;
pub mod domain;
pub mod planner;
pub mod schedule;
pub mod web;
