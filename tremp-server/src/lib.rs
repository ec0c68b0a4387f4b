//! Community ride-share board server.
//!
//! A web application for a small settlement's car-pool bulletin board:
//! residents post ride offers and requests, and browse them merged with
//! the static bus timetable into one time-ordered, filterable feed.

pub mod auth;
pub mod cache;
pub mod domain;
pub mod email;
pub mod feed;
pub mod schedules;
pub mod store;
pub mod web;
