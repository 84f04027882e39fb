// SPDX-License-Identifier: MPL-2.0
//! `cs_job_finder` is a desktop scout for software companies near you, built
//! with the Iced GUI framework.
//!
//! It acquires the user's position through a pluggable location provider,
//! then shows a map of the surrounding area with a link to the full list in
//! Google Maps.
//!
//! # Layout
//!
//! - [`domain`] - Positions, map URLs and geolocation errors
//! - [`application`] - The location provider port and the acquisition use case
//! - [`infrastructure`] - Provider adapters and the browser launcher
//! - [`ui`] - Iced components, widgets and styles
//! - [`app`] - The application shell

#![doc(html_root_url = "https://docs.rs/cs_job_finder/0.1.0")]

pub mod app;
pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod i18n;
pub mod infrastructure;
pub mod ui;
