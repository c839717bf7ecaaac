//! Adapters: conversion of parser values, and section writers
//! applying the merge policy of [merge].
#[macro_use]
pub(crate) mod merge;

pub(crate) mod basic;

mod aerodrome;
mod current;
mod essentials;
mod forecast;
mod historical;
mod metadata;
mod station;

pub(crate) use aerodrome::AerodromeAdapter;
pub(crate) use current::CurrentAdapter;
pub(crate) use essentials::EssentialsAdapter;
pub(crate) use forecast::ForecastAdapter;
pub(crate) use historical::HistoricalAdapter;
pub(crate) use merge::Warnings;
pub(crate) use metadata::collate_metadata;
pub(crate) use station::StationAdapter;
