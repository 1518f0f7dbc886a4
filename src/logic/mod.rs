pub mod backend;
pub mod chart;
pub mod controller;
pub mod export;
pub mod verdict;
pub mod view;
