#[cfg(test)]
mod common;

#[cfg(test)]
mod sign_in_tests;

#[cfg(test)]
mod session_tests;

#[cfg(test)]
mod dashboard_load_tests;

#[cfg(test)]
mod refresh_tests;

#[cfg(test)]
mod portal_flow_tests;

#[cfg(test)]
mod views_tests;

#[cfg(test)]
mod config_tests;
