pub mod config {
    pub mod app_config;
    pub mod latency_config;
}
pub mod setup {
    pub mod dependency_injection;
}
pub mod viewmodels {
    pub mod errors;
    pub mod product;
    pub mod user;
}
