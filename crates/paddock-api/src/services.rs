mod dashboard;

pub use dashboard::DashboardService;
