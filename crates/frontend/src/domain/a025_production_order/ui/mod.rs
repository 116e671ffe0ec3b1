pub mod page;

pub use page::ProductionOrderPage;
