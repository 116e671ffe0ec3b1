pub mod a025_production_order;
