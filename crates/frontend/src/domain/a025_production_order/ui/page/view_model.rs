use super::form::ProductionOrderForm;
use super::model::{OrderError, ProductionOrderApi};
use crate::shared::http_client::HttpClient;
use crate::shared::notifier::Notifier;
use contracts::domain::a025_production_order::aggregate::{
    CreateProductionOrderDto, ProductionOrder,
};
use leptos::prelude::*;
use std::rc::Rc;

pub const MSG_ORDER_CREATED: &str = "Order created successfully";

/// What the listing section shows. Loading beats error, error beats the table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageDisplay {
    Loading,
    Error(String),
    Table,
}

impl PageDisplay {
    pub fn select(loading: bool, error: Option<String>) -> Self {
        match (loading, error) {
            (true, _) => PageDisplay::Loading,
            (false, Some(message)) => PageDisplay::Error(message),
            (false, None) => PageDisplay::Table,
        }
    }
}

/// ViewModel for the production order entry page
#[derive(Clone, Copy)]
pub struct ProductionOrderPageViewModel {
    pub orders: RwSignal<Vec<ProductionOrder>>,
    pub loading: RwSignal<bool>,
    pub error: RwSignal<Option<String>>,
    pub creating: RwSignal<bool>,
    pub form: ProductionOrderForm,
    mounted: StoredValue<bool>,
    api: StoredValue<Rc<ProductionOrderApi>, LocalStorage>,
    notifier: StoredValue<Rc<dyn Notifier>, LocalStorage>,
}

impl ProductionOrderPageViewModel {
    pub fn new(client: Rc<dyn HttpClient>, notifier: Rc<dyn Notifier>) -> Self {
        Self {
            orders: RwSignal::new(Vec::new()),
            loading: RwSignal::new(false),
            error: RwSignal::new(None),
            creating: RwSignal::new(false),
            form: ProductionOrderForm::new(),
            mounted: StoredValue::new(false),
            api: StoredValue::new_local(Rc::new(ProductionOrderApi::new(client))),
            notifier: StoredValue::new_local(notifier),
        }
    }

    pub fn display(&self) -> PageDisplay {
        PageDisplay::select(self.loading.get(), self.error.get())
    }

    pub fn order_count(&self) -> usize {
        self.orders.with(|orders| orders.len())
    }

    /// Initial load. Runs once per view model, later calls are ignored.
    pub async fn mount(&self) {
        if self.mounted.get_value() {
            log::debug!("production orders already loaded for this page");
            return;
        }
        self.mounted.set_value(true);
        if let Err(e) = self.load_orders().await {
            log::debug!("initial load failed: {}", e);
        }
    }

    /// Replace the order list with the server's
    pub async fn load_orders(&self) -> Result<(), OrderError> {
        let api = self.api.get_value();

        self.loading.set(true);
        self.error.set(None);

        let result = api.fetch_list().await;
        let outcome = match result {
            Ok(orders) => {
                log::debug!("loaded {} production orders", orders.len());
                self.orders.set(orders);
                Ok(())
            }
            Err(e) => {
                log::warn!("{}: {}", e, e.cause());
                self.error.set(Some(e.to_string()));
                Err(e)
            }
        };

        self.loading.set(false);
        outcome
    }

    /// "Add Order" handler: validate the form, then create
    pub async fn submit(&self) {
        if self.creating.get_untracked() {
            return;
        }
        match self.form.validate() {
            Ok(dto) => {
                let _ = self.create_order(dto).await;
            }
            Err(errors) => log::debug!("production order form invalid: {:?}", errors),
        }
    }

    /// POST a validated order and append the server's copy
    pub async fn create_order(
        &self,
        input: CreateProductionOrderDto,
    ) -> Result<ProductionOrder, OrderError> {
        let api = self.api.get_value();
        let notifier = self.notifier.get_value();

        self.creating.set(true);
        let result = api.create(&input).await;
        self.creating.set(false);

        match result {
            Ok(order) => {
                log::info!("created production order {}", order.id);
                self.orders.update(|orders| orders.push(order.clone()));
                notifier.success(MSG_ORDER_CREATED);
                self.form.reset();
                Ok(order)
            }
            Err(e) => {
                log::warn!("{}: {}", e, e.cause());
                notifier.error(&e.to_string());
                Err(e)
            }
        }
    }
}
