use super::view_model::{PageDisplay, ProductionOrderPageViewModel};
use crate::shared::api_utils::ApiConfig;
use crate::shared::components::date_input::DateInput;
use crate::shared::components::ui::{Badge as UiBadge, StatusBadge};
use crate::shared::date_utils::format_date;
use crate::shared::http_client::{GlooHttpClient, HttpClient};
use crate::shared::notifier::{Notifier, ToastNotifier};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use contracts::domain::a025_production_order::aggregate::ProductionOrder;
use leptos::prelude::*;
use std::rc::Rc;
use thaw::*;
use wasm_bindgen_futures::spawn_local;

/// Order entry page wired to the browser fetch client and the toaster
#[component]
pub fn ProductionOrderPage() -> impl IntoView {
    let client: Rc<dyn HttpClient> = Rc::new(GlooHttpClient::new(ApiConfig::from_location()));
    let notifier: Rc<dyn Notifier> = Rc::new(ToastNotifier::from_context());
    let vm = ProductionOrderPageViewModel::new(client, notifier);

    view! { <ProductionOrderPageView vm=vm /> }
}

#[component]
pub fn ProductionOrderPageView(vm: ProductionOrderPageViewModel) -> impl IntoView {
    let form = vm.form;

    Effect::new(move |_| {
        spawn_local(async move { vm.mount().await });
    });

    view! {
        <PageFrame page_id="a025_production_order--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">{format!("Create {}", ProductionOrder::element_name())}</h1>
                </div>
            </div>

            <div class="page__content">
                <div class="details-form" style="max-width: 800px;">
                    <Flex vertical=true gap=FlexGap::Small>
                        <Label>"Reference"</Label>
                        <Input value=form.reference placeholder="REF-001" />
                        {move || form.errors.get().reference.map(|e| view! { <div class="form__error">{e}</div> })}
                    </Flex>

                    <Flex vertical=true gap=FlexGap::Small>
                        <Label>"Product"</Label>
                        <Input value=form.product />
                        {move || form.errors.get().product.map(|e| view! { <div class="form__error">{e}</div> })}
                    </Flex>

                    <Flex vertical=true gap=FlexGap::Small>
                        <Label>"Quantity"</Label>
                        <Input
                            input_type=InputType::Number
                            value=form.quantity
                            attr:min="1"
                            attr:style="width: 100%;"
                        />
                        {move || form.errors.get().quantity.map(|e| view! { <div class="form__error">{e}</div> })}
                    </Flex>

                    <Flex vertical=true gap=FlexGap::Small>
                        <Label>"Due date"</Label>
                        <DateInput
                            id="a025-due-date"
                            required=true
                            value=form.due_date
                            on_change=move |v| form.due_date.set(v)
                        />
                        {move || form.errors.get().due_date.map(|e| view! { <div class="form__error">{e}</div> })}
                    </Flex>

                    <div class="details-actions">
                        <Button
                            appearance=ButtonAppearance::Primary
                            on_click=move |_| spawn_local(async move { vm.submit().await })
                            disabled=Signal::derive(move || vm.creating.get())
                        >
                            "Add Order"
                        </Button>
                    </div>
                </div>

                <div class="page__header">
                    <div class="page__header-left">
                        <h2 class="page__title">{ProductionOrder::list_name()}</h2>
                        <UiBadge variant="primary".to_string()>
                            {move || vm.order_count().to_string()}
                        </UiBadge>
                    </div>
                    <div class="page__header-right">
                        <Button
                            appearance=ButtonAppearance::Secondary
                            on_click=move |_| spawn_local(async move {
                                match vm.load_orders().await {
                                    Ok(()) => log::debug!("production orders refreshed"),
                                    Err(e) => log::debug!("refresh failed: {}", e),
                                }
                            })
                            disabled=Signal::derive(move || vm.loading.get())
                        >
                            "Refresh"
                        </Button>
                    </div>
                </div>

                {move || match vm.display() {
                    PageDisplay::Loading => view! { <Spinner label="Loading..." /> }.into_any(),
                    PageDisplay::Error(message) => view! {
                        <MessageBar intent=MessageBarIntent::Error>{message}</MessageBar>
                    }.into_any(),
                    PageDisplay::Table => view! { <OrdersTable orders=vm.orders /> }.into_any(),
                }}
            </div>
        </PageFrame>
    }
}

#[component]
fn OrdersTable(orders: RwSignal<Vec<ProductionOrder>>) -> impl IntoView {
    view! {
        <div class="table-wrapper">
            <Table attr:style="width: 100%;">
                <TableHeader>
                    <TableRow>
                        <TableHeaderCell>"ID"</TableHeaderCell>
                        <TableHeaderCell>"Reference"</TableHeaderCell>
                        <TableHeaderCell>"Product"</TableHeaderCell>
                        <TableHeaderCell>"Quantity"</TableHeaderCell>
                        <TableHeaderCell>"Due date"</TableHeaderCell>
                        <TableHeaderCell>"Status"</TableHeaderCell>
                    </TableRow>
                </TableHeader>
                <TableBody>
                    <For
                        each=move || orders.get()
                        key=|order| order.id.clone()
                        children=move |order: ProductionOrder| {
                            let due_date = format_date(&order.due_date);
                            view! {
                                <TableRow>
                                    <TableCell>
                                        <TableCellLayout truncate=true>{order.id.to_string()}</TableCellLayout>
                                    </TableCell>
                                    <TableCell>
                                        <TableCellLayout>{order.reference}</TableCellLayout>
                                    </TableCell>
                                    <TableCell>
                                        <TableCellLayout truncate=true>{order.product}</TableCellLayout>
                                    </TableCell>
                                    <TableCell>
                                        <TableCellLayout>
                                            <span style="font-variant-numeric: tabular-nums;">
                                                {order.quantity}
                                            </span>
                                        </TableCellLayout>
                                    </TableCell>
                                    <TableCell>
                                        <TableCellLayout>{due_date}</TableCellLayout>
                                    </TableCell>
                                    <TableCell>
                                        <TableCellLayout>
                                            <StatusBadge status=order.status />
                                        </TableCellLayout>
                                    </TableCell>
                                </TableRow>
                            }
                        }
                    />
                </TableBody>
            </Table>
            <Show when=move || orders.with(|o| o.is_empty())>
                <div class="table__empty">"No orders yet"</div>
            </Show>
        </div>
    }
}
