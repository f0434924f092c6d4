use crate::prelude::*;

use crate::{components::product::UIProductGrid, utils::CCStr};

#[component]
pub fn CatalogView() -> Element {
    rsx! {
        super::TitledView {
            title: CCStr::from("Products"),
            subtitle: CCStr::from("The storefront catalog, fetched fresh from the products endpoint."),
            ProductGrid {}
        }
    }
}

#[component]
fn ProductGrid() -> Element {
    log::debug!("ProductGrid Rendered");

    let products = helper_hooks::use_resource_products();

    use_drop(|| log::debug!("ProductGrid Dropped"));

    rsx! {
        LoadedComponent::<UIProductGrid> { input: products.into() }
    }
}
